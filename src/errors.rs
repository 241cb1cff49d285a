//! Error types for the status dashboard

use std::fmt;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug)]
pub enum DashboardError {
    /// IO operation failed
    Io(std::io::Error),

    /// HTTP request failed before a response arrived
    Http(reqwest::Error),

    /// Response body was not a status summary
    Json(serde_json::Error),

    /// Status page answered outside the 2xx range
    Status(u16),

    /// Configuration error
    Config(String),

    /// The fan-out itself broke down (a fetch task panicked or was aborted)
    Cycle(String),

    /// Generic error with message
    Other(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Io(err) => write!(f, "IO error: {}", err),
            DashboardError::Http(err) => write!(f, "HTTP error: {}", err),
            DashboardError::Json(err) => write!(f, "JSON error: {}", err),
            DashboardError::Status(code) => write!(f, "Unexpected response status: {}", code),
            DashboardError::Config(msg) => write!(f, "Configuration error: {}", msg),
            DashboardError::Cycle(msg) => write!(f, "Fetch cycle failed: {}", msg),
            DashboardError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Io(err) => Some(err),
            DashboardError::Http(err) => Some(err),
            DashboardError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err)
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Json(err)
    }
}

impl From<tokio::task::JoinError> for DashboardError {
    fn from(err: tokio::task::JoinError) -> Self {
        DashboardError::Cycle(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display() {
        let err = DashboardError::Status(503);
        assert_eq!(err.to_string(), "Unexpected response status: 503");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_json_error_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DashboardError = parse_err.into();
        assert!(err.to_string().starts_with("JSON error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: DashboardError = io_err.into();
        assert!(err.to_string().contains("stdout closed"));
    }
}
