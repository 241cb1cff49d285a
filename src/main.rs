//! Status dashboard binary

use clap::{Parser, ValueEnum};
use downdev_detector::display::{render_card, render_dashboard, render_json};
use downdev_detector::registry::select_sources;
use downdev_detector::{
    collect_incrementally, default_sources, run_cycle, Config, DashboardState, HttpStatusFetcher,
    Result,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "downdev_detector", version, about = "Which developer services are down right now")]
struct Cli {
    /// Only show services whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    query: String,

    /// Read search queries from stdin after loading, re-rendering on each line
    #[arg(short, long)]
    interactive: bool,

    /// Print the visible reports as JSON
    #[arg(long)]
    json: bool,

    /// Print each service as soon as its status arrives, then the sorted view
    #[arg(long)]
    incremental: bool,

    /// Restrict the run to these registry entries
    #[arg(long, value_name = "NAME", env = "DOWNDEV_ONLY", value_delimiter = ',')]
    only: Vec<String>,

    /// Per-request timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(seconds) = cli.timeout {
        config.http_timeout = Some(Duration::from_secs(seconds));
    }
    if let Some(format) = cli.log_format {
        config.json_logs = matches!(format, LogFormat::Json);
    }

    initialize_tracing(&config);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let sources = select_sources(default_sources(), &cli.only);
    info!("Polling {} status pages", sources.len());

    let fetcher = Arc::new(HttpStatusFetcher::new(&config)?);

    let mut state = DashboardState::new().set_query(cli.query.clone()).begin_cycle();
    if !cli.json && !cli.incremental {
        print!("{}", render_dashboard(&state));
    }

    let outcome = if cli.incremental {
        let quiet = cli.json;
        Ok(collect_incrementally(fetcher.as_ref(), &sources, &cli.query, |report| {
            if !quiet {
                print!("{}", render_card(report));
            }
        })
        .await)
    } else {
        run_cycle(fetcher, &sources).await
    };

    state = match outcome {
        Ok(reports) => state.complete_cycle(reports),
        Err(e) => {
            error!("Error fetching data: {}", e);
            state.fail_cycle()
        }
    };

    show(&state, cli.json)?;

    if cli.interactive {
        search_loop(state, cli.json).await?;
    }

    Ok(())
}

fn show(state: &DashboardState, json: bool) -> Result<()> {
    let screen = if json {
        format!("{}\n", render_json(state)?)
    } else {
        format!("\n{}", render_dashboard(state))
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(screen.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Each stdin line replaces the query; `:q` or end of input stops
async fn search_loop(mut state: DashboardState, json: bool) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("search> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim_end_matches('\r');
        if query == ":q" {
            break;
        }

        state = state.set_query(query);
        show(&state, json)?;
    }

    Ok(())
}

/// Initialize structured logging on stderr
fn initialize_tracing(config: &Config) {
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .init();
    }
}
