//! Compiled-in list of status pages to poll

/// Path of the summary document on Atlassian Statuspage hosts
pub const ATLASSIAN_SUMMARY_PATH: &str = "api/v2/summary.json";

/// One status page endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub endpoint: String,
}

impl Source {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Source for an Atlassian-hosted status page rooted at `base_url`
    pub fn atlassian(name: impl Into<String>, base_url: &str) -> Self {
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            ATLASSIAN_SUMMARY_PATH
        );
        Self::new(name, endpoint)
    }
}

const ATLASSIAN_PAGES: &[(&str, &str)] = &[
    ("Notion", "https://status.notion.so"),
    ("Figma", "https://status.figma.com"),
    ("Discord", "https://discordstatus.com"),
    ("Vercel", "https://www.vercel-status.com"),
    ("GitHub", "https://www.githubstatus.com"),
    ("Render", "https://status.render.com"),
    ("Cloudinary", "https://status.cloudinary.com"),
    ("Jira", "https://jira-software.status.atlassian.com"),
    ("Open IA", "https://status.openai.com"),
    ("npm", "https://status.npmjs.org"),
    ("DataDog", "https://status.datadoghq.com"),
    ("LinkedIn", "https://www.linkedin-status.com"),
    ("Linode", "https://status.linode.com"),
    ("Digital Ocean", "https://status.digitalocean.com"),
    ("Miro", "https://status.miro.com"),
    ("Trello", "https://trello.status.atlassian.com"),
    ("Udemy", "https://status.udemy.com"),
    ("Cloudflare", "https://www.cloudflarestatus.com"),
    ("CircleCI", "https://status.circleci.com"),
    ("Sentry", "https://status.sentry.io"),
];

/// The default registry, in display order of the original list
pub fn default_sources() -> Vec<Source> {
    ATLASSIAN_PAGES
        .iter()
        .map(|(name, base)| Source::atlassian(*name, base))
        .collect()
}

/// Keep only the sources whose name matches one of `names`, ignoring case.
/// An empty selection keeps the whole registry.
pub fn select_sources(sources: Vec<Source>, names: &[String]) -> Vec<Source> {
    if names.is_empty() {
        return sources;
    }

    sources
        .into_iter()
        .filter(|source| {
            names
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(&source.name))
        })
        .collect()
}
