use std::path::PathBuf;

/// Webhook the original lead-search page posts to.
pub const DEFAULT_WEBHOOK_URL: &str = "https://webhook.ia-tess.com.br/webhook/scraping-google-maps";

pub const DEFAULT_USER_AGENT: &str = "leads/0.1 (lead-search)";

#[derive(Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub log_level: String,
    /// `None` leaves the request unbounded; the endpoint decides how long a search takes.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub placeholder_interval_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Webhook URLs often embed a routing token in the path.
        let webhook_host = self
            .webhook_url
            .split("://")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .unwrap_or("[unparseable]");

        f.debug_struct("AppConfig")
            .field("webhook_host", &webhook_host)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("output_dir", &self.output_dir)
            .field("placeholder_interval_ms", &self.placeholder_interval_ms)
            .finish_non_exhaustive()
    }
}
