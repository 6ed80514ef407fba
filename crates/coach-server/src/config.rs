/// Default Slack Web API endpoint.
pub const SLACK_API_BASE: &str = "https://slack.com/api";

/// Requests older than this many seconds are treated as replays.
pub const DEFAULT_MAX_REQUEST_AGE_SECS: i64 = 300;

/// Server settings, built once at startup and shared read-only.
#[derive(Clone)]
pub struct ServerConfig {
    pub signing_secret: String,
    pub bot_token: String,
    pub slack_api_base: String,
    pub max_request_age_secs: i64,
}

impl ServerConfig {
    pub fn new(signing_secret: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            bot_token: bot_token.into(),
            slack_api_base: SLACK_API_BASE.to_string(),
            max_request_age_secs: DEFAULT_MAX_REQUEST_AGE_SECS,
        }
    }

    /// Builder: point the Slack client at another base URL.
    pub fn with_slack_api_base(mut self, base: impl Into<String>) -> Self {
        self.slack_api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_request_age(mut self, secs: i64) -> Self {
        self.max_request_age_secs = secs;
        self
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("signing_secret", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .field("slack_api_base", &self.slack_api_base)
            .field("max_request_age_secs", &self.max_request_age_secs)
            .finish()
    }
}
