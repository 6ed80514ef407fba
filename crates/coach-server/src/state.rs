use std::sync::Arc;

use coach_core::PhrasePool;

use crate::config::ServerConfig;
use crate::slack::SlackClient;

/// Shared application state passed to all route handlers.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub slack: Arc<SlackClient>,
    pub phrases: Arc<PhrasePool>,
}

impl AppState {
    pub fn new(config: ServerConfig, phrases: PhrasePool) -> Self {
        let slack = SlackClient::new(config.bot_token.clone(), config.slack_api_base.clone());
        Self {
            config: Arc::new(config),
            slack: Arc::new(slack),
            phrases: Arc::new(phrases),
        }
    }
}
