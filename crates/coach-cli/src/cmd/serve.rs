use anyhow::{Context, Result};
use clap::Args;
use coach_core::PhrasePool;
use coach_server::config::{DEFAULT_MAX_REQUEST_AGE_SECS, SLACK_API_BASE};
use coach_server::ServerConfig;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "COACH_PETER_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Slack app signing secret
    #[arg(long, env = "SLACK_SIGNING_SECRET", hide_env_values = true)]
    signing_secret: String,

    /// Slack bot token (xoxb-...)
    #[arg(long, env = "SLACK_BOT_TOKEN", hide_env_values = true)]
    bot_token: String,

    /// Phrase file to use instead of the built-in announcements
    #[arg(long, env = "COACH_PETER_PHRASES")]
    phrases: Option<PathBuf>,

    /// Slack Web API base URL
    #[arg(long, env = "SLACK_API_BASE", default_value = SLACK_API_BASE)]
    slack_api_base: String,

    /// Reject signed requests older than this many seconds
    #[arg(long, default_value_t = DEFAULT_MAX_REQUEST_AGE_SECS)]
    max_request_age: i64,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let phrases = load_phrases(args.phrases.as_deref())?;
    let config = ServerConfig::new(args.signing_secret, args.bot_token)
        .with_slack_api_base(args.slack_api_base)
        .with_max_request_age(args.max_request_age);
    let addr = format!("{}:{}", args.bind, args.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(coach_server::serve(config, phrases, &addr))
}

/// Load the phrase pool once; every request shares it.
fn load_phrases(path: Option<&Path>) -> Result<PhrasePool> {
    let Some(path) = path else {
        return Ok(PhrasePool::builtin()?);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading phrase file {}", path.display()))?;
    let pool = PhrasePool::parse(&text)
        .with_context(|| format!("loading phrase file {}", path.display()))?;
    tracing::info!(path = %path.display(), templates = pool.len(), "loaded phrases");
    Ok(pool)
}
