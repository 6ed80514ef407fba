use thiserror::Error;

/// Failure reported by one of the chat-platform collaborators.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{method} failed: {error}")]
    Api { method: String, error: String },

    #[error("unexpected response from {method}: {detail}")]
    Decode { method: String, detail: String },
}

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("invalid receiver: {0}")]
    InvalidReference(String),

    #[error("invalid user group supplied: {0}")]
    InvalidGroup(String),

    #[error("no config found in description")]
    ConfigNotFound,

    #[error("malformed config line: {0}")]
    ConfigMalformed(#[source] serde_json::Error),

    #[error("no candidates found")]
    NoCandidates,

    #[error("membership lookup failed: {0}")]
    LookupFailed(#[source] PlatformError),

    #[error("could not announce the new holder: {0}")]
    AnnounceFailed(#[source] PlatformError),

    #[error("could not reassign the user group: {0}")]
    ReassignFailed(#[source] PlatformError),

    #[error("phrase template error: {0}")]
    Template(String),

    #[error("phrase pool is empty")]
    NoPhrases,

    #[error("{0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, CoachError>;
