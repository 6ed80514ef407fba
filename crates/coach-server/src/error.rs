use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coach_core::CoachError;

use crate::routes::commands::SlashReply;

/// Prefix of every error shown to the person who ran the command.
pub const ERROR_PREFIX: &str = "Sorry, something has gone wrong";

// ---------------------------------------------------------------------------
// Internal sentinels
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 401 through the `anyhow::Error` chain.
#[derive(Debug)]
struct Unauthorized(String);

impl std::fmt::Display for Unauthorized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Unauthorized {}

/// Carries an explicit HTTP 400 through the `anyhow::Error` chain.
#[derive(Debug)]
struct BadRequest(String);

impl std::fmt::Display for BadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequest {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// Rotation failures are answered with HTTP 200 and an ephemeral reply,
/// since Slack only shows the body of a successful response to the user.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(Unauthorized(msg.into()).into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequest(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<Unauthorized>() {
            tracing::warn!(reason = %u, "rejected request");
            return (StatusCode::UNAUTHORIZED, u.0.clone()).into_response();
        }
        if let Some(b) = self.0.downcast_ref::<BadRequest>() {
            return (StatusCode::BAD_REQUEST, b.0.clone()).into_response();
        }

        if let Some(e) = self.0.downcast_ref::<CoachError>() {
            match e {
                CoachError::InvalidCommand(_) => tracing::info!(error = %e, "invalid command"),
                _ => tracing::error!(error = ?e, "rotation failed"),
            }
            let text = match e {
                // Usage text reads better without the apology.
                CoachError::InvalidCommand(msg) => msg.clone(),
                _ => format!("{ERROR_PREFIX}: {e}"),
            };
            return (StatusCode::OK, Json(SlashReply::ephemeral(text))).into_response();
        }

        tracing::error!(error = %format!("{:#}", self.0), "unhandled error");
        (StatusCode::INTERNAL_SERVER_ERROR, ERROR_PREFIX).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
