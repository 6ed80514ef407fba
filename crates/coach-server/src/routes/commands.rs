use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use coach_core::{Reply, RngPicker, SlashCommand};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// Body of a slash-command response.
#[derive(Debug, Serialize)]
pub struct SlashReply {
    pub response_type: &'static str,
    pub text: String,
}

impl SlashReply {
    /// Reply visible only to the person who ran the command.
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            text: text.into(),
        }
    }
}

/// POST /slack/commands: entry point for the `/passball` slash command.
///
/// A completed rotation answers with an empty 200; the announcement posted to
/// the channel is the visible result.
pub async fn slash_command(
    State(app): State<AppState>,
    Form(command): Form<SlashCommand>,
) -> Result<Response, AppError> {
    tracing::info!(
        user = %command.user_id,
        channel = %command.channel_id,
        text = %command.text,
        "slash command received"
    );

    let mut picker = RngPicker::from_entropy();
    let reply = command
        .execute(app.slack.as_ref(), &app.phrases, &mut picker)
        .await?;

    Ok(match reply {
        Reply::Silent(outcome) => {
            tracing::info!(
                group = %outcome.group,
                from = %outcome.previous_holder,
                to = %outcome.new_holder,
                "role passed"
            );
            StatusCode::OK.into_response()
        }
        Reply::Ephemeral(text) => Json(SlashReply::ephemeral(text)).into_response(),
    })
}
