use serde::Deserialize;

use crate::config::RotationConfig;
use crate::error::{CoachError, Result};
use crate::phrases::PhrasePool;
use crate::platform::Platform;
use crate::rotation::{rotate, ConfigSource, RotationOutcome, RotationRequest};
use crate::selector::Picker;

pub const USAGE: &str = "Usage:\n\
    `/passball` passes the role using the line in this channel's description\n\
    `/passball <group> <receiver>...` passes the role to one of the receivers\n\
    `/passball setup <group> <receiver>...` prints the description line to configure this channel";

/// The fields of an inbound slash command the rotation cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlashCommand {
    #[serde(default)]
    pub text: String,
    pub user_id: String,
    pub channel_id: String,
}

/// What a slash command asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Rotate(ConfigSource),
    /// Reply privately to the requester without touching the platform.
    Reply(String),
}

/// What to send back to the requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The public announcement is the response; nothing else to say.
    Silent(RotationOutcome),
    Ephemeral(String),
}

impl SlashCommand {
    /// Interpret the command text.
    pub fn action(&self) -> Result<Action> {
        let args: Vec<&str> = self.text.split_whitespace().collect();
        match args.split_first() {
            None => Ok(Action::Rotate(ConfigSource::Description)),
            Some((&"setup", rest)) => setup_message(rest).map(Action::Reply),
            Some((&"help", _)) => Ok(Action::Reply(USAGE.to_string())),
            Some((from, to)) if !to.is_empty() => {
                let config = RotationConfig::new(*from, to.iter().map(|t| t.to_string()).collect());
                Ok(Action::Rotate(ConfigSource::Explicit(config)))
            }
            Some(_) => Err(CoachError::InvalidCommand(format!(
                "Please name at least one receiver.\n{USAGE}"
            ))),
        }
    }

    /// Interpret and carry out the command.
    pub async fn execute<P, K>(
        &self,
        platform: &P,
        phrases: &PhrasePool,
        picker: &mut K,
    ) -> Result<Reply>
    where
        P: Platform + ?Sized,
        K: Picker + Send + ?Sized,
    {
        match self.action()? {
            Action::Reply(text) => Ok(Reply::Ephemeral(text)),
            Action::Rotate(source) => {
                let request = RotationRequest {
                    requester: self.user_id.clone(),
                    channel_id: self.channel_id.clone(),
                    source,
                };
                rotate(platform, phrases, &request, picker)
                    .await
                    .map(Reply::Silent)
            }
        }
    }
}

/// Build the reply for `setup <group> <receiver>...`.
pub fn setup_message(args: &[&str]) -> Result<String> {
    let Some((from, to)) = args.split_first().filter(|(_, to)| !to.is_empty()) else {
        return Ok("Please enter a user group to pass from and one to pass to".to_string());
    };
    let config = RotationConfig::new(*from, to.iter().map(|t| t.to_string()).collect());
    config.validate()?;
    Ok(format!(
        "Add the following line to the channel description:\n{}",
        config.encode()
    ))
}
