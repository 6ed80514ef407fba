use crate::error::{CoachError, Result};
use crate::reference::Reference;
use serde::{Deserialize, Serialize};

/// Key that marks the config line inside a channel description.
pub const MARKER: &str = "coach-peter";

/// Rotation settings an administrator pastes into a channel description.
///
/// `from` is the group whose membership rotates; `to` holds the raw mention
/// tokens the next holder is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub from: String,
    pub to: Vec<String>,
}

impl RotationConfig {
    pub fn new(from: impl Into<String>, to: Vec<String>) -> Self {
        Self {
            from: from.into(),
            to,
        }
    }

    /// Find and parse the first `coach-peter: {...}` line in `description`.
    ///
    /// Later marker lines are ignored. A marker line whose JSON does not parse
    /// is `ConfigMalformed`, never `ConfigNotFound`.
    pub fn decode(description: &str) -> Result<Self> {
        for line in description.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            if key.trim() != MARKER {
                continue;
            }
            return serde_json::from_str(value.trim()).map_err(CoachError::ConfigMalformed);
        }
        Err(CoachError::ConfigNotFound)
    }

    /// Produce the line to paste into the channel description.
    pub fn encode(&self) -> String {
        let json = serde_json::json!({ "from": self.from, "to": self.to });
        format!("{MARKER}: {json}")
    }

    /// The id of the rotated group.
    pub fn group_id(&self) -> Result<String> {
        Reference::parse(&self.from)
            .as_group()
            .map(str::to_string)
            .ok_or_else(|| CoachError::InvalidGroup(self.from.clone()))
    }

    /// Check that `from` is a group mention and every `to` token parses.
    pub fn validate(&self) -> Result<()> {
        self.group_id()?;
        if let Some(bad) = self.to.iter().find(|t| !Reference::parse(t).is_valid()) {
            return Err(CoachError::InvalidReference(bad.clone()));
        }
        Ok(())
    }
}
