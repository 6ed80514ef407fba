//! In-memory platform fake shared by the unit tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::PlatformError;
use crate::platform::{ChannelMetadata, MembershipLookup, RoleMutations};
use crate::selector::Picker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GroupMembers(String),
    ChannelMembers(String),
    Description(String),
    PostMessage { channel: String, text: String },
    SetGroupMembers { group: String, members: Vec<String> },
}

#[derive(Default)]
pub struct FakePlatform {
    pub groups: HashMap<String, Vec<String>>,
    pub channels: HashMap<String, Vec<String>>,
    pub descriptions: HashMap<String, String>,
    pub fail_lookups: bool,
    pub fail_post: bool,
    pub fail_update: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakePlatform {
    pub fn with_group(mut self, id: &str, members: &[&str]) -> Self {
        self.groups
            .insert(id.into(), members.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_channel(mut self, id: &str, members: &[&str]) -> Self {
        self.channels
            .insert(id.into(), members.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn with_description(mut self, channel: &str, text: &str) -> Self {
        self.descriptions.insert(channel.into(), text.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn api_error(method: &str, error: &str) -> PlatformError {
        PlatformError::Api {
            method: method.into(),
            error: error.into(),
        }
    }
}

#[async_trait]
impl MembershipLookup for FakePlatform {
    async fn group_members(&self, group_id: &str) -> Result<Vec<String>, PlatformError> {
        self.record(Call::GroupMembers(group_id.into()));
        if self.fail_lookups {
            return Err(Self::api_error("usergroups.users.list", "ratelimited"));
        }
        self.groups
            .get(group_id)
            .cloned()
            .ok_or_else(|| Self::api_error("usergroups.users.list", "no_such_subteam"))
    }

    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, PlatformError> {
        self.record(Call::ChannelMembers(channel_id.into()));
        if self.fail_lookups {
            return Err(Self::api_error("conversations.members", "ratelimited"));
        }
        self.channels
            .get(channel_id)
            .cloned()
            .ok_or_else(|| Self::api_error("conversations.members", "channel_not_found"))
    }
}

#[async_trait]
impl ChannelMetadata for FakePlatform {
    async fn channel_description(&self, channel_id: &str) -> Result<String, PlatformError> {
        self.record(Call::Description(channel_id.into()));
        if self.fail_lookups {
            return Err(Self::api_error("conversations.info", "ratelimited"));
        }
        Ok(self.descriptions.get(channel_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl RoleMutations for FakePlatform {
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), PlatformError> {
        self.record(Call::PostMessage {
            channel: channel_id.into(),
            text: text.into(),
        });
        if self.fail_post {
            return Err(Self::api_error("chat.postMessage", "not_in_channel"));
        }
        Ok(())
    }

    async fn set_group_members(
        &self,
        group_id: &str,
        members: &[String],
    ) -> Result<(), PlatformError> {
        self.record(Call::SetGroupMembers {
            group: group_id.into(),
            members: members.to_vec(),
        });
        if self.fail_update {
            return Err(Self::api_error("usergroups.users.update", "permission_denied"));
        }
        Ok(())
    }
}

/// Picker that always returns the same index, clamped to the range.
pub struct FixedPicker(pub usize);

impl Picker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
