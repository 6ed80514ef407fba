//! Chat-platform collaborators the rotation depends on.
//!
//! The core never talks HTTP; the server crate implements these traits on
//! top of the Slack Web API and tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::PlatformError;

#[async_trait]
pub trait MembershipLookup: Send + Sync {
    async fn group_members(&self, group_id: &str) -> Result<Vec<String>, PlatformError>;

    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, PlatformError>;
}

#[async_trait]
pub trait ChannelMetadata: Send + Sync {
    /// Free-text description of the channel.
    async fn channel_description(&self, channel_id: &str) -> Result<String, PlatformError>;
}

/// The two side-effecting calls a rotation makes.
#[async_trait]
pub trait RoleMutations: Send + Sync {
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), PlatformError>;

    async fn set_group_members(
        &self,
        group_id: &str,
        members: &[String],
    ) -> Result<(), PlatformError>;
}

/// Everything a full rotation needs from the platform.
pub trait Platform: MembershipLookup + ChannelMetadata + RoleMutations {}

impl<T: MembershipLookup + ChannelMetadata + RoleMutations + ?Sized> Platform for T {}
