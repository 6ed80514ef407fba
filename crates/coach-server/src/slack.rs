//! Slack Web API client.
//!
//! [`SlackClient`] implements the platform traits from `coach-core` using
//! the handful of Web API methods a rotation needs.

use async_trait::async_trait;
use coach_core::platform::{ChannelMetadata, MembershipLookup, RoleMutations};
use coach_core::PlatformError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Page size for `conversations.members`.
const MEMBERS_PAGE_LIMIT: &str = "200";

/// HTTP client for the Slack Web API.
pub struct SlackClient {
    http: Client,
    bot_token: String,
    base_url: String,
}

impl SlackClient {
    pub fn new(bot_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            bot_token: bot_token.into(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T>(&self, method: &str, query: &[(&str, &str)]) -> Result<T, PlatformError>
    where
        T: DeserializeOwned,
    {
        debug!(method, "calling slack");
        let resp = self
            .http
            .get(format!("{}/{method}", self.base_url))
            .bearer_auth(&self.bot_token)
            .query(query)
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        unwrap_envelope(method, resp).await
    }

    async fn post<T>(&self, method: &str, body: serde_json::Value) -> Result<T, PlatformError>
    where
        T: DeserializeOwned,
    {
        debug!(method, "calling slack");
        let resp = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .bearer_auth(&self.bot_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| PlatformError::Transport(e.to_string()))?;
        unwrap_envelope(method, resp).await
    }
}

async fn unwrap_envelope<T>(method: &str, resp: reqwest::Response) -> Result<T, PlatformError>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    let envelope: Envelope<T> = resp.json().await.map_err(|e| PlatformError::Decode {
        method: method.to_string(),
        detail: format!("HTTP {status}: {e}"),
    })?;
    if !envelope.ok {
        return Err(PlatformError::Api {
            method: method.to_string(),
            error: envelope.error.unwrap_or_else(|| "unknown error".into()),
        });
    }
    Ok(envelope.data)
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Every Web API response carries `ok` and, on failure, `error`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    data: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GroupUsers {
    users: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConversationMembers {
    members: Vec<String>,
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponseMetadata {
    next_cursor: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConversationInfo {
    channel: Option<ChannelInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ChannelInfo {
    purpose: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextValue {
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct Empty {}

// ---------------------------------------------------------------------------
// Platform traits
// ---------------------------------------------------------------------------

#[async_trait]
impl MembershipLookup for SlackClient {
    async fn group_members(&self, group_id: &str) -> Result<Vec<String>, PlatformError> {
        let body: GroupUsers = self
            .get("usergroups.users.list", &[("usergroup", group_id)])
            .await?;
        Ok(body.users)
    }

    /// Follows `next_cursor` until every page has been read.
    async fn channel_members(&self, channel_id: &str) -> Result<Vec<String>, PlatformError> {
        let mut members = Vec::new();
        let mut cursor = String::new();
        loop {
            let mut query = vec![("channel", channel_id), ("limit", MEMBERS_PAGE_LIMIT)];
            if !cursor.is_empty() {
                query.push(("cursor", cursor.as_str()));
            }
            let page: ConversationMembers = self.get("conversations.members", &query).await?;
            members.extend(page.members);
            cursor = page
                .response_metadata
                .map(|m| m.next_cursor)
                .unwrap_or_default();
            if cursor.is_empty() {
                break;
            }
        }
        Ok(members)
    }
}

#[async_trait]
impl ChannelMetadata for SlackClient {
    /// The channel's purpose is what Slack shows as its description.
    async fn channel_description(&self, channel_id: &str) -> Result<String, PlatformError> {
        let body: ConversationInfo = self
            .get("conversations.info", &[("channel", channel_id)])
            .await?;
        Ok(body
            .channel
            .and_then(|c| c.purpose)
            .map(|p| p.value)
            .unwrap_or_default())
    }
}

#[async_trait]
impl RoleMutations for SlackClient {
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), PlatformError> {
        let _: Empty = self
            .post(
                "chat.postMessage",
                serde_json::json!({ "channel": channel_id, "text": text }),
            )
            .await?;
        Ok(())
    }

    async fn set_group_members(
        &self,
        group_id: &str,
        members: &[String],
    ) -> Result<(), PlatformError> {
        let _: Empty = self
            .post(
                "usergroups.users.update",
                serde_json::json!({ "usergroup": group_id, "users": members.join(",") }),
            )
            .await?;
        Ok(())
    }
}
