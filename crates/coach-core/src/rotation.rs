use crate::config::RotationConfig;
use crate::error::{CoachError, Result};
use crate::phrases::PhrasePool;
use crate::platform::Platform;
use crate::resolver::resolve;
use crate::selector::{select, Picker};

/// Where the rotation settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read the marker line from the invoking channel's description.
    Description,
    /// Settings supplied directly with the command.
    Explicit(RotationConfig),
}

#[derive(Debug, Clone)]
pub struct RotationRequest {
    pub requester: String,
    pub channel_id: String,
    pub source: ConfigSource,
}

/// Result of one completed hand-over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationOutcome {
    pub previous_holder: String,
    pub new_holder: String,
    pub group: String,
    pub announcement: String,
}

/// Pass the group role from the requester to a randomly chosen candidate.
///
/// Pipeline: load config, resolve candidates, select, render, announce,
/// reassign. The announce and reassign calls are not atomic. When the
/// announcement succeeds and the reassignment fails the channel has already
/// been told; the error is returned as `ReassignFailed` and nothing is rolled
/// back. Rerunning the command draws a fresh winner.
pub async fn rotate<P, K>(
    platform: &P,
    phrases: &PhrasePool,
    request: &RotationRequest,
    picker: &mut K,
) -> Result<RotationOutcome>
where
    P: Platform + ?Sized,
    K: Picker + Send + ?Sized,
{
    let config = match &request.source {
        ConfigSource::Description => {
            let description = platform
                .channel_description(&request.channel_id)
                .await
                .map_err(CoachError::LookupFailed)?;
            RotationConfig::decode(&description)?
        }
        ConfigSource::Explicit(config) => config.clone(),
    };

    let group = config.group_id()?;
    let candidates = resolve(&config.to, platform).await?;
    let new_holder = select(&candidates, &request.requester, picker)?;
    let announcement = phrases.render(&request.requester, &new_holder, &group, picker)?;

    tracing::info!(
        requester = %request.requester,
        group = %group,
        candidates = candidates.len(),
        new_holder = %new_holder,
        "passing role"
    );

    platform
        .post_message(&request.channel_id, &announcement)
        .await
        .map_err(CoachError::AnnounceFailed)?;

    platform
        .set_group_members(&group, std::slice::from_ref(&new_holder))
        .await
        .map_err(|e| {
            tracing::error!(group = %group, error = %e, "announced hand-over but reassignment failed");
            CoachError::ReassignFailed(e)
        })?;

    Ok(RotationOutcome {
        previous_holder: request.requester.clone(),
        new_holder,
        group,
        announcement,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
