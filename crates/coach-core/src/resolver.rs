use std::collections::BTreeSet;

use crate::error::{CoachError, Result};
use crate::platform::MembershipLookup;
use crate::reference::Reference;

/// Deduplicated pool of user ids eligible for one rotation.
///
/// Ordered so that index-based selection is reproducible under a fixed picker.
pub type CandidateSet = BTreeSet<String>;

/// Expand mention tokens into the set of users they name.
///
/// Every token is parsed before any lookup is made, so an unrecognised token
/// fails the whole call without touching the platform. Lookup failures are
/// returned as `LookupFailed` and are not retried here.
pub async fn resolve<L>(tokens: &[String], lookup: &L) -> Result<CandidateSet>
where
    L: MembershipLookup + ?Sized,
{
    let mut references = Vec::with_capacity(tokens.len());
    for token in tokens {
        match Reference::parse(token) {
            Reference::Invalid => return Err(CoachError::InvalidReference(token.clone())),
            reference => references.push(reference),
        }
    }

    let mut candidates = CandidateSet::new();
    for reference in references {
        let members = match reference {
            Reference::User(id) => vec![id],
            Reference::UserGroup(id) => lookup
                .group_members(&id)
                .await
                .map_err(CoachError::LookupFailed)?,
            Reference::Channel(id) => lookup
                .channel_members(&id)
                .await
                .map_err(CoachError::LookupFailed)?,
            Reference::Invalid => continue,
        };
        candidates.extend(members.into_iter().filter(|m| !m.is_empty()));
    }

    tracing::debug!(tokens = tokens.len(), candidates = candidates.len(), "resolved receivers");
    Ok(candidates)
}
