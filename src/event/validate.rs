//! Event validation - first stage of a run

use super::EventSource;
use crate::error::{Error, Result};
use crate::notifier::{Flow, StopReason};
use crate::types::MergedPullRequest;
use tracing::{debug, warn};

/// Event name a run must be triggered by
pub const EXPECTED_EVENT: &str = "pull_request";

/// Sub-action a run must be triggered by
pub const EXPECTED_ACTION: &str = "closed";

/// Validate the triggering event.
///
/// Fails with [`Error::InvalidEvent`] for any event other than a closed pull
/// request, and stops with [`StopReason::NotMerged`] if the pull request was
/// closed without merging. The payload is not read until the event name has
/// been checked.
pub fn validate_event(source: &dyn EventSource) -> Result<Flow<MergedPullRequest>> {
    let event_name = source.event_name();
    if event_name != EXPECTED_EVENT {
        return Err(Error::InvalidEvent {
            expected: EXPECTED_EVENT.to_string(),
            actual: event_name.to_string(),
        });
    }

    let event = source.payload()?;
    let action = event.action.as_deref().unwrap_or_default();
    if action != EXPECTED_ACTION {
        return Err(Error::InvalidEvent {
            expected: format!("{EXPECTED_EVENT}.{EXPECTED_ACTION}"),
            actual: format!("{EXPECTED_EVENT}.{action}"),
        });
    }

    let pr = event
        .pull_request
        .ok_or_else(|| Error::EventPayload("missing pull_request".to_string()))?;

    if !pr.merged {
        warn!("Pull request closed without merge");
        return Ok(Flow::Stop(StopReason::NotMerged));
    }

    let author = pr
        .user
        .map(|u| u.login)
        .filter(|login| !login.is_empty())
        .ok_or_else(|| Error::EventPayload("missing pull_request.user.login".to_string()))?;

    debug!(pr_number = ?pr.number, %author, "pull request was merged");
    Ok(Flow::Continue(MergedPullRequest {
        number: pr.number,
        author,
    }))
}
