//! Milestone notifier - the per-run state machine
//!
//! A run moves through validate -> count -> apply. Each stage either
//! continues with data, stops early for a normal reason, or fails with an
//! error:
//!
//! ```text
//! validate_event -> Stop(NotMerged) | Err(InvalidEvent) | Continue(pr)
//! count_merges   -> Err(network)    | count
//! plan           -> Stop(NoMilestone) | apply_milestone -> MilestoneReached
//! ```
//!
//! [`check_event`] and [`notify`] are exposed separately so the binary can
//! validate the event before it builds a network client.

use crate::config::MilestoneConfig;
use crate::error::{Error, Result};
use crate::event::{EventSource, validate_event};
use crate::milestone::{apply_milestone, count_merges, create_milestone_plan};
use crate::platform::PullRequestRepository;
use crate::types::MergedPullRequest;
use tracing::{debug, info};

/// Outcome of a stage that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
    /// Proceed to the next stage with this data
    Continue(T),
    /// End the run successfully
    Stop(StopReason),
}

/// Why a run ended before applying a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// PR was closed without merge
    NotMerged,
    /// No message configured for the merge count
    NoMilestone {
        /// Author's merged PR count
        count: u64,
    },
}

/// Final result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// PR was closed without merge; nothing was fetched or written
    NotMerged,
    /// Count did not match a configured milestone; nothing was written
    NoMilestone {
        /// Author's merged PR count
        count: u64,
    },
    /// Comment posted and labels applied
    MilestoneReached {
        /// Author's merged PR count
        count: u64,
        /// Labels that were applied
        labels: Vec<String>,
    },
}

impl From<StopReason> for RunOutcome {
    fn from(reason: StopReason) -> Self {
        match reason {
            StopReason::NotMerged => Self::NotMerged,
            StopReason::NoMilestone { count } => Self::NoMilestone { count },
        }
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotMerged => write!(f, "pull request closed without merge"),
            Self::NoMilestone { count } => write!(f, "{count} merged, no milestone"),
            Self::MilestoneReached { count, .. } => write!(f, "milestone reached at {count} merged"),
        }
    }
}

/// Validate the triggering event (stage 1)
pub fn check_event(source: &dyn EventSource) -> Result<Flow<MergedPullRequest>> {
    validate_event(source)
}

/// Count merges and apply a milestone if one matches (stages 2 and 3)
pub async fn notify(
    pr: &MergedPullRequest,
    milestones: &MilestoneConfig,
    platform: &dyn PullRequestRepository,
) -> Result<RunOutcome> {
    debug!(repository = %platform.repository(), author = %pr.author, "counting merges");
    let count = count_merges(platform, &pr.author).await?;

    let Some(plan) = create_milestone_plan(count, milestones) else {
        info!("No action required");
        return Ok(StopReason::NoMilestone { count }.into());
    };

    let issue_number = pr
        .number
        .ok_or_else(|| Error::EventPayload("missing pull_request.number".to_string()))?;

    apply_milestone(&plan, issue_number, platform).await?;

    Ok(RunOutcome::MilestoneReached {
        count,
        labels: plan.labels,
    })
}

/// Run every stage against an already-built platform
pub async fn run(
    source: &dyn EventSource,
    milestones: &MilestoneConfig,
    platform: &dyn PullRequestRepository,
) -> Result<RunOutcome> {
    match check_event(source)? {
        Flow::Continue(pr) => notify(&pr, milestones, platform).await,
        Flow::Stop(reason) => Ok(reason.into()),
    }
}
