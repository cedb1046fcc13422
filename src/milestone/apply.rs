//! Milestone application - effectful writes

use crate::error::Result;
use crate::milestone::plan::MilestonePlan;
use crate::platform::PullRequestRepository;
use tracing::debug;

/// Post the milestone comment, then apply its labels (EFFECTFUL)
///
/// The two calls are independent: if labelling fails after the comment was
/// created, the comment stays and the error is returned.
pub async fn apply_milestone(
    plan: &MilestonePlan,
    issue_number: u64,
    platform: &dyn PullRequestRepository,
) -> Result<()> {
    debug!(issue_number, count = plan.count, "applying milestone");
    platform
        .create_issue_comment(issue_number, &plan.message)
        .await?;
    platform.add_issue_labels(issue_number, &plan.labels).await?;
    Ok(())
}
