//! Merge counting

use crate::error::Result;
use crate::platform::{MAX_PER_PAGE, PullRequestRepository};
use crate::types::ClosedPullRequest;
use tracing::debug;

/// Count the records authored by `author` that were actually merged
///
/// Records closed without merge never count, even when the author matches.
pub fn count_merged_by(records: &[ClosedPullRequest], author: &str) -> u64 {
    records
        .iter()
        .filter(|r| r.is_authored_by(author) && r.is_merged())
        .count() as u64
}

/// Fetch the most recent closed PRs and count how many `author` merged
pub async fn count_merges(platform: &dyn PullRequestRepository, author: &str) -> Result<u64> {
    let records = platform.list_closed_pull_requests(MAX_PER_PAGE).await?;
    let count = count_merged_by(&records, author);
    debug!("There are {count} Pull Requests");
    Ok(count)
}
