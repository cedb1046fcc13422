//! Platform services for pull request and issue operations
//!
//! Provides the interface the milestone stages use to talk to the
//! issue tracker.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{ClosedPullRequest, RepoId};
use async_trait::async_trait;

/// Maximum page size accepted by the pulls endpoint
pub const MAX_PER_PAGE: u8 = 100;

/// Pull request repository trait
///
/// Abstracts the three API calls a run can make, so the counting and
/// milestone logic can be exercised against an in-memory double.
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// List the most recent closed pull requests (single page, no pagination)
    async fn list_closed_pull_requests(&self, per_page: u8) -> Result<Vec<ClosedPullRequest>>;

    /// Create a comment on an issue thread
    async fn create_issue_comment(&self, issue_number: u64, body: &str) -> Result<()>;

    /// Add labels to an issue thread
    async fn add_issue_labels(&self, issue_number: u64, labels: &[String]) -> Result<()>;

    /// Repository this service operates on
    fn repository(&self) -> &RepoId;
}
