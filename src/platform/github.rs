//! GitHub platform service implementation

use crate::config::DEFAULT_API_URL;
use crate::error::{Error, Result};
use crate::platform::PullRequestRepository;
use crate::types::{ClosedPullRequest, RepoId};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repository: RepoId,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_url` is only applied when it differs from github.com, which lets
    /// the same binary run against GitHub Enterprise Server.
    pub fn new(token: &str, repository: RepoId, api_url: &str) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_url = api_url.trim_end_matches('/');
        if api_url != DEFAULT_API_URL {
            builder = builder
                .base_uri(api_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, repository })
    }
}

/// Helper to convert an octocrab PR to our `ClosedPullRequest` projection
fn closed_pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> ClosedPullRequest {
    ClosedPullRequest {
        author: pr.user.as_ref().map(|u| u.login.clone()),
        merged_at: pr.merged_at,
    }
}

#[async_trait]
impl PullRequestRepository for GitHubService {
    async fn list_closed_pull_requests(&self, per_page: u8) -> Result<Vec<ClosedPullRequest>> {
        debug!(per_page, "listing closed PRs");
        let page = self
            .client
            .pulls(&self.repository.owner, &self.repository.repo)
            .list()
            .state(octocrab::params::State::Closed)
            .per_page(per_page)
            .send()
            .await?;

        let result: Vec<ClosedPullRequest> =
            page.items.iter().map(closed_pr_from_octocrab).collect();
        debug!(count = result.len(), "listed closed PRs");
        Ok(result)
    }

    async fn create_issue_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        debug!(issue_number, "creating issue comment");
        self.client
            .issues(&self.repository.owner, &self.repository.repo)
            .create_comment(issue_number, body)
            .await?;
        debug!(issue_number, "created issue comment");
        Ok(())
    }

    async fn add_issue_labels(&self, issue_number: u64, labels: &[String]) -> Result<()> {
        debug!(issue_number, ?labels, "adding issue labels");
        self.client
            .issues(&self.repository.owner, &self.repository.repo)
            .add_labels(issue_number, labels)
            .await?;
        debug!(issue_number, "added issue labels");
        Ok(())
    }

    fn repository(&self) -> &RepoId {
        &self.repository
    }
}
