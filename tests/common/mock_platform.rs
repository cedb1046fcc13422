//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_milestone::error::{Error, Result};
use pr_milestone::platform::PullRequestRepository;
use pr_milestone::types::{ClosedPullRequest, RepoId};
use std::sync::Mutex;

/// A call made against the mock, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    /// `list_closed_pull_requests`
    ListClosed { per_page: u8 },
    /// `create_issue_comment`
    CreateComment { issue_number: u64, body: String },
    /// `add_issue_labels`
    AddLabels {
        issue_number: u64,
        labels: Vec<String>,
    },
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable closed PR list
/// - Ordered call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    repository: RepoId,
    closed_prs: Mutex<Vec<ClosedPullRequest>>,
    calls: Mutex<Vec<PlatformCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_comment: Mutex<Option<String>>,
    error_on_labels: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock for the given repository
    pub fn new(repository: RepoId) -> Self {
        Self {
            repository,
            closed_prs: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_comment: Mutex::new(None),
            error_on_labels: Mutex::new(None),
        }
    }

    /// Set the response for `list_closed_pull_requests`
    pub fn set_closed_prs(&self, prs: Vec<ClosedPullRequest>) {
        *self.closed_prs.lock().unwrap() = prs;
    }

    // === Error injection methods ===

    /// Make `list_closed_pull_requests` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_issue_comment` return an error
    pub fn fail_comment(&self, msg: &str) {
        *self.error_on_comment.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_issue_labels` return an error
    pub fn fail_labels(&self, msg: &str) {
        *self.error_on_labels.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that modify the issue thread
    pub fn write_calls(&self) -> Vec<PlatformCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, PlatformCall::ListClosed { .. }))
            .collect()
    }

    /// Assert that no API call of any kind was made
    pub fn assert_no_calls(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "Expected no platform calls but got: {calls:?}");
    }

    /// Assert that nothing was written to the issue thread
    pub fn assert_no_writes(&self) {
        let writes = self.write_calls();
        assert!(writes.is_empty(), "Expected no write calls but got: {writes:?}");
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PullRequestRepository for MockPlatformService {
    async fn list_closed_pull_requests(&self, per_page: u8) -> Result<Vec<ClosedPullRequest>> {
        self.record(PlatformCall::ListClosed { per_page });

        // Check for injected error
        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        let prs = self.closed_prs.lock().unwrap();
        Ok(prs.iter().take(usize::from(per_page)).cloned().collect())
    }

    async fn create_issue_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        self.record(PlatformCall::CreateComment {
            issue_number,
            body: body.to_string(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_comment.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }
        Ok(())
    }

    async fn add_issue_labels(&self, issue_number: u64, labels: &[String]) -> Result<()> {
        self.record(PlatformCall::AddLabels {
            issue_number,
            labels: labels.to_vec(),
        });

        // Check for injected error
        if let Some(msg) = self.error_on_labels.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }
        Ok(())
    }

    fn repository(&self) -> &RepoId {
        &self.repository
    }
}
