//! Core types for pr-milestone

use crate::error::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Event payload delivered by the host runtime
///
/// Every field is optional: the payload is only trusted after the event name
/// and action have been validated, and payloads for other events have a
/// different shape entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerEvent {
    /// Sub-action (`opened`, `closed`, ...)
    #[serde(default)]
    pub action: Option<String>,
    /// Pull request the event refers to
    #[serde(default)]
    pub pull_request: Option<EventPullRequest>,
}

/// Pull request as embedded in a `pull_request` event payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventPullRequest {
    /// PR number (also addresses the issue thread)
    #[serde(default)]
    pub number: Option<u64>,
    /// Whether the PR was merged when it was closed
    #[serde(default)]
    pub merged: bool,
    /// PR author
    #[serde(default)]
    pub user: Option<User>,
    /// When the PR was merged
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// A GitHub account reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Account login
    pub login: String,
}

/// A merged pull request that passed event validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPullRequest {
    /// PR number, if the payload carried one
    pub number: Option<u64>,
    /// Login of the PR author
    pub author: String,
}

/// Read-only projection of a closed pull request fetched from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedPullRequest {
    /// Author login (`None` if the API omitted the user)
    pub author: Option<String>,
    /// When the PR was merged (`None` if it was closed without merge)
    pub merged_at: Option<DateTime<Utc>>,
}

impl ClosedPullRequest {
    /// Whether this PR was actually merged
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Whether this PR was authored by `login`
    pub fn is_authored_by(&self, login: &str) -> bool {
        self.author.as_deref() == Some(login)
    }
}

/// Repository identity (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(Error::Config(format!(
                "invalid repository '{s}', expected 'owner/name'"
            ))),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
