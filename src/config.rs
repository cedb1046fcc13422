//! Run configuration sourced from the host runtime's environment
//!
//! Everything is read once at startup into an [`ActionConfig`] and passed
//! down explicitly. [`ActionConfig::from_vars`] takes the variables as an
//! iterator so tests never touch the process environment.

use crate::error::{Error, Result};
use crate::types::RepoId;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::warn;

/// Default REST endpoint for github.com
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Prefix of milestone inputs after the runtime upper-cases them
const MILESTONE_INPUT_PREFIX: &str = "INPUT_MERGED_";

/// Mapping from an exact merge count to the comment posted when it is reached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneConfig {
    messages: BTreeMap<u64, String>,
}

impl MilestoneConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the message for a threshold.
    ///
    /// Zero thresholds and empty messages are ignored; neither can ever fire.
    #[must_use]
    pub fn with_message(mut self, threshold: u64, message: impl Into<String>) -> Self {
        let message = message.into();
        if threshold > 0 && !message.is_empty() {
            self.messages.insert(threshold, message);
        }
        self
    }

    /// Message configured for exactly `count` merges
    pub fn message_for(&self, count: u64) -> Option<&str> {
        self.messages.get(&count).map(String::as_str)
    }

    /// Configured thresholds, ascending
    pub fn thresholds(&self) -> impl Iterator<Item = u64> + '_ {
        self.messages.keys().copied()
    }

    /// Whether no milestone is configured
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Collect `INPUT_MERGED_<N>` variables into a config
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::new();
        for (key, value) in vars {
            let key = key.as_ref().to_ascii_uppercase();
            let Some(suffix) = key.strip_prefix(MILESTONE_INPUT_PREFIX) else {
                continue;
            };
            match suffix.parse::<u64>() {
                Ok(threshold) if threshold > 0 => {
                    config = config.with_message(threshold, value);
                }
                _ => warn!(input = %key, "Ignoring milestone input without a positive count"),
            }
        }
        config
    }
}

/// Everything a run needs from its environment
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Name of the triggering event (`GITHUB_EVENT_NAME`)
    pub event_name: String,
    /// Path to the JSON event payload (`GITHUB_EVENT_PATH`)
    pub event_path: PathBuf,
    /// Repository the run belongs to (`GITHUB_REPOSITORY`)
    pub repository: RepoId,
    /// Account that triggered the run (`GITHUB_ACTOR`)
    pub actor: String,
    /// API token (`GITHUB_TOKEN`), only needed once writes are possible
    pub token: Option<String>,
    /// REST endpoint (`GITHUB_API_URL`)
    pub api_url: String,
    /// Configured milestones
    pub milestones: MilestoneConfig,
}

impl ActionConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load from an explicit set of environment variables
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let repository: RepoId = required(&vars, "GITHUB_REPOSITORY")?.parse()?;

        Ok(Self {
            event_name: required(&vars, "GITHUB_EVENT_NAME")?,
            event_path: PathBuf::from(required(&vars, "GITHUB_EVENT_PATH")?),
            repository,
            actor: required(&vars, "GITHUB_ACTOR")?,
            token: optional(&vars, "GITHUB_TOKEN"),
            api_url: optional(&vars, "GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            milestones: MilestoneConfig::from_vars(&vars),
        })
    }

    /// API token, or a config error if none was provided
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| Error::Config("GITHUB_TOKEN is required".to_string()))
    }
}

fn optional(vars: &HashMap<String, String>, name: &str) -> Option<String> {
    vars.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn required(vars: &HashMap<String, String>, name: &str) -> Result<String> {
    optional(vars, name).ok_or_else(|| Error::Config(format!("{name} is not set")))
}
