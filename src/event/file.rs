//! Event source backed by the payload file written by the host runtime

use super::EventSource;
use crate::error::{Error, Result};
use crate::types::TriggerEvent;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads the event payload from a JSON file
#[derive(Debug, Clone)]
pub struct FileEventSource {
    event_name: String,
    path: PathBuf,
}

impl FileEventSource {
    /// Create a source for `event_name` whose payload lives at `path`
    pub fn new(event_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            event_name: event_name.into(),
            path: path.into(),
        }
    }
}

impl EventSource for FileEventSource {
    fn event_name(&self) -> &str {
        &self.event_name
    }

    fn payload(&self) -> Result<TriggerEvent> {
        debug!(path = %self.path.display(), "reading event payload");
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::EventPayload(format!("failed to read {}: {e}", self.path.display()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::EventPayload(format!("failed to parse {}: {e}", self.path.display()))
        })
    }
}
