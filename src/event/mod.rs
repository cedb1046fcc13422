//! Triggering event access and validation
//!
//! The event is reached through the [`EventSource`] trait so the validator
//! can be driven by an in-memory payload in tests and by the runtime's
//! payload file in production.

mod file;
mod validate;

pub use file::FileEventSource;
pub use validate::{EXPECTED_ACTION, EXPECTED_EVENT, validate_event};

use crate::error::Result;
use crate::types::TriggerEvent;

/// Source of the triggering event
pub trait EventSource {
    /// Name of the event that triggered the run (e.g. `pull_request`)
    fn event_name(&self) -> &str;

    /// Load the event payload
    fn payload(&self) -> Result<TriggerEvent>;
}
