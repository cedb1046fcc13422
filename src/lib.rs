//! pr-milestone: congratulate contributors on merge milestones
//!
//! Runs once when a pull request is closed. If it was merged, counts how many
//! pull requests the same author has merged and, when the count matches a
//! configured milestone, comments on the pull request and labels it.

pub mod config;
pub mod error;
pub mod event;
pub mod milestone;
pub mod notifier;
pub mod platform;
pub mod types;
