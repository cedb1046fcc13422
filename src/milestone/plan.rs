//! Milestone planning - pure mapping from a merge count to the writes to make

use crate::config::MilestoneConfig;

/// Label applied on every milestone
pub const MILESTONE_LABEL: &str = "merge-milestone";

/// Count-specific label (`merge-milestone:<count>`)
pub fn milestone_label(count: u64) -> String {
    format!("{MILESTONE_LABEL}:{count}")
}

/// What to post once a milestone is reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestonePlan {
    /// Merge count that matched a threshold
    pub count: u64,
    /// Comment body, exactly as configured
    pub message: String,
    /// Labels to apply, in order
    pub labels: Vec<String>,
}

/// Create a milestone plan (PURE - no I/O)
///
/// Matches on exact equality: a count only fires the message configured for
/// that same count, never one configured for a lower threshold.
#[must_use]
pub fn create_milestone_plan(count: u64, milestones: &MilestoneConfig) -> Option<MilestonePlan> {
    let message = milestones.message_for(count)?;
    Some(MilestonePlan {
        count,
        message: message.to_string(),
        labels: vec![MILESTONE_LABEL.to_string(), milestone_label(count)],
    })
}
