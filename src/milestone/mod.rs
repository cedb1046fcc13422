//! Milestone engine
//!
//! Three-phase pattern:
//! 1. Count - fetch closed PRs and count the author's merges (effectful, bounded)
//! 2. Plan - map the count to a `MilestonePlan` (pure, testable)
//! 3. Apply - post the comment and labels (effectful)

mod apply;
mod count;
mod plan;

pub use apply::apply_milestone;
pub use count::{count_merged_by, count_merges};
pub use plan::{MILESTONE_LABEL, MilestonePlan, create_milestone_plan, milestone_label};
