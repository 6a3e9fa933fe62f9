//! Join/leave correlation: remember when members join, ban the ones who
//! leave before the grace window runs out.

use chrono::Utc;

pub mod evaluator;
pub mod notice;
pub mod tracker;

pub use evaluator::{LeaveOutcome, handle_leave};
pub use tracker::record_join;

/// Platform-independent view of a join or a leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEvent {
    pub user_id: u64,
    pub display_name: String,
    pub is_bot: bool,
    pub chat_id: u64,
}

/// Current wall-clock time in fractional seconds since the Unix epoch.
pub fn now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
