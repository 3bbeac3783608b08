mod get_activities;
mod get_stats;

pub use get_activities::*;
pub use get_stats::*;
