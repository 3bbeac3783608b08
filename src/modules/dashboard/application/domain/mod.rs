pub mod activity;
pub mod stats;
