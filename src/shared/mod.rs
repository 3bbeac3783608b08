pub mod api;
pub mod pagination;
pub mod stats;
pub mod time;
pub mod validation;
