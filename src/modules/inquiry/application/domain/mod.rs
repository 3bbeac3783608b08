pub mod analytics;
pub mod entities;
