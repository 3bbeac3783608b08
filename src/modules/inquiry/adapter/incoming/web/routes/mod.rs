mod create_inquiry;
mod delete_inquiry;
mod get_inquiries;
mod get_inquiry;
mod get_inquiry_analytics;
mod inquiry_response;
mod update_inquiry;

pub use create_inquiry::*;
pub use delete_inquiry::*;
pub use get_inquiries::*;
pub use get_inquiry::*;
pub use get_inquiry_analytics::*;
pub use inquiry_response::*;
pub use update_inquiry::*;
