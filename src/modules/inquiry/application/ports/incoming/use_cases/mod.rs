mod create_inquiry;
mod delete_inquiry;
mod get_inquiry;
mod get_inquiry_analytics;
mod list_inquiries;
mod update_inquiry_status;

pub use create_inquiry::{CreateInquiryError, CreateInquiryUseCase};
pub use delete_inquiry::{DeleteInquiryError, DeleteInquiryUseCase};
pub use get_inquiry::{GetInquiryError, GetInquiryUseCase};
pub use get_inquiry_analytics::{GetInquiryAnalyticsError, GetInquiryAnalyticsUseCase};
pub use list_inquiries::{ListInquiriesError, ListInquiriesUseCase};
pub use update_inquiry_status::{UpdateInquiryStatusError, UpdateInquiryStatusUseCase};
