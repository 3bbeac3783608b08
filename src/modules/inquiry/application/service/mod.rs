mod create_inquiry_service;
mod delete_inquiry_service;
mod get_inquiry_analytics_service;
mod get_inquiry_service;
mod list_inquiries_service;
mod update_inquiry_status_service;

pub use create_inquiry_service::CreateInquiryService;
pub use delete_inquiry_service::DeleteInquiryService;
pub use get_inquiry_analytics_service::GetInquiryAnalyticsService;
pub use get_inquiry_service::GetInquiryService;
pub use list_inquiries_service::ListInquiriesService;
pub use update_inquiry_status_service::UpdateInquiryStatusService;

