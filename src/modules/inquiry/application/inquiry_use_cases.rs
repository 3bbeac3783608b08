use std::sync::Arc;

use crate::modules::inquiry::application::ports::incoming::use_cases::{
    CreateInquiryUseCase, DeleteInquiryUseCase, GetInquiryAnalyticsUseCase, GetInquiryUseCase,
    ListInquiriesUseCase, UpdateInquiryStatusUseCase,
};

#[derive(Clone)]
pub struct InquiryUseCases {
    pub create: Arc<dyn CreateInquiryUseCase + Send + Sync>,
    pub list: Arc<dyn ListInquiriesUseCase + Send + Sync>,
    pub get: Arc<dyn GetInquiryUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateInquiryStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteInquiryUseCase + Send + Sync>,
    pub analytics: Arc<dyn GetInquiryAnalyticsUseCase + Send + Sync>,
}
