use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::inquiry::application::ports::incoming::use_cases::{
    CreateInquiryError, CreateInquiryUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{
    InquiryQuery, InquiryRepository, InquiryRepositoryError, InquiryView, NewInquiry,
};
use crate::shared::validation::{is_valid_email, non_blank};

pub struct CreateInquiryService<R, Q>
where
    R: InquiryRepository,
    Q: InquiryQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateInquiryService<R, Q>
where
    R: InquiryRepository,
    Q: InquiryQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

fn normalize(inquiry: NewInquiry) -> Result<NewInquiry, CreateInquiryError> {
    let (Some(name), Some(email), Some(message)) = (
        non_blank(Some(inquiry.name)),
        non_blank(Some(inquiry.email)),
        non_blank(Some(inquiry.message)),
    ) else {
        return Err(CreateInquiryError::Validation(
            "Missing required fields".to_string(),
        ));
    };

    if !is_valid_email(&email) {
        return Err(CreateInquiryError::InvalidEmail);
    }

    Ok(NewInquiry {
        name,
        email,
        phone: non_blank(inquiry.phone),
        message,
        property_id: inquiry.property_id,
    })
}

#[async_trait]
impl<R, Q> CreateInquiryUseCase for CreateInquiryService<R, Q>
where
    R: InquiryRepository + Send + Sync,
    Q: InquiryQuery + Send + Sync,
{
    async fn execute(&self, inquiry: NewInquiry) -> Result<InquiryView, CreateInquiryError> {
        let inquiry = normalize(inquiry)?;
        let property_id = inquiry.property_id;

        let exists = self
            .query
            .property_exists(property_id)
            .await
            .map_err(|e| CreateInquiryError::RepositoryError(e.to_string()))?;
        if !exists {
            warn!(%property_id, "Inquiry for unknown property");
            return Err(CreateInquiryError::PropertyNotFound);
        }

        let inquiry_id = self.repository.create(inquiry).await.map_err(|e| match e {
            InquiryRepositoryError::PropertyNotFound => CreateInquiryError::PropertyNotFound,
            other => CreateInquiryError::RepositoryError(other.to_string()),
        })?;

        info!(%inquiry_id, %property_id, "Inquiry received");

        self.query
            .get_by_id(inquiry_id)
            .await
            .map_err(|e| CreateInquiryError::RepositoryError(e.to_string()))
    }
}
