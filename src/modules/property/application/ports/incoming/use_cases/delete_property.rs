use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePropertyUseCase: Send + Sync {
    async fn execute(&self, property_id: Uuid) -> Result<(), DeletePropertyError>;
}
