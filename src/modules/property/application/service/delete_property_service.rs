use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::property::application::ports::incoming::use_cases::{
    DeletePropertyError, DeletePropertyUseCase,
};
use crate::modules::property::application::ports::outgoing::property_repository::{
    PropertyRepository, PropertyRepositoryError,
};

pub struct DeletePropertyService<R>
where
    R: PropertyRepository,
{
    repository: R,
}

impl<R> DeletePropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePropertyUseCase for DeletePropertyService<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(&self, property_id: Uuid) -> Result<(), DeletePropertyError> {
        self.repository
            .delete(property_id)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => DeletePropertyError::NotFound,
                other => DeletePropertyError::RepositoryError(other.to_string()),
            })?;

        info!(%property_id, "Property deleted");
        Ok(())
    }
}
