use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::listing_validation::normalize_listing_update;
use crate::modules::property::application::ports::incoming::use_cases::{
    UpdatePropertyError, UpdatePropertyUseCase,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyQuery, PropertyView,
};
use crate::modules::property::application::ports::outgoing::property_repository::{
    PropertyRepository, PropertyRepositoryError, UpdatePropertyData,
};

pub struct UpdatePropertyService<R, Q>
where
    R: PropertyRepository,
    Q: PropertyQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdatePropertyService<R, Q>
where
    R: PropertyRepository,
    Q: PropertyQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdatePropertyUseCase for UpdatePropertyService<R, Q>
where
    R: PropertyRepository + Send + Sync,
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        property_id: Uuid,
        mut data: UpdatePropertyData,
    ) -> Result<PropertyView, UpdatePropertyError> {
        normalize_listing_update(&mut data).map_err(UpdatePropertyError::Validation)?;

        let status = data.status;
        self.repository
            .update(property_id, data)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => UpdatePropertyError::NotFound,
                PropertyRepositoryError::AmenityNotFound(id) => {
                    UpdatePropertyError::AmenityNotFound(id)
                }
                other => UpdatePropertyError::RepositoryError(other.to_string()),
            })?;

        info!(%property_id, status = ?status, "Property updated");

        self.query
            .get_by_id(property_id)
            .await
            .map_err(|e| UpdatePropertyError::RepositoryError(e.to_string()))
    }
}
