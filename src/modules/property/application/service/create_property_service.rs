use async_trait::async_trait;
use tracing::info;

use super::listing_validation::normalize_new_listing;
use crate::modules::property::application::ports::incoming::use_cases::{
    CreatePropertyError, CreatePropertyUseCase,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyQuery, PropertyView,
};
use crate::modules::property::application::ports::outgoing::property_repository::{
    CreatePropertyData, PropertyRepository, PropertyRepositoryError,
};

pub struct CreatePropertyService<R, Q>
where
    R: PropertyRepository,
    Q: PropertyQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreatePropertyService<R, Q>
where
    R: PropertyRepository,
    Q: PropertyQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreatePropertyUseCase for CreatePropertyService<R, Q>
where
    R: PropertyRepository + Send + Sync,
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut data: CreatePropertyData,
    ) -> Result<PropertyView, CreatePropertyError> {
        normalize_new_listing(&mut data).map_err(CreatePropertyError::Validation)?;

        let owner_id = data.owner_id;
        let property_id = self
            .repository
            .create(data)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::AmenityNotFound(id) => {
                    CreatePropertyError::AmenityNotFound(id)
                }
                other => CreatePropertyError::RepositoryError(other.to_string()),
            })?;

        info!(%property_id, %owner_id, "Property created");

        self.query
            .get_by_id(property_id)
            .await
            .map_err(|e| CreatePropertyError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::property::application::ports::outgoing::property_query::MockPropertyQuery;
    use crate::modules::property::application::ports::outgoing::property_repository::MockPropertyRepository;
    use crate::modules::property::application::service::listing_validation::tests::valid_listing;
    use crate::tests::support::fixtures::property_view;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_returns_stored_listing() {
        let property_id = Uuid::new_v4();

        let mut repo = MockPropertyRepository::new();
        repo.expect_create()
            .withf(|data| data.title == "Sunny Loft" && data.country == "USA")
            .times(1)
            .returning(move |_| Ok(property_id));

        let mut query = MockPropertyQuery::new();
        query
            .expect_get_by_id()
            .withf(move |id| *id == property_id)
            .returning(|id| Ok(property_view(id)));

        let service = CreatePropertyService::new(repo, query);
        let view = service.execute(valid_listing()).await.unwrap();

        assert_eq!(view.id, property_id);
    }

    #[tokio::test]
    async fn test_invalid_listing_never_reaches_repository() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_create().never();

        let service = CreatePropertyService::new(repo, MockPropertyQuery::new());
        let mut data = valid_listing();
        data.title = " ".to_string();

        assert!(matches!(
            service.execute(data).await,
            Err(CreatePropertyError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_amenity() {
        let mut repo = MockPropertyRepository::new();
        repo.expect_create()
            .returning(|_| Err(PropertyRepositoryError::AmenityNotFound("x".to_string())));

        let service = CreatePropertyService::new(repo, MockPropertyQuery::new());

        assert!(matches!(
            service.execute(valid_listing()).await,
            Err(CreatePropertyError::AmenityNotFound(_))
        ));
    }
}
