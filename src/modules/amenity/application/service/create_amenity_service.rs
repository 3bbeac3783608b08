use async_trait::async_trait;
use tracing::info;

use crate::modules::amenity::application::ports::incoming::use_cases::{
    CreateAmenityError, CreateAmenityUseCase,
};
use crate::modules::amenity::application::ports::outgoing::{
    AmenityQuery, AmenityRepository, AmenityRepositoryError, AmenityView, NewAmenity,
};
use crate::shared::validation::non_blank;

pub struct CreateAmenityService<Q, R>
where
    Q: AmenityQuery,
    R: AmenityRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateAmenityService<Q, R>
where
    Q: AmenityQuery,
    R: AmenityRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateAmenityUseCase for CreateAmenityService<Q, R>
where
    Q: AmenityQuery + Send + Sync,
    R: AmenityRepository + Send + Sync,
{
    async fn execute(&self, amenity: NewAmenity) -> Result<AmenityView, CreateAmenityError> {
        let (Some(name), Some(category)) =
            (non_blank(Some(amenity.name)), non_blank(Some(amenity.category)))
        else {
            return Err(CreateAmenityError::Validation(
                "Name and category are required".to_string(),
            ));
        };

        if self
            .query
            .name_exists(&name)
            .await
            .map_err(|e| CreateAmenityError::RepositoryError(e.to_string()))?
        {
            return Err(CreateAmenityError::AlreadyExists);
        }

        // The unique index still catches a concurrent insert of the same name.
        let created = self
            .repository
            .create(NewAmenity {
                name,
                category,
                icon: non_blank(amenity.icon),
            })
            .await
            .map_err(|e| match e {
                AmenityRepositoryError::NameAlreadyExists => CreateAmenityError::AlreadyExists,
                other => CreateAmenityError::RepositoryError(other.to_string()),
            })?;

        info!(amenity_id = %created.id, name = %created.name, "Amenity created");
        Ok(created)
    }
}
