use async_trait::async_trait;

use crate::modules::amenity::application::ports::incoming::use_cases::{
    ListAmenitiesError, ListAmenitiesUseCase,
};
use crate::modules::amenity::application::ports::outgoing::{AmenityQuery, AmenityView};
use crate::shared::validation::non_blank;

pub struct ListAmenitiesService<Q>
where
    Q: AmenityQuery,
{
    query: Q,
}

impl<Q> ListAmenitiesService<Q>
where
    Q: AmenityQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAmenitiesUseCase for ListAmenitiesService<Q>
where
    Q: AmenityQuery + Send + Sync,
{
    async fn execute(
        &self,
        category: Option<String>,
    ) -> Result<Vec<AmenityView>, ListAmenitiesError> {
        self.query
            .list(non_blank(category))
            .await
            .map_err(|e| ListAmenitiesError::QueryFailed(e.to_string()))
    }
}
