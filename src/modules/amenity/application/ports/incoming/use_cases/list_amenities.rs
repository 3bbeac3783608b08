use async_trait::async_trait;

use crate::modules::amenity::application::ports::outgoing::AmenityView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListAmenitiesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListAmenitiesUseCase: Send + Sync {
    async fn execute(&self, category: Option<String>)
        -> Result<Vec<AmenityView>, ListAmenitiesError>;
}
