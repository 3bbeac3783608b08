use std::sync::Arc;

use crate::modules::amenity::application::ports::incoming::use_cases::{
    CreateAmenityUseCase, ListAmenitiesUseCase,
};

#[derive(Clone)]
pub struct AmenityUseCases {
    pub list: Arc<dyn ListAmenitiesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateAmenityUseCase + Send + Sync>,
}
