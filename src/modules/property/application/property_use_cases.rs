use std::sync::Arc;

use crate::modules::property::application::ports::incoming::use_cases::{
    CreatePropertyUseCase, DeletePropertyUseCase, GetPropertiesUseCase, GetPropertyUseCase,
    UpdatePropertyUseCase,
};

#[derive(Clone)]
pub struct PropertyUseCases {
    pub list: Arc<dyn GetPropertiesUseCase + Send + Sync>,
    pub get: Arc<dyn GetPropertyUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePropertyUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePropertyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePropertyUseCase + Send + Sync>,
}
