mod create_property_service;
mod delete_property_service;
mod get_properties_service;
mod get_property_service;
pub mod listing_validation;
mod update_property_service;

pub use create_property_service::CreatePropertyService;
pub use delete_property_service::DeletePropertyService;
pub use get_properties_service::GetPropertiesService;
pub use get_property_service::GetPropertyService;
pub use update_property_service::UpdatePropertyService;
