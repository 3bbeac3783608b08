pub mod property_query;
pub mod property_repository;

pub use property_query::{
    PropertyAmenityView, PropertyImageView, PropertyListFilter, PropertyQuery, PropertyQueryError,
    PropertyView,
};
pub use property_repository::{
    CreatePropertyData, PropertyRepository, PropertyRepositoryError, UpdatePropertyData,
};
