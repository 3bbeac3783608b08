pub mod amenity_query;
pub mod amenity_repository;

pub use amenity_query::{AmenityQuery, AmenityQueryError, AmenityView};
pub use amenity_repository::{AmenityRepository, AmenityRepositoryError, NewAmenity};
