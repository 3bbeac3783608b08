mod create_amenity;
mod list_amenities;

pub use create_amenity::{CreateAmenityError, CreateAmenityUseCase};
pub use list_amenities::{ListAmenitiesError, ListAmenitiesUseCase};
