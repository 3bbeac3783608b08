mod create_amenity_service;
mod list_amenities_service;

pub use create_amenity_service::CreateAmenityService;
pub use list_amenities_service::ListAmenitiesService;
