mod amenity_response;
mod create_amenity;
mod get_amenities;

pub use amenity_response::*;
pub use create_amenity::*;
pub use get_amenities::*;
