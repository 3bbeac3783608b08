pub mod properties;
pub mod property_amenities;
pub mod property_images;
