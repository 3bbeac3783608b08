pub mod amenities;
