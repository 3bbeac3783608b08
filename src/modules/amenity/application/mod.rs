pub mod amenity_use_cases;
pub mod ports;
pub mod service;
