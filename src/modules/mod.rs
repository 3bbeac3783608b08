pub mod amenity;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod email;
pub mod inquiry;
pub mod property;
pub mod upload;
