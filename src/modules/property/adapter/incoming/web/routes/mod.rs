mod create_property;
mod delete_property;
mod get_properties;
mod get_property;
mod property_response;
mod update_property;

pub use create_property::*;
pub use delete_property::*;
pub use get_properties::*;
pub use get_property::*;
pub use property_response::*;
pub use update_property::*;
