mod create_property;
mod delete_property;
mod get_properties;
mod get_property;
mod update_property;

pub use create_property::{CreatePropertyError, CreatePropertyUseCase};
pub use delete_property::{DeletePropertyError, DeletePropertyUseCase};
pub use get_properties::{GetPropertiesError, GetPropertiesUseCase};
pub use get_property::{GetPropertyError, GetPropertyUseCase};
pub use update_property::{UpdatePropertyError, UpdatePropertyUseCase};
