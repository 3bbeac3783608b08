pub mod password;
pub mod token;
pub mod user_profile;
