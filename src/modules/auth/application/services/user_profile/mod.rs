mod change_password;
mod fetch_user;
mod update_profile;

pub use change_password::ChangePasswordService;
pub use fetch_user::FetchUserProfileService;
pub use update_profile::UpdateUserProfileService;
