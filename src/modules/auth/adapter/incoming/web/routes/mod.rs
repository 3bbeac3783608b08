mod change_password;
pub(crate) mod fetch_user;
mod login_user;
mod logout_user;
mod password_reset;
mod refresh_token;
mod register_user;
mod update_profile;
mod verify_email;

pub use change_password::*;
pub use fetch_user::*;
pub use login_user::*;
pub use logout_user::*;
pub use password_reset::*;
pub use refresh_token::*;
pub use register_user::*;
pub use update_profile::*;
pub use verify_email::*;
