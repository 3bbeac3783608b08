pub mod bootstrap_admin;
pub mod change_password;
pub mod create_user;
pub mod fetch_profile;
pub mod login_user;
pub mod logout_user;
pub mod password_reset;
pub mod refresh_token;
pub mod update_profile;
pub mod verify_user_email;
