use std::sync::Arc;

use crate::auth::application::{
    orchestrator::user_registration::UserRegistrationOrchestrator,
    use_cases::{
        change_password::ChangePasswordUseCase,
        fetch_profile::FetchUserProfileUseCase,
        login_user::ILoginUserUseCase,
        logout_user::ILogoutUseCase,
        password_reset::{IForgotPasswordUseCase, IResetPasswordUseCase, IValidateResetTokenUseCase},
        refresh_token::IRefreshTokenUseCase,
        update_profile::UpdateUserProfileUseCase,
        verify_user_email::IVerifyUserEmailUseCase,
    },
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub verify_email: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub forgot_password: Arc<dyn IForgotPasswordUseCase + Send + Sync>,
    pub validate_reset_token: Arc<dyn IValidateResetTokenUseCase + Send + Sync>,
    pub reset_password: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
}
