//! Inert implementations of every use case in `AppState`.
//!
//! Route tests replace the one they exercise; the rest answer with a failure
//! so an accidental call shows up as an error response instead of a panic.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput, ChangePasswordUseCase,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserError, FetchUserProfileUseCase, UserProfileOutput,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{
    ILogoutUseCase, LogoutError, LogoutRequest, LogoutResponse,
};
use crate::auth::application::use_cases::password_reset::{
    IForgotPasswordUseCase, IResetPasswordUseCase, IValidateResetTokenUseCase, PasswordResetError,
};
use crate::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::auth::application::use_cases::update_profile::{
    UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase,
};
use crate::auth::application::use_cases::verify_user_email::{
    IVerifyUserEmailUseCase, VerifyEmailError, VerifyEmailOutput,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::amenity::application::ports::incoming::use_cases::{
    CreateAmenityError, CreateAmenityUseCase, ListAmenitiesError, ListAmenitiesUseCase,
};
use crate::modules::amenity::application::ports::outgoing::{AmenityView, NewAmenity};
use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::modules::dashboard::application::domain::activity::Activity;
use crate::modules::dashboard::application::domain::stats::DashboardStats;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase, GetRecentActivitiesError,
    GetRecentActivitiesUseCase,
};
use crate::modules::inquiry::application::domain::analytics::InquiryAnalytics;
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    CreateInquiryError, CreateInquiryUseCase, DeleteInquiryError, DeleteInquiryUseCase,
    GetInquiryAnalyticsError, GetInquiryAnalyticsUseCase, GetInquiryError, GetInquiryUseCase,
    ListInquiriesError, ListInquiriesUseCase, UpdateInquiryStatusError,
    UpdateInquiryStatusUseCase,
};
use crate::modules::inquiry::application::ports::outgoing::{InquiryView, NewInquiry};
use crate::modules::property::application::ports::incoming::use_cases::{
    CreatePropertyError, CreatePropertyUseCase, DeletePropertyError, DeletePropertyUseCase,
    GetPropertiesError, GetPropertiesUseCase, GetPropertyError, GetPropertyUseCase,
    UpdatePropertyError, UpdatePropertyUseCase,
};
use crate::modules::property::application::ports::outgoing::property_query::{
    PropertyListFilter, PropertyView,
};
use crate::modules::property::application::ports::outgoing::property_repository::{
    CreatePropertyData, UpdatePropertyData,
};
use crate::modules::upload::application::ports::incoming::use_cases::{
    CreateUploadUrlsError, CreateUploadUrlsUseCase, UploadFile, UploadSlot,
};
use crate::shared::pagination::{PageRequest, PageResult};

const STUB: &str = "stub";

// ─── auth ──────────────────────────────────────────────────

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        Err(CreateUserError::EmailAlreadyExists)
    }
}

pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_email(
        &self,
        _to: &str,
        _name: &str,
        _token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }

    async fn send_welcome_email(
        &self,
        _to: &str,
        _name: &str,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        _to: &str,
        _name: &str,
        _token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

pub struct StubVerifyUserEmailUseCase;

#[async_trait]
impl IVerifyUserEmailUseCase for StubVerifyUserEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<VerifyEmailOutput, VerifyEmailError> {
        Err(VerifyEmailError::InvalidToken)
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        Err(RefreshTokenError::TokenInvalid)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: LogoutRequest,
    ) -> Result<LogoutResponse, LogoutError> {
        Err(LogoutError::TokenRevocationFailed(STUB.to_string()))
    }
}

pub struct StubForgotPasswordUseCase;

#[async_trait]
impl IForgotPasswordUseCase for StubForgotPasswordUseCase {
    async fn execute(&self, _email: &str) -> Result<String, PasswordResetError> {
        Err(PasswordResetError::EmailSendFailed(STUB.to_string()))
    }
}

pub struct StubValidateResetTokenUseCase;

#[async_trait]
impl IValidateResetTokenUseCase for StubValidateResetTokenUseCase {
    async fn execute(&self, _token: &str) -> Result<(), PasswordResetError> {
        Err(PasswordResetError::InvalidToken)
    }
}

pub struct StubResetPasswordUseCase;

#[async_trait]
impl IResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(
        &self,
        _token: &str,
        _new_password: &str,
    ) -> Result<String, PasswordResetError> {
        Err(PasswordResetError::InvalidToken)
    }
}

pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, user_id: UserId) -> Result<UserProfileOutput, FetchUserError> {
        Err(FetchUserError::UserNotFound(Uuid::from(user_id).to_string()))
    }
}

pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(&self, _data: UpdateUserInput) -> Result<UserProfileOutput, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl ChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(&self, _input: ChangePasswordInput) -> Result<(), ChangePasswordError> {
        Err(ChangePasswordError::UserNotFound)
    }
}

// ─── property ──────────────────────────────────────────────

pub struct StubGetPropertiesUseCase;

#[async_trait]
impl GetPropertiesUseCase for StubGetPropertiesUseCase {
    async fn execute(
        &self,
        _filter: PropertyListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PropertyView>, GetPropertiesError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubGetPropertyUseCase;

#[async_trait]
impl GetPropertyUseCase for StubGetPropertyUseCase {
    async fn execute(&self, _property_id: Uuid) -> Result<PropertyView, GetPropertyError> {
        Err(GetPropertyError::NotFound)
    }
}

pub struct StubCreatePropertyUseCase;

#[async_trait]
impl CreatePropertyUseCase for StubCreatePropertyUseCase {
    async fn execute(&self, _data: CreatePropertyData) -> Result<PropertyView, CreatePropertyError> {
        Err(CreatePropertyError::RepositoryError(STUB.to_string()))
    }
}

pub struct StubUpdatePropertyUseCase;

#[async_trait]
impl UpdatePropertyUseCase for StubUpdatePropertyUseCase {
    async fn execute(
        &self,
        _property_id: Uuid,
        _data: UpdatePropertyData,
    ) -> Result<PropertyView, UpdatePropertyError> {
        Err(UpdatePropertyError::NotFound)
    }
}

pub struct StubDeletePropertyUseCase;

#[async_trait]
impl DeletePropertyUseCase for StubDeletePropertyUseCase {
    async fn execute(&self, _property_id: Uuid) -> Result<(), DeletePropertyError> {
        Err(DeletePropertyError::NotFound)
    }
}

// ─── amenity ───────────────────────────────────────────────

pub struct StubListAmenitiesUseCase;

#[async_trait]
impl ListAmenitiesUseCase for StubListAmenitiesUseCase {
    async fn execute(&self, _category: Option<String>) -> Result<Vec<AmenityView>, ListAmenitiesError> {
        Ok(Vec::new())
    }
}

pub struct StubCreateAmenityUseCase;

#[async_trait]
impl CreateAmenityUseCase for StubCreateAmenityUseCase {
    async fn execute(&self, _amenity: NewAmenity) -> Result<AmenityView, CreateAmenityError> {
        Err(CreateAmenityError::RepositoryError(STUB.to_string()))
    }
}

// ─── inquiry ───────────────────────────────────────────────

pub struct StubCreateInquiryUseCase;

#[async_trait]
impl CreateInquiryUseCase for StubCreateInquiryUseCase {
    async fn execute(&self, _inquiry: NewInquiry) -> Result<InquiryView, CreateInquiryError> {
        Err(CreateInquiryError::RepositoryError(STUB.to_string()))
    }
}

pub struct StubListInquiriesUseCase;

#[async_trait]
impl ListInquiriesUseCase for StubListInquiriesUseCase {
    async fn execute(
        &self,
        _status: Option<InquiryStatus>,
        page: PageRequest,
    ) -> Result<PageResult<InquiryView>, ListInquiriesError> {
        Ok(PageResult::empty(page))
    }
}

pub struct StubGetInquiryUseCase;

#[async_trait]
impl GetInquiryUseCase for StubGetInquiryUseCase {
    async fn execute(&self, _inquiry_id: Uuid) -> Result<InquiryView, GetInquiryError> {
        Err(GetInquiryError::NotFound)
    }
}

pub struct StubUpdateInquiryStatusUseCase;

#[async_trait]
impl UpdateInquiryStatusUseCase for StubUpdateInquiryStatusUseCase {
    async fn execute(
        &self,
        _inquiry_id: Uuid,
        _status: Option<InquiryStatus>,
    ) -> Result<InquiryView, UpdateInquiryStatusError> {
        Err(UpdateInquiryStatusError::NotFound)
    }
}

pub struct StubDeleteInquiryUseCase;

#[async_trait]
impl DeleteInquiryUseCase for StubDeleteInquiryUseCase {
    async fn execute(&self, _inquiry_id: Uuid) -> Result<(), DeleteInquiryError> {
        Err(DeleteInquiryError::NotFound)
    }
}

pub struct StubInquiryAnalyticsUseCase;

#[async_trait]
impl GetInquiryAnalyticsUseCase for StubInquiryAnalyticsUseCase {
    async fn execute(&self) -> Result<InquiryAnalytics, GetInquiryAnalyticsError> {
        Err(GetInquiryAnalyticsError::QueryFailed(STUB.to_string()))
    }
}

// ─── dashboard ─────────────────────────────────────────────

pub struct StubDashboardStatsUseCase;

#[async_trait]
impl GetDashboardStatsUseCase for StubDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        Err(GetDashboardStatsError::QueryFailed(STUB.to_string()))
    }
}

pub struct StubDashboardActivitiesUseCase;

#[async_trait]
impl GetRecentActivitiesUseCase for StubDashboardActivitiesUseCase {
    async fn execute(&self) -> Result<Vec<Activity>, GetRecentActivitiesError> {
        Ok(Vec::new())
    }
}

// ─── contact / upload ──────────────────────────────────────

pub struct StubSendContactMessageUseCase;

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SendContactMessageError> {
        Err(SendContactMessageError::EmailSendFailed(STUB.to_string()))
    }
}

pub struct StubCreateUploadUrlsUseCase;

#[async_trait]
impl CreateUploadUrlsUseCase for StubCreateUploadUrlsUseCase {
    async fn execute(
        &self,
        _files: Vec<UploadFile>,
    ) -> Result<Vec<UploadSlot>, CreateUploadUrlsError> {
        Err(CreateUploadUrlsError::StorageError(STUB.to_string()))
    }
}
