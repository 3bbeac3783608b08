use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    change_password::ChangePasswordUseCase,
    fetch_profile::FetchUserProfileUseCase,
    login_user::ILoginUserUseCase,
    logout_user::ILogoutUseCase,
    password_reset::{IForgotPasswordUseCase, IResetPasswordUseCase, IValidateResetTokenUseCase},
    refresh_token::IRefreshTokenUseCase,
    update_profile::UpdateUserProfileUseCase,
    verify_user_email::IVerifyUserEmailUseCase,
};
use crate::modules::amenity::application::amenity_use_cases::AmenityUseCases;
use crate::modules::amenity::application::ports::incoming::use_cases::{
    CreateAmenityUseCase, ListAmenitiesUseCase,
};
use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsUseCase, GetRecentActivitiesUseCase,
};
use crate::modules::inquiry::application::inquiry_use_cases::InquiryUseCases;
use crate::modules::inquiry::application::ports::incoming::use_cases::{
    CreateInquiryUseCase, DeleteInquiryUseCase, GetInquiryAnalyticsUseCase, GetInquiryUseCase,
    ListInquiriesUseCase, UpdateInquiryStatusUseCase,
};
use crate::modules::property::application::ports::incoming::use_cases::{
    CreatePropertyUseCase, DeletePropertyUseCase, GetPropertiesUseCase, GetPropertyUseCase,
    UpdatePropertyUseCase,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::modules::upload::application::ports::incoming::use_cases::CreateUploadUrlsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` for route tests: stubs everywhere except what a test swaps in.
pub struct TestAppStateBuilder {
    state: AppState,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        Arc::new(StubUserEmailNotifier),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                auth: AuthUseCases {
                    register: default_test_user_registration_orchestrator(),
                    verify_email: Arc::new(StubVerifyUserEmailUseCase),
                    login: Arc::new(StubLoginUserUseCase),
                    refresh_token: Arc::new(StubRefreshTokenUseCase),
                    logout: Arc::new(StubLogoutUserUseCase),
                    forgot_password: Arc::new(StubForgotPasswordUseCase),
                    validate_reset_token: Arc::new(StubValidateResetTokenUseCase),
                    reset_password: Arc::new(StubResetPasswordUseCase),
                    fetch_profile: Arc::new(StubFetchUserProfileUseCase),
                    update_profile: Arc::new(StubUpdateUserProfileUseCase),
                    change_password: Arc::new(StubChangePasswordUseCase),
                },
                property: PropertyUseCases {
                    list: Arc::new(StubGetPropertiesUseCase),
                    get: Arc::new(StubGetPropertyUseCase),
                    create: Arc::new(StubCreatePropertyUseCase),
                    update: Arc::new(StubUpdatePropertyUseCase),
                    delete: Arc::new(StubDeletePropertyUseCase),
                },
                amenity: AmenityUseCases {
                    list: Arc::new(StubListAmenitiesUseCase),
                    create: Arc::new(StubCreateAmenityUseCase),
                },
                inquiry: InquiryUseCases {
                    create: Arc::new(StubCreateInquiryUseCase),
                    list: Arc::new(StubListInquiriesUseCase),
                    get: Arc::new(StubGetInquiryUseCase),
                    update_status: Arc::new(StubUpdateInquiryStatusUseCase),
                    delete: Arc::new(StubDeleteInquiryUseCase),
                    analytics: Arc::new(StubInquiryAnalyticsUseCase),
                },
                dashboard: DashboardUseCases {
                    stats: Arc::new(StubDashboardStatsUseCase),
                    activities: Arc::new(StubDashboardActivitiesUseCase),
                },
                contact: Arc::new(StubSendContactMessageUseCase),
                upload: Arc::new(StubCreateUploadUrlsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ─── auth ──────────────────────────────────────────────

    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.state.auth.register = orchestrator;
        self
    }

    pub fn with_verify_user_email(
        mut self,
        uc: impl IVerifyUserEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.verify_email = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.state.auth.login = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.state.auth.logout = Arc::new(uc);
        self
    }

    pub fn with_forgot_password(
        mut self,
        uc: impl IForgotPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.forgot_password = Arc::new(uc);
        self
    }

    pub fn with_validate_reset_token(
        mut self,
        uc: impl IValidateResetTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.validate_reset_token = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl IResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl ChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.auth.change_password = Arc::new(uc);
        self
    }

    // ─── property ──────────────────────────────────────────

    pub fn with_get_properties(
        mut self,
        uc: impl GetPropertiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.property.list = Arc::new(uc);
        self
    }

    pub fn with_get_property(mut self, uc: impl GetPropertyUseCase + Send + Sync + 'static) -> Self {
        self.state.property.get = Arc::new(uc);
        self
    }

    pub fn with_create_property(
        mut self,
        uc: impl CreatePropertyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.property.create = Arc::new(uc);
        self
    }

    pub fn with_update_property(
        mut self,
        uc: impl UpdatePropertyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.property.update = Arc::new(uc);
        self
    }

    pub fn with_delete_property(
        mut self,
        uc: impl DeletePropertyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.property.delete = Arc::new(uc);
        self
    }

    // ─── amenity ───────────────────────────────────────────

    pub fn with_list_amenities(
        mut self,
        uc: impl ListAmenitiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.amenity.list = Arc::new(uc);
        self
    }

    pub fn with_create_amenity(
        mut self,
        uc: impl CreateAmenityUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.amenity.create = Arc::new(uc);
        self
    }

    // ─── inquiry ───────────────────────────────────────────

    pub fn with_create_inquiry(
        mut self,
        uc: impl CreateInquiryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.inquiry.create = Arc::new(uc);
        self
    }

    pub fn with_list_inquiries(
        mut self,
        uc: impl ListInquiriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.inquiry.list = Arc::new(uc);
        self
    }

    pub fn with_get_inquiry(mut self, uc: impl GetInquiryUseCase + Send + Sync + 'static) -> Self {
        self.state.inquiry.get = Arc::new(uc);
        self
    }

    pub fn with_update_inquiry_status(
        mut self,
        uc: impl UpdateInquiryStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.inquiry.update_status = Arc::new(uc);
        self
    }

    pub fn with_delete_inquiry(
        mut self,
        uc: impl DeleteInquiryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.inquiry.delete = Arc::new(uc);
        self
    }

    pub fn with_inquiry_analytics(
        mut self,
        uc: impl GetInquiryAnalyticsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.inquiry.analytics = Arc::new(uc);
        self
    }

    // ─── dashboard ─────────────────────────────────────────

    pub fn with_dashboard_stats(
        mut self,
        uc: impl GetDashboardStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.dashboard.stats = Arc::new(uc);
        self
    }

    pub fn with_dashboard_activities(
        mut self,
        uc: impl GetRecentActivitiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.dashboard.activities = Arc::new(uc);
        self
    }

    // ─── contact / upload ──────────────────────────────────

    pub fn with_send_contact_message(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.contact = Arc::new(uc);
        self
    }

    pub fn with_create_upload_urls(
        mut self,
        uc: impl CreateUploadUrlsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.state.upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
