use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ChangePasswordRequest, ChangePasswordResponse, CreateUserRequest, ForgotPasswordRequest,
    LoginRequestDto, LoginResponse, LoginUserInfo, LogoutRequestDto, LogoutResponseBody,
    MessageResponse, RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterUserResponse,
    RegisteredUser, ResetPasswordRequest, UpdateUserRequest, UserProfileResponse,
    ValidateResetTokenResponse, VerifyEmailResponse,
};
use crate::auth::application::domain::entities::UserRole;
use crate::health::{HealthResponse, ReadinessResponse};
use crate::modules::amenity::adapter::incoming::web::routes::{
    AmenityResponse, CreateAmenityRequest,
};
use crate::modules::contact::adapter::incoming::web::routes::{ContactRequest, ContactResponse};
use crate::modules::dashboard::adapter::incoming::web::routes::{
    ActivityResponse, DashboardStatsResponse,
};
use crate::modules::inquiry::adapter::incoming::web::routes::{
    CreateInquiryRequest, DeleteInquiryResponse, InquiryAnalyticsResponse, InquiryDetailResponse,
    InquiryImageResponse, InquiryListResponse, InquiryPropertyDetail, InquiryPropertySummary,
    InquiryResponse, StatusShareResponse, TopPropertyResponse, TrendPointResponse,
    UpdateInquiryRequest,
};
use crate::modules::inquiry::application::domain::entities::InquiryStatus;
use crate::modules::property::adapter::incoming::web::routes::{
    CreatePropertyRequest, DeletePropertyResponse, PropertyAmenityResponse, PropertyImageResponse,
    PropertyListResponse, PropertyResponse, UpdatePropertyRequest,
};
use crate::modules::property::application::domain::entities::{PropertyStatus, PropertyType};
use crate::modules::upload::adapter::incoming::web::routes::{
    CreateUploadUrlsRequest, UploadFileRequest, UploadSlotResponse,
};
use crate::shared::pagination::Pagination;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Premier Deals API",
        version = "1.0.0",
        description = "Real-estate listings, inquiries and back-office dashboard for Premier Deals",
        contact(
            name = "API Support",
            email = "support@premierdeals.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_user_email_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::validate_reset_token_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,

        // Users
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,

        // Properties
        crate::modules::property::adapter::incoming::web::routes::get_properties_handler,
        crate::modules::property::adapter::incoming::web::routes::get_property_handler,
        crate::modules::property::adapter::incoming::web::routes::create_property_handler,
        crate::modules::property::adapter::incoming::web::routes::update_property_handler,
        crate::modules::property::adapter::incoming::web::routes::delete_property_handler,

        // Amenities
        crate::modules::amenity::adapter::incoming::web::routes::get_amenities_handler,
        crate::modules::amenity::adapter::incoming::web::routes::create_amenity_handler,

        // Inquiries
        crate::modules::inquiry::adapter::incoming::web::routes::create_inquiry_handler,
        crate::modules::inquiry::adapter::incoming::web::routes::get_inquiries_handler,
        crate::modules::inquiry::adapter::incoming::web::routes::get_inquiry_analytics_handler,
        crate::modules::inquiry::adapter::incoming::web::routes::get_inquiry_handler,
        crate::modules::inquiry::adapter::incoming::web::routes::update_inquiry_handler,
        crate::modules::inquiry::adapter::incoming::web::routes::delete_inquiry_handler,

        // Dashboard
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_stats_handler,
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_activities_handler,

        // Contact & upload
        crate::modules::contact::adapter::incoming::web::routes::send_contact_message_handler,
        crate::modules::upload::adapter::incoming::web::routes::create_upload_urls_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            Pagination,
            HealthResponse,
            ReadinessResponse,

            // Auth
            UserRole,
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            VerifyEmailResponse,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            LogoutRequestDto,
            LogoutResponseBody,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            ValidateResetTokenResponse,
            MessageResponse,
            UserProfileResponse,
            UpdateUserRequest,
            ChangePasswordRequest,
            ChangePasswordResponse,

            // Properties
            PropertyType,
            PropertyStatus,
            CreatePropertyRequest,
            UpdatePropertyRequest,
            PropertyResponse,
            PropertyImageResponse,
            PropertyAmenityResponse,
            PropertyListResponse,
            DeletePropertyResponse,

            // Amenities
            AmenityResponse,
            CreateAmenityRequest,

            // Inquiries
            InquiryStatus,
            CreateInquiryRequest,
            UpdateInquiryRequest,
            InquiryResponse,
            InquiryDetailResponse,
            InquiryImageResponse,
            InquiryPropertySummary,
            InquiryPropertyDetail,
            InquiryListResponse,
            DeleteInquiryResponse,
            InquiryAnalyticsResponse,
            TopPropertyResponse,
            StatusShareResponse,
            TrendPointResponse,

            // Dashboard
            DashboardStatsResponse,
            ActivityResponse,

            // Contact & upload
            ContactRequest,
            ContactResponse,
            CreateUploadUrlsRequest,
            UploadFileRequest,
            UploadSlotResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "Profile and password management"),
        (name = "properties", description = "Property listings"),
        (name = "amenities", description = "Amenity catalogue"),
        (name = "inquiries", description = "Buyer inquiries and analytics"),
        (name = "dashboard", description = "Back-office dashboard"),
        (name = "contact", description = "Public contact form"),
        (name = "upload", description = "Direct image uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
