pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::user_profile::{
    ChangePasswordService, FetchUserProfileService, UpdateUserProfileService,
};
use crate::auth::application::use_cases::{
    bootstrap_admin::{BootstrapAdminUseCase, BootstrapOutcome},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::LoginUserUseCase,
    logout_user::LogoutUseCase,
    password_reset::{ForgotPasswordUseCase, ResetPasswordUseCase, ValidateResetTokenUseCase},
    refresh_token::RefreshTokenUseCase,
    verify_user_email::VerifyUserEmailUseCase,
};
use crate::config::AppConfig;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::modules::amenity::adapter::outgoing::{AmenityQueryPostgres, AmenityRepositoryPostgres};
use crate::modules::amenity::application::amenity_use_cases::AmenityUseCases;
use crate::modules::amenity::application::service::{CreateAmenityService, ListAmenitiesService};
use crate::modules::contact::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::modules::contact::application::service::SendContactMessageService;
use crate::modules::dashboard::adapter::outgoing::DashboardQueryPostgres;
use crate::modules::dashboard::application::dashboard_use_cases::DashboardUseCases;
use crate::modules::dashboard::application::service::{
    GetDashboardStatsService, GetRecentActivitiesService,
};
use crate::modules::inquiry::adapter::outgoing::{InquiryQueryPostgres, InquiryRepositoryPostgres};
use crate::modules::inquiry::application::inquiry_use_cases::InquiryUseCases;
use crate::modules::inquiry::application::service::{
    CreateInquiryService, DeleteInquiryService, GetInquiryAnalyticsService, GetInquiryService,
    ListInquiriesService, UpdateInquiryStatusService,
};
use crate::modules::property::adapter::outgoing::{
    PropertyQueryPostgres, PropertyRepositoryPostgres,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::modules::property::application::service::{
    CreatePropertyService, DeletePropertyService, GetPropertiesService, GetPropertyService,
    UpdatePropertyService,
};
use crate::modules::upload::adapter::outgoing::GcsUploadSigner;
use crate::modules::upload::application::domain::upload_policy::UploadPolicy;
use crate::modules::upload::application::ports::incoming::use_cases::CreateUploadUrlsUseCase;
use crate::modules::upload::application::service::CreateUploadUrlsService;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{middleware, web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub property: PropertyUseCases,
    pub amenity: AmenityUseCases,
    pub inquiry: InquiryUseCases,
    pub dashboard: DashboardUseCases,
    pub contact: Arc<dyn SendContactMessageUseCase + Send + Sync>,
    pub upload: Arc<dyn CreateUploadUrlsUseCase + Send + Sync>,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, e);
    io::Error::other(format!("{context}: {e}"))
}

fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // .env.{environment} first, then .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(config: &AppConfig) -> io::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Failed to apply migrations", e))?;
    }

    Ok(Arc::new(conn))
}

#[cfg(not(tarpaulin_include))]
async fn seed_admin(
    config: &AppConfig,
    query: UserQueryPostgres,
    repository: UserRepositoryPostgres,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    policy: Arc<dyn PasswordPolicy + Send + Sync>,
) {
    let Some(seed) = &config.seed_admin else {
        return;
    };

    match BootstrapAdminUseCase::new(query, repository, hasher, policy)
        .execute(&seed.email, &seed.password)
        .await
    {
        Ok(BootstrapOutcome::Created) => info!("Seeded admin account {}", seed.email),
        Ok(BootstrapOutcome::AlreadyExists) => {}
        Err(e) => warn!("Admin bootstrap skipped: {}", e),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    let server_url = config.server_url();

    let db_arc = connect_database(&config).await?;

    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Failed to create Redis pool", e))?;
    let redis_arc = Arc::new(redis_pool);

    // Shared adapters
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(
        SmtpEmailSender::from_settings(&config.smtp, &config.email_from)
            .map_err(|e| startup_error("Invalid SMTP settings", e))?,
    );
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let blacklist: Arc<dyn TokenBlacklist + Send + Sync> =
        Arc::new(RedisTokenBlacklist::new(Arc::clone(&redis_arc)));
    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(Argon2Hasher::from_env());
    let policy: Arc<dyn PasswordPolicy + Send + Sync> = Arc::new(BasicPasswordPolicy);
    let notifier: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(UserEmailService::new(
        Arc::clone(&email_sender),
        config.app_url.clone(),
    ));

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    seed_admin(
        &config,
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&hasher),
        Arc::clone(&policy),
    )
    .await;

    let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> = Arc::new(CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::clone(&hasher),
        Arc::clone(&policy),
    ));

    let auth = AuthUseCases {
        register: Arc::new(UserRegistrationOrchestrator::new(
            create_user,
            Arc::clone(&notifier),
        )),
        verify_email: Arc::new(VerifyUserEmailUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&notifier),
        )),
        login: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        refresh_token: Arc::new(RefreshTokenUseCase::new(
            Arc::clone(&token_provider),
            Arc::clone(&blacklist),
        )),
        logout: Arc::new(LogoutUseCase::new(
            Arc::clone(&blacklist),
            Arc::clone(&token_provider),
        )),
        forgot_password: Arc::new(ForgotPasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&notifier),
        )),
        validate_reset_token: Arc::new(ValidateResetTokenUseCase::new(user_query.clone())),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&policy),
        )),
        fetch_profile: Arc::new(FetchUserProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateUserProfileService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(
            user_query,
            user_repo,
            Arc::clone(&hasher),
            Arc::clone(&policy),
        )),
    };

    // Properties
    let property_query = PropertyQueryPostgres::new(Arc::clone(&db_arc));
    let property_repo = PropertyRepositoryPostgres::new(Arc::clone(&db_arc));
    let property = PropertyUseCases {
        list: Arc::new(GetPropertiesService::new(property_query.clone())),
        get: Arc::new(GetPropertyService::new(property_query.clone())),
        create: Arc::new(CreatePropertyService::new(
            property_repo.clone(),
            property_query.clone(),
        )),
        update: Arc::new(UpdatePropertyService::new(
            property_repo.clone(),
            property_query,
        )),
        delete: Arc::new(DeletePropertyService::new(property_repo)),
    };

    // Amenities
    let amenity_query = AmenityQueryPostgres::new(Arc::clone(&db_arc));
    let amenity = AmenityUseCases {
        list: Arc::new(ListAmenitiesService::new(amenity_query.clone())),
        create: Arc::new(CreateAmenityService::new(
            amenity_query,
            AmenityRepositoryPostgres::new(Arc::clone(&db_arc)),
        )),
    };

    // Inquiries
    let inquiry_query = InquiryQueryPostgres::new(Arc::clone(&db_arc));
    let inquiry_repo = InquiryRepositoryPostgres::new(Arc::clone(&db_arc));
    let inquiry = InquiryUseCases {
        create: Arc::new(CreateInquiryService::new(
            inquiry_repo.clone(),
            inquiry_query.clone(),
        )),
        list: Arc::new(ListInquiriesService::new(inquiry_query.clone())),
        get: Arc::new(GetInquiryService::new(inquiry_query.clone())),
        update_status: Arc::new(UpdateInquiryStatusService::new(
            inquiry_repo.clone(),
            inquiry_query.clone(),
        )),
        delete: Arc::new(DeleteInquiryService::new(inquiry_repo)),
        analytics: Arc::new(GetInquiryAnalyticsService::new(
            inquiry_query,
            config.avg_response_time_hours,
        )),
    };

    // Dashboard
    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(&db_arc));
    let dashboard = DashboardUseCases {
        stats: Arc::new(GetDashboardStatsService::new(
            dashboard_query.clone(),
            config.avg_response_time_hours,
        )),
        activities: Arc::new(GetRecentActivitiesService::new(dashboard_query)),
    };

    let state = AppState {
        auth,
        property,
        amenity,
        inquiry,
        dashboard,
        contact: Arc::new(SendContactMessageService::new(
            Arc::clone(&email_sender),
            config.admin_email.clone(),
        )),
        upload: Arc::new(CreateUploadUrlsService::new(
            GcsUploadSigner::new(config.upload.bucket.clone()),
            UploadPolicy::default(),
            config.upload.public_base_url.clone(),
        )),
    };

    let openapi = api::openapi::ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::amenity::adapter::incoming::web::routes as amenity_routes;
    use crate::modules::contact::adapter::incoming::web::routes as contact_routes;
    use crate::modules::dashboard::adapter::incoming::web::routes as dashboard_routes;
    use crate::modules::inquiry::adapter::incoming::web::routes as inquiry_routes;
    use crate::modules::property::adapter::incoming::web::routes as property_routes;
    use crate::modules::upload::adapter::incoming::web::routes as upload_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::verify_user_email_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    cfg.service(auth_routes::logout_user_handler);
    cfg.service(auth_routes::forgot_password_handler);
    cfg.service(auth_routes::validate_reset_token_handler);
    cfg.service(auth_routes::reset_password_handler);
    cfg.service(auth_routes::get_user_profile_handler);
    cfg.service(auth_routes::update_user_profile_handler);
    cfg.service(auth_routes::change_password_handler);
    // Properties
    cfg.service(property_routes::get_properties_handler);
    cfg.service(property_routes::get_property_handler);
    cfg.service(property_routes::create_property_handler);
    cfg.service(property_routes::update_property_handler);
    cfg.service(property_routes::delete_property_handler);
    // Amenities
    cfg.service(amenity_routes::get_amenities_handler);
    cfg.service(amenity_routes::create_amenity_handler);
    // Inquiries; analytics must precede the {id} matcher
    cfg.service(inquiry_routes::get_inquiry_analytics_handler);
    cfg.service(inquiry_routes::create_inquiry_handler);
    cfg.service(inquiry_routes::get_inquiries_handler);
    cfg.service(inquiry_routes::get_inquiry_handler);
    cfg.service(inquiry_routes::update_inquiry_handler);
    cfg.service(inquiry_routes::delete_inquiry_handler);
    // Dashboard
    cfg.service(dashboard_routes::get_dashboard_stats_handler);
    cfg.service(dashboard_routes::get_dashboard_activities_handler);
    // Contact & upload
    cfg.service(contact_routes::send_contact_message_handler);
    cfg.service(upload_routes::create_upload_urls_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
