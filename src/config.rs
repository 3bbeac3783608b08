use std::env;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// SMTP transport selection. `Local` targets an unauthenticated relay such as Mailpit.
#[derive(Debug, Clone)]
pub enum SmtpSettings {
    Local {
        host: String,
        port: u16,
    },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub bucket: String,
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub app_url: String,
    pub email_from: String,
    pub admin_email: String,
    pub smtp: SmtpSettings,
    pub jwt: JwtConfig,
    pub upload: UploadSettings,
    pub avg_response_time_hours: f64,
    pub run_migrations: bool,
    pub seed_admin: Option<SeedAdmin>,
}

impl AppConfig {
    pub const DEFAULT_UPLOAD_BUCKET: &'static str = "premier-deals-uploads";
    pub const DEFAULT_AVG_RESPONSE_TIME_HOURS: f64 = 2.3;

    /// Reads the process environment. Call after the dotenv files are loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        let email_from = required("EMAIL_FROM")?;
        let admin_email = optional("ADMIN_EMAIL").unwrap_or_else(|| email_from.clone());

        let smtp = if env::var("RUST_ENV").as_deref() == Ok("test") {
            SmtpSettings::Local {
                host: optional("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", 1025)?,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let bucket =
            optional("UPLOAD_BUCKET").unwrap_or_else(|| Self::DEFAULT_UPLOAD_BUCKET.to_string());
        let public_base_url = optional("UPLOAD_PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("https://storage.googleapis.com/{bucket}"));

        let seed_admin = match (optional("SEED_ADMIN_EMAIL"), optional("SEED_ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(SeedAdmin { email, password }),
            _ => None,
        };

        Ok(Self {
            host: required("HOST")?,
            port: parse_required("PORT")?,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            app_url: optional("APP_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            email_from,
            admin_email,
            smtp,
            jwt: JwtConfig::from_env()?,
            upload: UploadSettings {
                bucket,
                public_base_url: public_base_url.trim_end_matches('/').to_string(),
            },
            avg_response_time_hours: parse_or(
                "AVG_RESPONSE_TIME_HOURS",
                Self::DEFAULT_AVG_RESPONSE_TIME_HOURS,
            )?,
            run_migrations: parse_or("RUN_MIGRATIONS", false)?,
            seed_admin,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

pub(crate) fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_required<T>(key: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = required(key)?;
    raw.parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

pub(crate) fn parse_or<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(key) {
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        let value: u16 = parse_or("PREMIER_DEALS_TEST_UNSET_PORT", 1025).unwrap();
        assert_eq!(value, 1025);
    }

    #[test]
    fn test_required_reports_missing_key() {
        let err = required("PREMIER_DEALS_TEST_MISSING_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PREMIER_DEALS_TEST_MISSING_KEY")));
        assert_eq!(err.to_string(), "PREMIER_DEALS_TEST_MISSING_KEY is not set");
    }

    #[test]
    fn test_parse_or_reports_invalid_value() {
        env::set_var("PREMIER_DEALS_TEST_BAD_FLOAT", "two");
        let err = parse_or::<f64>("PREMIER_DEALS_TEST_BAD_FLOAT", 1.0).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "PREMIER_DEALS_TEST_BAD_FLOAT",
                ..
            }
        ));
    }
}
