use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

/// Argon2id hasher. Hashing and verification run on the blocking pool.
///
/// Seeded accounts may carry bcrypt hashes (`$2a$`, `$2b$`, `$2y$`); those are
/// verified with bcrypt so they keep working until the password is changed.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
    const DEFAULT_ITERATIONS: u32 = 3;
    const DEFAULT_PARALLELISM: u32 = 1;

    pub fn new() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let params = Params::new(
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_PARALLELISM,
            None,
        )
        .unwrap_or_default();

        Self { params }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, argon2::Error> {
        let params = Params::new(memory_kib, iterations, parallelism, None)?;
        Ok(Self { params })
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`.
    /// Unset or unusable values fall back to the defaults.
    pub fn from_env() -> Self {
        fn read(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        let memory_kib = read("ARGON2_MEMORY_KIB", Self::DEFAULT_MEMORY_KIB);
        let iterations = read("ARGON2_ITERATIONS", Self::DEFAULT_ITERATIONS);
        let parallelism = read("ARGON2_PARALLELISM", Self::DEFAULT_PARALLELISM);

        Self::with_params(memory_kib, iterations, parallelism).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Invalid Argon2 parameters, using defaults");
            Self::new()
        })
    }

    fn is_bcrypt_hash(hash: &str) -> bool {
        hash.starts_with("$2a$") || hash.starts_with("$2b$") || hash.starts_with("$2y$")
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            if Self::is_bcrypt_hash(&hash) {
                return bcrypt::verify(password.as_bytes(), &hash)
                    .map_err(|_| HashError::VerifyFailed);
            }

            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
