use std::path::Path;

use rand::distributions::Alphanumeric;
use rand::Rng;

const RANDOM_SUFFIX_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    TooLarge { max_bytes: u64, actual_bytes: u64 },
}

/// Rules applied to every file before an upload slot is signed.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
    pub key_prefix: &'static str,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::ALLOWED_MIME_TYPES,
            key_prefix: Self::KEY_PREFIX,
        }
    }
}

impl UploadPolicy {
    pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    pub const ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/jpg", "image/png", "image/webp"];
    pub const KEY_PREFIX: &'static str = "properties";

    /// Returns the normalized mime type on success.
    pub fn check(&self, mime_type: &str, file_size_bytes: u64) -> Result<String, FileRejection> {
        let mime = mime_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(FileRejection::UnsupportedType(mime_type.to_string()));
        }

        if file_size_bytes > self.max_file_size_bytes {
            return Err(FileRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: file_size_bytes,
            });
        }

        Ok(mime)
    }

    /// `<prefix>/<unix-millis>-<suffix>.<ext>`; nothing user supplied ends up in the path
    /// except a whitelisted extension.
    pub fn object_key(&self, ext: &str, unix_millis: i64, suffix: &str) -> String {
        format!("{}/{}-{}.{}", self.key_prefix, unix_millis, suffix, ext)
    }
}

/// Keeps the client's extension when it agrees with the mime type,
/// otherwise falls back to the canonical one for that type.
pub fn extension_for(file_name: &str, mime_type: &str) -> &'static str {
    let from_name = Path::new(file_name.trim())
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match (mime_type, from_name.as_deref()) {
        ("image/jpeg" | "image/jpg", Some("jpeg")) => "jpeg",
        ("image/jpeg" | "image/jpg", _) => "jpg",
        ("image/png", _) => "png",
        ("image/webp", _) => "webp",
        _ => "bin",
    }
}

pub fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect()
}
