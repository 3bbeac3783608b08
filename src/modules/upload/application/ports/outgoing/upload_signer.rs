use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignUrlError {
    #[error("Infrastructure error occurred")]
    Infrastructure,

    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Issues time-limited URLs that let a browser PUT an object straight into the bucket.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadSigner: Send + Sync {
    async fn sign_put_url(&self, object_key: &str) -> Result<String, SignUrlError>;
}
