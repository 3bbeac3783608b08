use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub file_size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadSlot {
    /// Signed PUT target.
    pub upload_url: String,
    /// Public address of the object once the PUT succeeds.
    pub file_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUploadUrlsError {
    #[error("No files provided")]
    NoFiles,

    #[error("Invalid file {file_name}: {reason}")]
    InvalidFile { file_name: String, reason: String },

    #[error("Storage service error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait CreateUploadUrlsUseCase: Send + Sync {
    /// One slot per file, in request order. Nothing is signed unless every file passes.
    async fn execute(&self, files: Vec<UploadFile>)
        -> Result<Vec<UploadSlot>, CreateUploadUrlsError>;
}
