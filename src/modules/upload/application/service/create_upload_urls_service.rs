use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::upload::application::domain::upload_policy::{
    extension_for, random_suffix, UploadPolicy,
};
use crate::modules::upload::application::ports::incoming::use_cases::{
    CreateUploadUrlsError, CreateUploadUrlsUseCase, UploadFile, UploadSlot,
};
use crate::modules::upload::application::ports::outgoing::UploadSigner;

pub struct CreateUploadUrlsService<S>
where
    S: UploadSigner,
{
    signer: S,
    policy: UploadPolicy,
    public_base_url: String,
}

impl<S> CreateUploadUrlsService<S>
where
    S: UploadSigner,
{
    pub fn new(signer: S, policy: UploadPolicy, public_base_url: impl Into<String>) -> Self {
        Self {
            signer,
            policy,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl<S> CreateUploadUrlsUseCase for CreateUploadUrlsService<S>
where
    S: UploadSigner + Send + Sync,
{
    async fn execute(
        &self,
        files: Vec<UploadFile>,
    ) -> Result<Vec<UploadSlot>, CreateUploadUrlsError> {
        if files.is_empty() {
            return Err(CreateUploadUrlsError::NoFiles);
        }

        let mut keys = Vec::with_capacity(files.len());
        for file in &files {
            let mime = self
                .policy
                .check(&file.mime_type, file.file_size_bytes)
                .map_err(|e| CreateUploadUrlsError::InvalidFile {
                    file_name: file.file_name.clone(),
                    reason: e.to_string(),
                })?;

            let ext = extension_for(&file.file_name, &mime);
            keys.push(self.policy.object_key(
                ext,
                Utc::now().timestamp_millis(),
                &random_suffix(),
            ));
        }

        let mut slots = Vec::with_capacity(keys.len());
        for key in keys {
            let upload_url = self
                .signer
                .sign_put_url(&key)
                .await
                .map_err(|e| CreateUploadUrlsError::StorageError(e.to_string()))?;

            slots.push(UploadSlot {
                upload_url,
                file_url: format!("{}/{}", self.public_base_url, key),
            });
        }

        info!(count = slots.len(), "Signed upload URLs");
        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::upload::application::ports::outgoing::upload_signer::MockUploadSigner;
    use crate::modules::upload::application::ports::outgoing::SignUrlError;

    fn file(name: &str, mime: &str, size: u64) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            file_size_bytes: size,
        }
    }

    fn service(signer: MockUploadSigner) -> CreateUploadUrlsService<MockUploadSigner> {
        CreateUploadUrlsService::new(
            signer,
            UploadPolicy::default(),
            "https://storage.googleapis.com/premier-deals-uploads/",
        )
    }

    #[tokio::test]
    async fn test_signs_one_slot_per_file() {
        let mut signer = MockUploadSigner::new();
        signer
            .expect_sign_put_url()
            .times(2)
            .returning(|key| Ok(format!("https://signed.example/{key}?sig=1")));

        let slots = service(signer)
            .execute(vec![
                file("front.jpg", "image/jpeg", 2_000),
                file("pool.webp", "image/webp", 3_000),
            ])
            .await
            .unwrap();

        assert_eq!(slots.len(), 2);
        assert!(slots[0]
            .file_url
            .starts_with("https://storage.googleapis.com/premier-deals-uploads/properties/"));
        assert!(slots[0].file_url.ends_with(".jpg"));
        assert!(slots[1].file_url.ends_with(".webp"));

        let key = slots[0]
            .file_url
            .trim_start_matches("https://storage.googleapis.com/premier-deals-uploads/");
        assert_eq!(slots[0].upload_url, format!("https://signed.example/{key}?sig=1"));
    }

    #[tokio::test]
    async fn test_empty_request() {
        let mut signer = MockUploadSigner::new();
        signer.expect_sign_put_url().never();

        let err = service(signer).execute(vec![]).await.unwrap_err();

        assert!(matches!(err, CreateUploadUrlsError::NoFiles));
    }

    #[tokio::test]
    async fn test_one_bad_file_rejects_the_batch() {
        let mut signer = MockUploadSigner::new();
        signer.expect_sign_put_url().never();

        let err = service(signer)
            .execute(vec![
                file("front.jpg", "image/jpeg", 2_000),
                file("brochure.pdf", "application/pdf", 2_000),
            ])
            .await
            .unwrap_err();

        match err {
            CreateUploadUrlsError::InvalidFile { file_name, .. } => {
                assert_eq!(file_name, "brochure.pdf")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_oversized_file() {
        let mut signer = MockUploadSigner::new();
        signer.expect_sign_put_url().never();

        let err = service(signer)
            .execute(vec![file(
                "huge.png",
                "image/png",
                UploadPolicy::MAX_FILE_SIZE_BYTES + 1,
            )])
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUploadUrlsError::InvalidFile { .. }));
    }

    #[tokio::test]
    async fn test_signer_failure_is_storage_error() {
        let mut signer = MockUploadSigner::new();
        signer
            .expect_sign_put_url()
            .returning(|_| Err(SignUrlError::AccessDenied));

        let err = service(signer)
            .execute(vec![file("front.png", "image/png", 10)])
            .await
            .unwrap_err();

        assert!(matches!(err, CreateUploadUrlsError::StorageError(_)));
    }
}
