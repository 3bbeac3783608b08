use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::modules::upload::application::ports::outgoing::{SignUrlError, UploadSigner};

/// TTL for signed upload URLs.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_sign_error(msg: &str) -> SignUrlError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        SignUrlError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        SignUrlError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") {
        SignUrlError::Configuration
    } else {
        SignUrlError::Infrastructure
    }
}

/// Seam over the google-cloud crates so the adapter can be tested with a fake.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0.sign_put_url(bucket_resource, object_name, ttl).await
    }
}

#[derive(Clone)]
pub struct GcsUploadSigner {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    ttl: Duration,
}

impl GcsUploadSigner {
    /// Credentials are resolved lazily on the first signing request.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.into(),
            ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new()?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str, ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
            ttl,
        }
    }
}

#[async_trait]
impl UploadSigner for GcsUploadSigner {
    async fn sign_put_url(&self, object_key: &str) -> Result<String, SignUrlError> {
        let client = self.get_client().await.map_err(|e| {
            tracing::error!("GCS signer unavailable: {}", e);
            SignUrlError::Configuration
        })?;

        client
            .sign_put_url(&bucket_resource(&self.bucket), object_key, self.ttl)
            .await
            .map_err(|e| {
                tracing::error!(object_key, "Failed to sign upload URL: {}", e);
                map_sign_error(&e)
            })
    }
}

// ============================================================================
// Real Google Cloud Storage signer
// ============================================================================

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                if e.to_string().contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }
                e
            })?;

        tracing::info!("GCS signer created");
        Ok(Self { signer })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }
}
