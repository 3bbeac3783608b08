mod gcs_upload_signer;

pub use gcs_upload_signer::GcsUploadSigner;
