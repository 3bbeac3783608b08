pub mod upload_signer;

pub use upload_signer::{SignUrlError, UploadSigner};
