mod create_upload_urls;

pub use create_upload_urls::*;
