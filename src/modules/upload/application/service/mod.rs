mod create_upload_urls_service;

pub use create_upload_urls_service::CreateUploadUrlsService;
