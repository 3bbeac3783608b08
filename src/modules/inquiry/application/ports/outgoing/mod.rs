pub mod inquiry_query;
pub mod inquiry_repository;

pub use inquiry_query::{
    InquiryImageView, InquiryPropertyView, InquiryQuery, InquiryQueryError, InquiryView,
};
pub use inquiry_repository::{InquiryRepository, InquiryRepositoryError, NewInquiry};
