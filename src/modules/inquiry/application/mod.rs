pub mod domain;
pub mod inquiry_use_cases;
pub mod ports;
pub mod service;
