//! 아파트 조회 서비스

pub mod apartment_service;

pub use apartment_service::*;
