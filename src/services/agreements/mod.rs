//! 입주 계약 서비스

pub mod agreement_service;

pub use agreement_service::*;
