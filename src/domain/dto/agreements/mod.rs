//! 입주 계약 DTO

pub mod request;

pub use request::*;
