//! 아파트 목록 DTO

pub mod request;

pub use request::*;
