//! 사용자 DTO
//!
//! - [`request::UpsertUserRequest`] - `PUT /user` 본문
//! - [`request::MemberQuery`] / [`request::MemberFilter`] - `GET /members` 필터

pub mod request;

pub use request::*;
