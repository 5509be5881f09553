//! 사용자 관리 서비스 모듈
//!
//! 사용자 upsert, 조회, 멤버 필터링과 강등을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = user_service.upsert_if_absent(request).await?;
//! let members = user_service.list_filtered(&query).await?;
//! ```

pub mod user_service;

pub use user_service::*;
