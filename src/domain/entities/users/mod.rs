//! Users Entity Module
//!
//! `users` 컬렉션의 사용자 엔티티와 역할 열거형을 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserRole};
//!
//! let user = User::new("kim@example.com".to_string(), doc! { "name": "Kim" });
//! assert_eq!(user.role, UserRole::User);
//! ```

pub mod user;

pub use user::*;
