//! API 가드 인증 모델
//!
//! - [`authenticated_user`] - 검증된 토큰에서 추출한 호출자
//! - [`authentication_request`] - 엔드포인트별 역할 요구사항과 토큰 클레임

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::*;
pub use authentication_request::*;
