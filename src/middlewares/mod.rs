//! HTTP 미들웨어 모듈
//!
//! - [`AuthMiddleware`] - `JWT_SECRET` 이 설정된 경우에만 동작하는 Bearer 토큰 가드

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
