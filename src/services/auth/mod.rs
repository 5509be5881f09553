//! 인증 서비스 모듈
//!
//! 관리자/결제 엔드포인트 가드가 사용하는 JWT 검증을 제공합니다.

pub mod token_service;

pub use token_service::*;
