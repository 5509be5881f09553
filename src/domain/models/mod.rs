//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 에 저장되는 문서 (`User`, `Agreement`, `Payment`)
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 (`AuthenticatedUser`, `TokenClaims`)
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 선택적 API 가드가 사용하는 토큰 클레임과 인증 사용자 모델

pub mod auth;

pub use auth::*;
