//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다.
//!
//! | 모듈 | 내용 |
//! |------|------|
//! | [`common`] | 삽입/수정/삭제 결과, 개수 응답 |
//! | [`apartments`] | 페이지네이션 쿼리 |
//! | [`users`] | 사용자 upsert 본문, `/members` 필터 |
//! | [`agreements`] | 계약 생성/승인 본문 |
//! | [`payments`] | 결제 인텐트, 결제 기록 |
//!
//! 요청 DTO 는 `validator::Validate` 를 구현하며 핸들러에서 검증 후 서비스로 전달됩니다.
//! 프론트엔드가 보내는 나머지 필드는 `#[serde(flatten)]` 맵으로 받아 그대로 저장합니다.

pub mod common;
pub mod apartments;
pub mod users;
pub mod agreements;
pub mod payments;

pub use common::*;
