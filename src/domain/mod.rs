//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 저장 문서와 API 계약을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 문서와 매핑되는 객체 (User, Agreement, Payment)
//! ├── DTOs      - 요청/응답 계약 (쿼리 파라미터, 본문, 응답 형태)
//! └── Models    - 인증 가드가 다루는 호출자/클레임 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! 아파트, 공지, 쿠폰은 스키마가 정해지지 않은 문서이므로 엔티티 대신
//! `bson::Document` 를 그대로 사용합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
