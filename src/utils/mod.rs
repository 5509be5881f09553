//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, ObjectId 파싱
//! - [`bson_json`] - 저장 문서와 응답 JSON 사이의 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::parse_object_id;
//! use crate::utils::bson_json::document_to_json;
//!
//! let id = parse_object_id(&path)?;
//! let body = document_to_json(coupon);
//! ```

pub mod string_utils;
pub mod bson_json;
