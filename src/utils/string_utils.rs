//! # 문자열 유틸리티
//!
//! 경로 파라미터와 요청 필드 처리에 쓰는 공통 함수들입니다.

use mongodb::bson::oid::ObjectId;
use crate::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  kim@example.com ", "email").unwrap(), "kim@example.com");
/// assert!(validate_required_string("   ", "email").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 24자리 16진수 문자열을 ObjectId 로 파싱합니다.
///
/// 잘못된 형식은 저장소까지 내려가지 않고 400 으로 거절됩니다.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
}
