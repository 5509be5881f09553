//! 사용자 요청 DTO

use mongodb::bson::{doc, Document};
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::users::UserRole;
use crate::errors::AppError;

/// `PUT /user` 요청 본문
///
/// 이메일 외의 필드(이름, 프로필 사진 등)는 `profile` 로 받아 처음 저장할 때만 기록됩니다.
/// 본문의 `role` 은 무시됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// `GET /members` 쿼리 파라미터
///
/// 허용된 필드(`role`, `email`)만 받으며, 그 외 파라미터가 있으면 쿼리 파싱 단계에서 거절됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberQuery {
    pub role: Option<UserRole>,
    pub email: Option<String>,
}

/// `/members` 에서 허용되는 동등 비교 필터
#[derive(Debug, Clone, PartialEq)]
pub enum MemberFilter {
    Role(UserRole),
    Email(String),
}

impl MemberFilter {
    fn apply(&self, filter: &mut Document) {
        match self {
            MemberFilter::Role(role) => filter.insert("role", role.as_str()),
            MemberFilter::Email(email) => filter.insert("email", email.as_str()),
        };
    }
}

impl MemberQuery {
    /// 쿼리를 허용된 필터 목록으로 변환합니다.
    pub fn filters(&self) -> Result<Vec<MemberFilter>, AppError> {
        let mut filters = Vec::new();

        if let Some(role) = self.role {
            filters.push(MemberFilter::Role(role));
        }

        if let Some(email) = &self.email {
            let email = email.trim();
            if email.is_empty() {
                return Err(AppError::ValidationError("email 필터가 비어 있습니다".to_string()));
            }
            filters.push(MemberFilter::Email(email.to_string()));
        }

        Ok(filters)
    }

    /// MongoDB 필터 문서를 생성합니다. 필터가 없으면 빈 문서(전체 조회)입니다.
    pub fn to_filter(&self) -> Result<Document, AppError> {
        let mut filter = doc! {};
        for member_filter in self.filters()? {
            member_filter.apply(&mut filter);
        }
        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upsert_request_collects_profile_fields() {
        let request: UpsertUserRequest = serde_json::from_value(json!({
            "email": "kim@example.com",
            "name": "Kim",
            "photo": "https://img/1.png",
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.profile.get("name"), Some(&json!("Kim")));
        assert!(!request.profile.contains_key("email"));
    }

    #[test]
    fn test_upsert_request_rejects_invalid_email() {
        let request: UpsertUserRequest =
            serde_json::from_value(json!({ "email": "not-an-email" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_member_query_builds_equality_filter() {
        let query = MemberQuery { role: Some(UserRole::Member), email: None };
        assert_eq!(query.to_filter().unwrap(), doc! { "role": "member" });

        let both = MemberQuery {
            role: Some(UserRole::Admin),
            email: Some(" lee@example.com ".to_string()),
        };
        assert_eq!(both.to_filter().unwrap(), doc! { "role": "admin", "email": "lee@example.com" });

        assert_eq!(MemberQuery::default().to_filter().unwrap(), doc! {});
    }

    #[test]
    fn test_member_query_rejects_blank_email() {
        let query = MemberQuery { role: None, email: Some("  ".to_string()) };
        assert!(matches!(query.to_filter(), Err(AppError::ValidationError(_))));
    }
}
