//! User Entity Implementation
//!
//! 입주민/관리자 계정을 표현하는 사용자 엔티티입니다.
//! 이메일이 자연 키이며 역할(`user` → `member` → `admin`)은 관리자 작업으로만 바뀝니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{deserialize_millis, now_millis, strip_reserved};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 일반 사용자 (가입 직후)
    #[default]
    User,
    /// 계약이 승인된 입주민
    Member,
    /// 관리자
    Admin,
}

impl UserRole {
    /// 저장/비교에 쓰는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Member => "member",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    #[serde(default)]
    pub email: String,
    /// 사용자 역할
    #[serde(default)]
    pub role: UserRole,
    /// 최초 저장 시각 (epoch ms)
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_millis")]
    pub timestamp: Option<i64>,
    /// 이름, 프로필 사진 등 클라이언트가 보낸 나머지 필드
    #[serde(flatten)]
    pub profile: Document,
}

impl User {
    /// 처음 저장될 사용자를 생성합니다.
    ///
    /// 역할은 항상 `user` 로 시작하고 타임스탬프는 서버 시각입니다.
    /// 프로필에 섞여 들어온 `_id`, `email`, `role`, `timestamp` 는 버립니다.
    pub fn new(email: String, profile: Document) -> Self {
        Self {
            id: None,
            email,
            role: UserRole::User,
            timestamp: Some(now_millis()),
            profile: strip_reserved(profile, &["_id", "email", "role", "timestamp"]),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_new_user_ignores_client_role() {
        let user = User::new(
            "kim@example.com".to_string(),
            doc! { "name": "Kim", "role": "admin", "email": "other@example.com" },
        );

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.profile, doc! { "name": "Kim" });
        assert!(user.timestamp.is_some());
    }

    #[test]
    fn test_user_bson_roundtrip_keeps_profile_fields() {
        let user = User::new("kim@example.com".to_string(), doc! { "photo": "https://img/1.png" });
        let stored = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(stored.get_str("role").unwrap(), "user");
        assert_eq!(stored.get_str("photo").unwrap(), "https://img/1.png");

        let back: User = mongodb::bson::from_document(stored).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_without_email_still_reads() {
        let stored = doc! { "_id": ObjectId::new(), "name": "x", "timestamp": 1_i64 };

        let user: User = mongodb::bson::from_document(stored).unwrap();

        assert_eq!(user.email, "");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.profile.get_str("name").unwrap(), "x");
    }
}
