//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ## 컬렉션별 표현
//!
//! | 컬렉션 | 표현 | 비고 |
//! |--------|------|------|
//! | `users` | [`users::User`] | 이메일이 자연 키, 역할은 `UserRole` |
//! | `agreements` | [`agreements::Agreement`] | 상태는 `AgreementStatus` |
//! | `payments` | [`payments::Payment`] | 추가 전용 |
//! | `apartmentCollection` / `announcements` / `coupons` | `bson::Document` | 스키마가 자유로운 문서 |
//!
//! 타입이 정해진 엔티티도 프론트엔드가 보내는 나머지 필드(이름, 사진, 층, 동 등)를
//! 잃지 않도록 `#[serde(flatten)]` 된 `Document` 에 보관합니다.
//!
//! ## 시간 필드
//!
//! `timestamp`, `checkedTime`, `rejectedTime` 은 기존 클라이언트와 같은
//! epoch 밀리초 정수입니다. 이전 데이터에는 Double 이나 BSON Date 로 저장된 값이
//! 섞여 있을 수 있어 [`deserialize_millis`] 로 모두 받아들입니다.

pub mod users;
pub mod agreements;
pub mod payments;

use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Deserializer};

pub use users::*;
pub use agreements::*;
pub use payments::*;

/// 현재 시각 (epoch 밀리초)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Int32 / Int64 / Double / Date 로 저장된 시각을 epoch 밀리초로 읽습니다.
pub fn deserialize_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Bson>::deserialize(deserializer)?;

    Ok(value.and_then(|v| match v {
        Bson::Int32(n) => Some(n as i64),
        Bson::Int64(n) => Some(n),
        Bson::Double(f) if f.is_finite() => Some(f as i64),
        Bson::DateTime(dt) => Some(dt.timestamp_millis()),
        _ => None,
    }))
}

/// 타입 필드와 겹치는 키를 추가 필드 문서에서 제거합니다.
///
/// flatten 된 `Document` 에 `_id` 나 `email` 같은 키가 남아 있으면
/// 직렬화 시 같은 키가 두 번 기록되므로 엔티티 생성 시 호출합니다.
pub(crate) fn strip_reserved(mut extra: Document, reserved: &[&str]) -> Document {
    for key in reserved {
        extra.remove(*key);
    }
    extra
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "deserialize_millis")]
        at: Option<i64>,
    }

    #[test]
    fn test_deserialize_millis_accepts_legacy_numbers() {
        let from_double: Stamped = mongodb::bson::from_document(doc! { "at": 1717000000000.0_f64 }).unwrap();
        let from_long: Stamped = mongodb::bson::from_document(doc! { "at": 1717000000000_i64 }).unwrap();
        let missing: Stamped = mongodb::bson::from_document(doc! {}).unwrap();

        assert_eq!(from_double.at, Some(1_717_000_000_000));
        assert_eq!(from_long.at, Some(1_717_000_000_000));
        assert_eq!(missing.at, None);
    }

    #[test]
    fn test_strip_reserved_removes_only_listed_keys() {
        let extra = strip_reserved(doc! { "_id": 1, "email": "a@b.c", "name": "Kim" }, &["_id", "email"]);
        assert_eq!(extra, doc! { "name": "Kim" });
    }
}
