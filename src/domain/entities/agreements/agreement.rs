//! Agreement Entity Implementation
//!
//! 입주 계약 엔티티와 상태 전이 규칙입니다.
//!
//! ```text
//!            approve            (user.role = member)
//! pending ───────────▶ approved
//!    │
//!    │ reject
//!    ▼
//! rejected
//! ```
//!
//! 같은 상태로의 재전이는 허용(멱등)되고, approved ↔ rejected 는 허용되지 않습니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{deserialize_millis, strip_reserved};

/// 같은 이메일로 두 번째 계약을 만들 때 돌려주는 메시지 (기존 클라이언트가 그대로 표시)
pub const DUPLICATE_AGREEMENT_MESSAGE: &str = "You've already made agreement for an apartment";

/// 계약 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl AgreementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Pending => "pending",
            AgreementStatus::Approved => "approved",
            AgreementStatus::Rejected => "rejected",
        }
    }

    /// `self` 에서 `next` 로 전이할 수 있는지 확인합니다.
    pub fn can_transition_to(&self, next: AgreementStatus) -> bool {
        *self == next || *self == AgreementStatus::Pending
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 입주 계약 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 계약자 이메일 (사용자당 계약 하나)
    #[serde(rename = "userEmail", default)]
    pub user_email: String,
    #[serde(default)]
    pub status: AgreementStatus,
    /// 남은 월세. 결제 기록 시 0 으로 초기화됩니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<f64>,
    /// 승인 시각 (epoch ms)
    #[serde(
        rename = "checkedTime",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_millis"
    )]
    pub checked_time: Option<i64>,
    /// 거절 시각 (epoch ms)
    #[serde(
        rename = "rejectedTime",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_millis"
    )]
    pub rejected_time: Option<i64>,
    /// 아파트 번호, 층, 동, 사용자 이름 등 나머지 필드
    #[serde(flatten)]
    pub details: Document,
}

impl Agreement {
    /// 새 계약을 `pending` 상태로 생성합니다.
    ///
    /// 클라이언트가 보낸 `status` 나 처리 시각은 무시됩니다.
    pub fn new_pending(user_email: String, rent: Option<f64>, details: Document) -> Self {
        Self {
            id: None,
            user_email,
            status: AgreementStatus::Pending,
            rent,
            checked_time: None,
            rejected_time: None,
            details: strip_reserved(
                details,
                &["_id", "userEmail", "status", "rent", "checkedTime", "rejectedTime"],
            ),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_status_transitions() {
        use AgreementStatus::*;

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
    }

    #[test]
    fn test_new_pending_overrides_client_status() {
        let agreement = Agreement::new_pending(
            "lee@example.com".to_string(),
            Some(1200.0),
            doc! { "status": "approved", "apartmentNo": "A-301", "floor": 3 },
        );

        assert_eq!(agreement.status, AgreementStatus::Pending);
        assert_eq!(agreement.details, doc! { "apartmentNo": "A-301", "floor": 3 });
    }

    #[test]
    fn test_agreement_reads_integer_rent() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "userEmail": "lee@example.com",
            "status": "approved",
            "rent": 900,
            "checkedTime": 1717000000000.0_f64,
            "block": "B",
        };

        let agreement: Agreement = mongodb::bson::from_document(stored).unwrap();

        assert_eq!(agreement.rent, Some(900.0));
        assert_eq!(agreement.checked_time, Some(1_717_000_000_000));
        assert_eq!(agreement.details.get_str("block").unwrap(), "B");
    }

    #[test]
    fn test_agreement_without_user_email_still_reads() {
        let stored = doc! { "_id": ObjectId::new(), "status": "pending", "rent": 1000, "floor": 3 };

        let agreement: Agreement = mongodb::bson::from_document(stored).unwrap();

        assert_eq!(agreement.user_email, "");
        assert_eq!(agreement.status, AgreementStatus::Pending);
        assert_eq!(agreement.details, doc! { "floor": 3 });
    }
}
