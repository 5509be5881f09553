//! Payment Entity Implementation
//!
//! Stripe 결제가 끝난 뒤 클라이언트가 기록하는 월세 납부 내역입니다.

use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::domain::entities::strip_reserved;

/// 월세 납부 기록
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 납부자 이메일 (계약의 `userEmail` 과 매칭)
    pub email: String,
    /// 납부 금액 (USD)
    pub price: f64,
    /// Stripe 트랜잭션 ID
    #[serde(rename = "transactionId", default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// 납부 월, 쿠폰 코드 등 나머지 필드
    #[serde(flatten)]
    pub details: Document,
}

impl Payment {
    pub fn new(email: String, price: f64, transaction_id: Option<String>, details: Document) -> Self {
        Self {
            id: None,
            email,
            price,
            transaction_id,
            details: strip_reserved(details, &["_id", "email", "price", "transactionId"]),
        }
    }
}
