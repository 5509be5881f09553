use serde::Serialize;
use serde_json::Value;

use crate::domain::dto::common::InsertResponse;

/// 결제 인텐트 생성 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSecretResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// 결제 기록 응답
///
/// `agreement` 는 월세가 0 으로 초기화된 계약이며, 해당 이메일의 계약이 없으면 `null` 입니다.
#[derive(Debug, Clone, Serialize)]
pub struct RecordPaymentResponse {
    pub payment: InsertResponse,
    pub agreement: Option<Value>,
}
