use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// `POST /create-payment-intent` 요청 본문
///
/// 금액 검증(유한한 양수)은 서비스에서 수행합니다.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaymentIntentRequest {
    pub price: f64,
}

/// `POST /payment` 요청 본문
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(range(min = 0.0, message = "price 는 0 이상이어야 합니다"))]
    pub price: f64,

    #[serde(rename = "transactionId", default)]
    pub transaction_id: Option<String>,

    /// 납부 월, 쿠폰 코드 등
    #[serde(flatten)]
    pub details: Map<String, Value>,
}
