use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// `POST /agreement` 요청 본문
///
/// 아파트 번호, 층, 동, 사용자 이름 등 나머지 필드는 `details` 로 받아 그대로 저장됩니다.
/// 본문의 `status` 는 무시되고 항상 `pending` 으로 저장됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAgreementRequest {
    #[serde(rename = "userEmail")]
    #[validate(email(message = "유효한 userEmail 을 입력해주세요"))]
    pub user_email: String,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "rent 는 0 이상이어야 합니다"))]
    pub rent: Option<f64>,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// `PATCH /agreements/{id}` 요청 본문 (선택)
///
/// 저장된 계약에 `userEmail` 이 없는 이전 데이터에서만 사용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApproveAgreementRequest {
    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,
}
