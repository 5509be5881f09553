//! # Stripe 결제 인텐트 클라이언트
//!
//! Stripe 의 `POST /v1/payment_intents` 를 호출하여 클라이언트가 카드 결제를 완료할 때
//! 사용하는 `client_secret` 을 받아옵니다.
//!
//! ```text
//! POST {STRIPE_API_BASE}/v1/payment_intents
//! Authorization: Bearer {STRIPE_SECRET_KEY}
//! Content-Type: application/x-www-form-urlencoded
//!
//! amount=108050&currency=usd&payment_method_types[]=card
//! ```
//!
//! 서비스는 [`PaymentGateway`] 트레이트에만 의존하므로 테스트에서는 가짜 게이트웨이를 사용합니다.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{config::StripeConfig, errors::AppError};

/// 생성된 결제 인텐트
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Stripe 에러 응답 (`{"error": {"message": "..."}}`)
#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// 결제 인텐트 생성 트레이트
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// `amount` 는 최소 통화 단위(센트)입니다.
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, AppError>;
}

/// reqwest 기반 Stripe 클라이언트
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// 환경변수(`STRIPE_SECRET_KEY`, `STRIPE_API_BASE`)로 클라이언트를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(StripeConfig::secret_key(), StripeConfig::api_base())
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base)
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, AppError> {
        let amount = amount.to_string();
        let params = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self.http
            .post(self.endpoint())
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StripeErrorBody>(&error_text)
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or(error_text);

            log::error!("Stripe 결제 인텐트 생성 실패 ({}): {}", status, message);
            return Err(AppError::ExternalServiceError(format!(
                "결제 인텐트 생성 실패: {}", message
            )));
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = StripeClient::new("sk_test_123".to_string(), "http://localhost:12111/".to_string());
        assert_eq!(client.endpoint(), "http://localhost:12111/v1/payment_intents");
    }

    #[test]
    fn test_intent_parses_from_stripe_response() {
        let intent: PaymentIntent = serde_json::from_str(
            r#"{"id":"pi_1","object":"payment_intent","amount":1000,"client_secret":"pi_1_secret_x"}"#,
        )
        .unwrap();

        assert_eq!(intent.client_secret, "pi_1_secret_x");
    }

    #[test]
    fn test_error_body_message() {
        let body: StripeErrorBody =
            serde_json::from_str(r#"{"error":{"type":"invalid_request_error","message":"Invalid API Key"}}"#).unwrap();
        assert_eq!(body.error.message.as_deref(), Some("Invalid API Key"));
    }
}
