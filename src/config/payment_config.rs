//! Stripe 결제 설정
//!
//! 결제 의도(PaymentIntent) 생성에 필요한 비밀키와 API 주소를 관리합니다.
//!
//! ```bash
//! export STRIPE_SECRET_KEY="sk_test_..."
//! # 테스트용 목 서버를 쓸 때만
//! export STRIPE_API_BASE="http://localhost:12111"
//! ```

use std::env;

/// Stripe API 설정
pub struct StripeConfig;

impl StripeConfig {
    /// 기본 Stripe API 주소
    pub const DEFAULT_API_BASE: &'static str = "https://api.stripe.com";

    /// 결제 통화 (고정)
    pub const CURRENCY: &'static str = "usd";

    /// Stripe 비밀키를 반환합니다.
    ///
    /// 설정되지 않은 경우 빈 문자열을 반환하고 경고를 남깁니다.
    /// 이 상태에서 결제 의도를 만들면 Stripe 가 401 로 거절하며,
    /// 그 응답은 `ExternalServiceError` 로 전달됩니다.
    pub fn secret_key() -> String {
        env::var("STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("STRIPE_SECRET_KEY not set, payment intents will be rejected by Stripe");
            String::new()
        })
    }

    /// Stripe API 주소 (`STRIPE_API_BASE`, 기본값: https://api.stripe.com)
    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| Self::DEFAULT_API_BASE.to_string())
    }
}
