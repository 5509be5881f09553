//! # 결제 서비스 구현
//!
//! ## 결제 인텐트
//!
//! `price`(달러) 를 `round(price * 100)` 센트로 바꿔 USD 카드 결제 인텐트를 생성합니다.
//!
//! ## 결제 기록 사가
//!
//! ```text
//! (1) payments.insert ──ok──▶ (2) agreements.rent = 0 ──ok──▶ 200 { payment, agreement }
//!                                      │
//!                                     err
//!                                      ▼
//!                          (보상) payments.delete(1 의 _id) ──▶ 에러 응답
//! ```
//!
//! (2) 가 실패하면 (1) 에서 저장한 결제만 지우고 요청을 실패로 돌려줍니다.
//! 보상 삭제까지 실패하면 결제 ID 를 에러 로그로 남깁니다.

use std::sync::Arc;

use crate::{
    config::StripeConfig,
    domain::{
        dto::{
            payments::{ClientSecretResponse, RecordPaymentRequest, RecordPaymentResponse},
            InsertResponse,
        },
        entities::payments::Payment,
    },
    errors::AppError,
    repositories::{AgreementRepository, PaymentRepository},
    services::payments::PaymentGateway,
    utils::{bson_json::{entity_to_json, json_to_document}, string_utils::validate_required_string},
};

/// 달러 금액을 센트 단위로 변환합니다.
///
/// 유한한 양수만 허용되며, 반올림 결과가 0 센트면 거절됩니다.
pub fn to_minor_units(price: f64) -> Result<i64, AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::ValidationError("price 는 0 보다 큰 숫자여야 합니다".to_string()));
    }

    let cents = (price * 100.0).round();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(AppError::ValidationError(format!("처리할 수 없는 금액입니다: {}", price)));
    }

    Ok(cents as i64)
}

/// 결제 비즈니스 로직 서비스
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    payment_repo: Arc<dyn PaymentRepository>,
    agreement_repo: Arc<dyn AgreementRepository>,
}

impl PaymentService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        payment_repo: Arc<dyn PaymentRepository>,
        agreement_repo: Arc<dyn AgreementRepository>,
    ) -> Self {
        Self { gateway, payment_repo, agreement_repo }
    }

    /// 결제 인텐트를 생성하고 `clientSecret` 을 반환합니다.
    pub async fn create_payment_intent(&self, price: f64) -> Result<ClientSecretResponse, AppError> {
        let amount = to_minor_units(price)?;
        let intent = self.gateway.create_payment_intent(amount, StripeConfig::CURRENCY).await?;

        log::info!("결제 인텐트 생성: {} ({} cents)", intent.id, amount);
        Ok(ClientSecretResponse { client_secret: intent.client_secret })
    }

    /// 결제를 기록하고 해당 이메일 계약의 월세를 0 으로 초기화합니다.
    pub async fn record_payment(&self, request: RecordPaymentRequest) -> Result<RecordPaymentResponse, AppError> {
        let email = validate_required_string(&request.email, "email")?;
        if !request.price.is_finite() || request.price < 0.0 {
            return Err(AppError::ValidationError("price 는 0 이상이어야 합니다".to_string()));
        }

        let details = json_to_document(request.details)?;
        let payment = Payment::new(email.clone(), request.price, request.transaction_id, details);

        let payment_id = self.payment_repo.insert(payment).await?;

        let agreement = match self.agreement_repo.reset_rent(&email).await {
            Ok(agreement) => agreement,
            Err(e) => {
                log::warn!("월세 초기화 실패, 결제 기록 취소: {} ({})", email, payment_id);
                if let Err(undo) = self.payment_repo.delete_by_id(&payment_id).await {
                    log::error!("결제 기록 보상 삭제 실패: {} ({})", payment_id, undo);
                }
                return Err(e);
            }
        };

        if agreement.is_none() {
            log::warn!("결제 이메일과 일치하는 계약이 없습니다: {}", email);
        }

        log::info!("결제 기록: {} ({})", email, payment_id);
        Ok(RecordPaymentResponse {
            payment: InsertResponse::from(payment_id),
            agreement: agreement.as_ref().map(entity_to_json).transpose()?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use mongodb::bson::doc;
    use serde_json::json;
    use crate::domain::entities::agreements::Agreement;
    use crate::repositories::memory::{MemoryAgreementRepository, MemoryPaymentRepository};
    use crate::services::payments::PaymentIntent;

    /// 요청된 금액을 기록하는 가짜 게이트웨이
    #[derive(Default)]
    pub(crate) struct FakeGateway {
        pub amounts: Mutex<Vec<(i64, String)>>,
        pub fail: bool,
    }

    #[async_trait]
    impl PaymentGateway for FakeGateway {
        async fn create_payment_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, AppError> {
            if self.fail {
                return Err(AppError::ExternalServiceError("card_declined".to_string()));
            }
            self.amounts.lock().unwrap().push((amount, currency.to_string()));
            Ok(PaymentIntent {
                id: "pi_test".to_string(),
                client_secret: format!("pi_test_secret_{}", amount),
            })
        }
    }

    struct Fixture {
        gateway: Arc<FakeGateway>,
        payments: Arc<MemoryPaymentRepository>,
        agreements: Arc<MemoryAgreementRepository>,
        service: PaymentService,
    }

    fn fixture() -> Fixture {
        let gateway = Arc::new(FakeGateway::default());
        let payments = Arc::new(MemoryPaymentRepository::default());
        let agreements = Arc::new(MemoryAgreementRepository::with_agreements(vec![
            Agreement::new_pending("lee@example.com".to_string(), Some(1200.0), doc! {}),
        ]));
        let service = PaymentService::new(gateway.clone(), payments.clone(), agreements.clone());
        Fixture { gateway, payments, agreements, service }
    }

    fn record_request(email: &str, price: f64) -> RecordPaymentRequest {
        serde_json::from_value(json!({ "email": email, "price": price, "transactionId": "pi_1", "month": "June" }))
            .unwrap()
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(10.0).unwrap(), 1000);
        assert_eq!(to_minor_units(19.999).unwrap(), 2000);
        assert_eq!(to_minor_units(0.01).unwrap(), 1);
        assert!(to_minor_units(0.0).is_err());
        assert!(to_minor_units(-3.0).is_err());
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(0.001).is_err());
    }

    #[actix_web::test]
    async fn test_create_payment_intent_uses_cents_and_usd() {
        let f = fixture();

        let response = f.service.create_payment_intent(12.34).await.unwrap();

        assert_eq!(response.client_secret, "pi_test_secret_1234");
        assert_eq!(f.gateway.amounts.lock().unwrap().as_slice(), &[(1234, "usd".to_string())]);
    }

    #[actix_web::test]
    async fn test_gateway_failure_propagates() {
        let service = PaymentService::new(
            Arc::new(FakeGateway { fail: true, ..Default::default() }),
            Arc::new(MemoryPaymentRepository::default()),
            Arc::new(MemoryAgreementRepository::default()),
        );

        let result = service.create_payment_intent(5.0).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[actix_web::test]
    async fn test_record_payment_resets_rent() {
        let f = fixture();

        let response = f.service.record_payment(record_request("lee@example.com", 1200.0)).await.unwrap();

        assert_eq!(f.payments.snapshot().len(), 1);
        assert_eq!(f.payments.snapshot()[0].details.get_str("month").unwrap(), "June");
        assert_eq!(f.agreements.snapshot()[0].rent, Some(0.0));
        let agreement = response.agreement.unwrap();
        assert_eq!(agreement["rent"], json!(0.0));
        assert_eq!(response.payment.inserted_id, f.payments.snapshot()[0].id.unwrap().to_hex());
    }

    #[actix_web::test]
    async fn test_record_payment_without_agreement() {
        let f = fixture();

        let response = f.service.record_payment(record_request("kim@example.com", 50.0)).await.unwrap();

        assert!(response.agreement.is_none());
        assert_eq!(f.payments.snapshot().len(), 1);
    }

    #[actix_web::test]
    async fn test_record_payment_compensates_on_rent_reset_failure() {
        let f = fixture();
        f.agreements.fail_rent_reset(true);

        let result = f.service.record_payment(record_request("lee@example.com", 1200.0)).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(f.payments.snapshot().is_empty());
        assert_eq!(f.agreements.snapshot()[0].rent, Some(1200.0));
    }
}
