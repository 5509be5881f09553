//! # Payment HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/create-payment-intent` | `{price}` → `{clientSecret}` |
//! | `POST` | `/payment` | 결제 기록 + 계약 월세 0 초기화 |
//!
//! 가드가 켜져 있으면 두 엔드포인트 모두 유효한 토큰이 필요합니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    domain::dto::payments::{PaymentIntentRequest, RecordPaymentRequest},
    errors::AppError,
    middlewares::AuthMiddleware,
    services::PaymentService,
};

#[post("/create-payment-intent", wrap = "AuthMiddleware::authenticated()")]
pub async fn create_payment_intent(
    service: web::Data<PaymentService>,
    payload: web::Json<PaymentIntentRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_payment_intent(payload.price).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/payment", wrap = "AuthMiddleware::authenticated()")]
pub async fn record_payment(
    service: web::Data<PaymentService>,
    payload: web::Json<RecordPaymentRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.record_payment(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
