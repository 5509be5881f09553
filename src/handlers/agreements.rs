//! # Agreement HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 가드 |
//! |--------|------|------|------|
//! | `POST` | `/agreement` | 계약 생성 (중복이면 409) | - |
//! | `GET` | `/agreements` | 전체 계약 | - |
//! | `GET` | `/agreements/{email}` | 이메일로 계약 조회 | - |
//! | `PATCH` | `/agreements/{id}` | 승인 + 계약자 `member` 승격 | admin |
//! | `PATCH` | `/agreements/{id}/reject` | 거절 | admin |

use actix_web::{get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::{
    domain::dto::{
        agreements::{ApproveAgreementRequest, CreateAgreementRequest},
        InsertResponse,
    },
    errors::AppError,
    middlewares::AuthMiddleware,
    services::AgreementService,
    utils::bson_json::{entities_to_json, entity_to_json},
};

#[post("/agreement")]
pub async fn create_agreement(
    service: web::Data<AgreementService>,
    payload: web::Json<CreateAgreementRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let id = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(InsertResponse::from(id)))
}

#[get("/agreements")]
pub async fn list_agreements(
    service: web::Data<AgreementService>,
) -> Result<HttpResponse, AppError> {
    let agreements = service.list_all().await?;

    Ok(HttpResponse::Ok().json(entities_to_json(&agreements)?))
}

#[get("/agreements/{email}")]
pub async fn get_agreement(
    service: web::Data<AgreementService>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let agreement = service.get_by_email(&email).await?;

    Ok(HttpResponse::Ok().json(entity_to_json(&agreement)?))
}

/// 계약 승인
///
/// 본문(`{"userEmail": ...}`)은 선택이며, 저장된 계약에 이메일이 없는 경우에만 사용됩니다.
#[patch("/agreements/{id}", wrap = "AuthMiddleware::admin()")]
pub async fn approve_agreement(
    service: web::Data<AgreementService>,
    id: web::Path<String>,
    payload: Option<web::Json<ApproveAgreementRequest>>,
) -> Result<HttpResponse, AppError> {
    let fallback_email = payload.and_then(|p| p.into_inner().user_email);
    let agreement = service.approve(&id, fallback_email).await?;

    Ok(HttpResponse::Ok().json(entity_to_json(&agreement)?))
}

#[patch("/agreements/{id}/reject", wrap = "AuthMiddleware::admin()")]
pub async fn reject_agreement(
    service: web::Data<AgreementService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let agreement = service.reject(&id).await?;

    Ok(HttpResponse::Ok().json(entity_to_json(&agreement)?))
}
