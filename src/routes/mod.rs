//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 기존 클라이언트와의 호환을 위해 접두사 없이 루트 경로에 등록됩니다.
//! 관리자/인증 가드는 각 핸들러의 `wrap = "..."` 속성으로 적용되며,
//! `JWT_SECRET` 이 설정되지 않은 경우 통과합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .configure(|cfg| container.register(cfg))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::{error, web, HttpResponse, ResponseError};

/// 모든 라우트를 설정합니다
///
/// 요청 본문, 쿼리, 경로 추출 실패는 `AppError::ValidationError` (400) 로 변환합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_apartment_routes(cfg);
    configure_user_routes(cfg);
    configure_agreement_routes(cfg);
    configure_payment_routes(cfg);
    configure_admin_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, AppError::ValidationError(message).error_response()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, AppError::ValidationError(message).error_response()).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, AppError::ValidationError(message).error_response()).into()
    })
}

fn configure_apartment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::apartments::list_apartments)
        .service(handlers::apartments::list_paginated)
        .service(handlers::apartments::count_apartments);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::upsert_user)
        .service(handlers::users::get_user)
        .service(handlers::users::list_users)
        .service(handlers::users::list_members);
}

/// 계약 라우트
///
/// `/agreements/{id}/reject` 가 `/agreements/{id}` 보다 구체적이지만 메서드가 같으므로
/// 세그먼트 수로 구분됩니다.
fn configure_agreement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::agreements::create_agreement)
        .service(handlers::agreements::list_agreements)
        .service(handlers::agreements::get_agreement)
        .service(handlers::agreements::approve_agreement)
        .service(handlers::agreements::reject_agreement);
}

fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::payments::create_payment_intent)
        .service(handlers::payments::record_payment);
}

fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::admin::demote_member)
        .service(handlers::admin::create_coupon)
        .service(handlers::admin::list_coupons)
        .service(handlers::admin::delete_coupon)
        .service(handlers::admin::create_announcement)
        .service(handlers::admin::list_announcements);
}

/// 서비스 상태 확인
///
/// ```bash
/// curl http://localhost:5000/
/// ```
#[actix_web::get("/")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("cloud-mbs is running")
}
