//! # Admin HTTP Handlers
//!
//! 관리자 화면이 사용하는 멤버 강등, 쿠폰, 공지사항 엔드포인트입니다.
//! 쓰기 엔드포인트는 가드가 켜져 있으면 `admin` 역할이 필요합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `PATCH` | `/members/{id}` | 멤버 → 일반 사용자 |
//! | `POST` | `/coupon` | 쿠폰 생성 |
//! | `GET` | `/coupons` | 전체 쿠폰 |
//! | `DELETE` | `/coupon/{id}` | 쿠폰 삭제 |
//! | `POST` | `/announcement` | 공지 등록 |
//! | `GET` | `/announcements` | 전체 공지 |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde_json::{Map, Value};

use crate::{
    domain::dto::InsertResponse,
    errors::AppError,
    middlewares::AuthMiddleware,
    services::{AnnouncementService, CouponService, UserService},
    utils::bson_json::documents_to_json,
};

#[patch("/members/{id}", wrap = "AuthMiddleware::admin()")]
pub async fn demote_member(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = service.demote_member(&id).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[post("/coupon", wrap = "AuthMiddleware::admin()")]
pub async fn create_coupon(
    service: web::Data<CouponService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let id = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(InsertResponse::from(id)))
}

#[get("/coupons")]
pub async fn list_coupons(
    service: web::Data<CouponService>,
) -> Result<HttpResponse, AppError> {
    let coupons = service.list_all().await?;

    Ok(HttpResponse::Ok().json(documents_to_json(coupons)))
}

#[delete("/coupon/{id}", wrap = "AuthMiddleware::admin()")]
pub async fn delete_coupon(
    service: web::Data<CouponService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = service.delete_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[post("/announcement", wrap = "AuthMiddleware::admin()")]
pub async fn create_announcement(
    service: web::Data<AnnouncementService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, AppError> {
    let id = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(InsertResponse::from(id)))
}

#[get("/announcements")]
pub async fn list_announcements(
    service: web::Data<AnnouncementService>,
) -> Result<HttpResponse, AppError> {
    let announcements = service.list_all().await?;

    Ok(HttpResponse::Ok().json(documents_to_json(announcements)))
}
