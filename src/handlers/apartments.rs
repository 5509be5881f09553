//! # Apartment HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/apartments` | 전체 아파트 (`_id` 순) |
//! | `GET` | `/all-apartments?page&size` | 페이지 목록 |
//! | `GET` | `/apartments-count` | `{ "count": n }` |

use actix_web::{get, web, HttpResponse};

use crate::{
    domain::dto::apartments::PaginationQuery,
    errors::AppError,
    services::ApartmentService,
    utils::bson_json::documents_to_json,
};

#[get("/apartments")]
pub async fn list_apartments(
    service: web::Data<ApartmentService>,
) -> Result<HttpResponse, AppError> {
    let apartments = service.list_all().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(apartments)))
}

/// 페이지 목록 조회
///
/// ```bash
/// curl "http://localhost:5000/all-apartments?page=2&size=6"
/// ```
#[get("/all-apartments")]
pub async fn list_paginated(
    service: web::Data<ApartmentService>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    let apartments = service.list_paginated(&query).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(apartments)))
}

#[get("/apartments-count")]
pub async fn count_apartments(
    service: web::Data<ApartmentService>,
) -> Result<HttpResponse, AppError> {
    let count = service.count().await?;
    Ok(HttpResponse::Ok().json(count))
}
