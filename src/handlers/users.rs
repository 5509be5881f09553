//! # User HTTP Handlers
//!
//! 사용자 등록(upsert)과 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `PUT` | `/user` | 처음 보는 이메일이면 저장, 아니면 기존 문서 반환 | 200 OK |
//! | `GET` | `/user/{email}` | 이메일로 조회 | 200 / 404 |
//! | `GET` | `/users` | 전체 사용자 | 200 OK |
//! | `GET` | `/members?role=&email=` | 허용된 필터로 조회 | 200 / 400 |
//!
//! `/members` 는 `role`, `email` 외의 쿼리 파라미터를 400 으로 거절합니다.
//! 클라이언트가 임의 필드나 연산자로 사용자 컬렉션을 조회할 수 없게 하기 위함입니다.
//!
//! ```bash
//! curl -X PUT http://localhost:5000/user \
//!   -H "Content-Type: application/json" \
//!   -d '{"email":"kim@example.com","name":"Kim","photo":"https://..."}'
//!
//! curl "http://localhost:5000/members?role=member"
//! ```

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::{
    domain::dto::users::{MemberQuery, UpsertUserRequest},
    errors::AppError,
    services::UserService,
    utils::bson_json::{entities_to_json, entity_to_json},
};

#[put("/user")]
pub async fn upsert_user(
    service: web::Data<UserService>,
    payload: web::Json<UpsertUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = service.upsert_if_absent(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(entity_to_json(&user)?))
}

#[get("/user/{email}")]
pub async fn get_user(
    service: web::Data<UserService>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_by_email(&email).await?;

    Ok(HttpResponse::Ok().json(entity_to_json(&user)?))
}

#[get("/users")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_all().await?;

    Ok(HttpResponse::Ok().json(entities_to_json(&users)?))
}

#[get("/members")]
pub async fn list_members(
    service: web::Data<UserService>,
    query: web::Query<MemberQuery>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_filtered(&query).await?;

    Ok(HttpResponse::Ok().json(entities_to_json(&users)?))
}
