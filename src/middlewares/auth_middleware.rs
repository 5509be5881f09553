//! # 선택적 API 가드 미들웨어
//!
//! 역할을 바꾸거나 결제를 일으키는 엔드포인트에 HS256 Bearer 토큰 검사를 적용합니다.
//!
//! | 생성자 | 요구 사항 | 적용 엔드포인트 |
//! |--------|-----------|-----------------|
//! | [`AuthMiddleware::admin`] | `role = admin` | `PATCH /members/{id}`, `PATCH /agreements/{id}[/reject]`, `POST /coupon`, `DELETE /coupon/{id}`, `POST /announcement` |
//! | [`AuthMiddleware::authenticated`] | 유효한 토큰 | `POST /create-payment-intent`, `POST /payment` |
//!
//! `JWT_SECRET` 이 설정되지 않으면 가드는 꺼지고 모든 요청을 그대로 통과시킵니다.
//! 기존 프론트엔드는 토큰 없이 호출하므로 기본값은 꺼짐이며, 시작 시 경고가 로그에 남습니다.
//!
//! ```rust,ignore
//! #[patch("/members/{id}", wrap = "AuthMiddleware::admin()")]
//! pub async fn demote_member(...) -> Result<HttpResponse, AppError> { ... }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::JwtConfig;
use crate::domain::models::auth::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

pub struct AuthMiddleware {
    /// `None` 이면 가드 꺼짐
    token_service: Option<TokenService>,
    required_role: RequiredRole,
}

impl AuthMiddleware {
    /// 명시적인 서명 키로 가드를 생성합니다.
    pub fn with_secret(secret: Option<String>, required_role: RequiredRole) -> Self {
        Self {
            token_service: secret.map(TokenService::new),
            required_role,
        }
    }

    /// 관리자 전용 가드 (`JWT_SECRET` 기준)
    pub fn admin() -> Self {
        Self::with_secret(JwtConfig::secret(), RequiredRole::admin())
    }

    /// 유효한 토큰이면 통과하는 가드 (`JWT_SECRET` 기준)
    pub fn authenticated() -> Self {
        Self::with_secret(JwtConfig::secret(), RequiredRole::AnyAuthenticated)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            token_service: self.token_service.clone(),
            required_role: self.required_role.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, web, App, HttpResponse};
    use crate::domain::entities::users::UserRole;
    use crate::domain::models::auth::OptionalUser;

    const SECRET: &str = "guard-test-secret";

    async fn whoami(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.email),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    fn token(role: UserRole) -> String {
        TokenService::new(SECRET).generate_access_token("caller@example.com", role, 1).unwrap()
    }

    #[test]
    fn test_required_role_admin() {
        let required = RequiredRole::admin();

        assert!(required.is_satisfied(UserRole::Admin));
        assert!(!required.is_satisfied(UserRole::Member));
        assert!(RequiredRole::AnyAuthenticated.is_satisfied(UserRole::User));
    }

    #[actix_web::test]
    async fn test_guard_disabled_passes_through() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/guarded")
                    .wrap(AuthMiddleware::with_secret(None, RequiredRole::admin()))
                    .route(web::post().to(whoami)),
            ),
        )
        .await;

        let req = actix_test::TestRequest::post().uri("/guarded").to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(actix_test::read_body(resp).await, "anonymous");
    }

    #[actix_web::test]
    async fn test_guard_enabled_checks_token_and_role() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/guarded")
                    .wrap(AuthMiddleware::with_secret(Some(SECRET.to_string()), RequiredRole::admin()))
                    .route(web::post().to(whoami)),
            ),
        )
        .await;

        let missing = actix_test::TestRequest::post().uri("/guarded").to_request();
        assert_eq!(actix_test::call_service(&app, missing).await.status(), 401);

        let member = actix_test::TestRequest::post()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token(UserRole::Member))))
            .to_request();
        assert_eq!(actix_test::call_service(&app, member).await.status(), 403);

        let admin = actix_test::TestRequest::post()
            .uri("/guarded")
            .insert_header(("Authorization", format!("Bearer {}", token(UserRole::Admin))))
            .to_request();
        let resp = actix_test::call_service(&app, admin).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(actix_test::read_body(resp).await, "caller@example.com");
    }
}
