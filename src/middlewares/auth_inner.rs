use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{AuthenticatedUser, RequiredRole};
use crate::errors::AppError;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Option<TokenService>,
    pub required_role: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            // 가드 꺼짐
            let Some(token_service) = token_service else {
                let res = service.call(req).await?;
                return Ok(res.map_into_left_body());
            };

            let user = match authenticate(&req, &token_service) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    return Ok(reject(req, err));
                }
            };

            if !required_role.is_satisfied(user.role) {
                log::warn!("권한 부족: {} ({}), 필요 권한: {:?}", user.email, user.role, required_role);
                let err = AppError::AuthorizationError("접근 권한이 부족합니다".to_string());
                return Ok(reject(req, err));
            }

            log::debug!("인증 성공: {} ({})", user.email, user.role);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청을 핸들러로 넘기지 않고 에러 응답으로 종료합니다.
fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, err.error_response()).map_into_right_body()
}

fn authenticate(req: &ServiceRequest, token_service: &TokenService) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_token(token)?;

    Ok(AuthenticatedUser {
        email: claims.sub,
        role: claims.role,
    })
}
