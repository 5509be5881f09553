//! JWT 토큰 검증 서비스 구현
//!
//! 관리자/결제 엔드포인트 가드가 사용하는 HS256 토큰을 검증합니다.
//! 토큰은 외부 인증 시스템(또는 운영자)이 같은 `JWT_SECRET` 으로 발급합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    domain::{entities::users::UserRole, models::auth::TokenClaims},
    errors::AppError,
};

/// JWT 토큰 서비스
///
/// HMAC-SHA256 서명 키 하나로 토큰을 검증하고, 운영/테스트용 토큰을 발급합니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }

    /// 액세스 토큰 발급
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::new(secret).generate_access_token("admin@example.com", UserRole::Admin, 1)?;
    /// ```
    pub fn generate_access_token(&self, email: &str, role: UserRole, ttl_hours: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: email.to_string(),
            role,
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
            iat: Some(now.timestamp()),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AuthenticationError` - 만료, 서명 불일치, 형식 오류
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                },
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    /// `Authorization` 헤더에서 Bearer 토큰 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_verify() {
        let service = TokenService::new("test-secret");
        let token = service.generate_access_token("admin@example.com", UserRole::Admin, 1).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, UserRole::Admin);
    }

    #[test]
    fn test_wrong_secret_and_expired_tokens_rejected() {
        let token = TokenService::new("other").generate_access_token("a@b.c", UserRole::Admin, 1).unwrap();
        assert!(matches!(
            TokenService::new("test-secret").verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));

        let service = TokenService::new("test-secret");
        let expired = service.generate_access_token("a@b.c", UserRole::Admin, -2).unwrap();
        assert!(matches!(service.verify_token(&expired), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::new("s");

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
    }
}
