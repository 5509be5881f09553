use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserRole;

/// 엔드포인트가 요구하는 역할
#[derive(Debug, Clone, PartialEq)]
pub enum RequiredRole {
    /// 유효한 토큰이면 역할과 무관하게 허용 (결제 엔드포인트)
    AnyAuthenticated,
    /// 나열된 역할 중 하나가 있으면 허용 (OR 조건)
    Any(Vec<UserRole>),
}

impl RequiredRole {
    /// 관리자 전용
    pub fn admin() -> Self {
        RequiredRole::Any(vec![UserRole::Admin])
    }

    /// 호출자 역할이 요구사항을 만족하는지 확인
    pub fn is_satisfied(&self, role: UserRole) -> bool {
        match self {
            RequiredRole::AnyAuthenticated => true,
            RequiredRole::Any(roles) => roles.contains(&role),
        }
    }
}

/// 가드가 검증하는 JWT 클레임 (HS256)
///
/// - `sub`: 호출자 이메일
/// - `role`: 호출자 역할
/// - `exp`: 만료 시각 (Unix timestamp, 초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: UserRole,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}
