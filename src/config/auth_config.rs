//! # API Guard Configuration
//!
//! 관리자/결제 엔드포인트를 보호하는 선택적 JWT 가드 설정입니다.
//!
//! 원래 서비스는 모든 엔드포인트가 인증 없이 열려 있습니다. 이 모듈은 그 계약을
//! 기본값으로 유지하되, `JWT_SECRET` 이 설정된 배포에서는 역할 변경 및 결제
//! 엔드포인트에 Bearer 토큰 검증을 켤 수 있게 합니다.
//!
//! ```bash
//! # 가드 활성화 (HS256 공유 비밀키)
//! export JWT_SECRET="$(openssl rand -base64 32)"
//! ```

use std::env;

/// JWT 가드 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명 검증에 사용할 비밀키를 반환합니다.
    ///
    /// 설정되지 않았거나 빈 문자열이면 `None` 이며, 이 경우 가드는 비활성화됩니다.
    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// 가드 활성화 여부
    pub fn guard_enabled() -> bool {
        Self::secret().is_some()
    }
}
