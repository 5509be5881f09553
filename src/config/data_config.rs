//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버 바인딩, CORS, Rate Limiting 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production` 입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 5000)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// actix 워커 스레드 수 (`SERVER_WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .filter(|w: &usize| *w > 0)
            .unwrap_or(4)
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 기본 데이터베이스 이름
    pub const DEFAULT_DATABASE_NAME: &'static str = "cloudDB";

    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// `MONGODB_URI` 가 있으면 그대로 사용하고, 없으면 Atlas 자격 증명
    /// (`DB_USER`, `DB_PASS`, `DB_CLUSTER`) 으로 URI 를 조립합니다.
    /// 둘 다 없으면 로컬 MongoDB 를 사용합니다.
    pub fn uri() -> String {
        if let Ok(uri) = env::var("MONGODB_URI") {
            return uri;
        }

        match (env::var("DB_USER"), env::var("DB_PASS")) {
            (Ok(user), Ok(pass)) => {
                let cluster = env::var("DB_CLUSTER")
                    .unwrap_or_else(|_| "cluster0.ctz3uz9.mongodb.net".to_string());
                Self::atlas_uri(&user, &pass, &cluster)
            }
            _ => "mongodb://localhost:27017".to_string(),
        }
    }

    /// Atlas SRV 연결 문자열을 조립합니다.
    pub fn atlas_uri(user: &str, pass: &str, cluster: &str) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
            user, pass, cluster
        )
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME`, 기본값: "cloudDB")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| Self::DEFAULT_DATABASE_NAME.to_string())
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 프론트엔드 배포 주소들 (기본 허용 목록)
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:5173",
        "https://could-mbs.web.app",
        "https://cloud-bms.vercel.app",
        "https://cloud-bms.netlify.app",
    ];

    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    /// - 유효한 항목이 하나도 없으면 기본 목록을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        let origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| Self::parse_origins(&raw))
            .unwrap_or_default();

        if origins.is_empty() {
            return Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect();
        }
        origins
    }

    /// 쉼표로 구분된 Origin 목록을 파싱합니다. 빈 항목과 끝의 `/` 는 제거됩니다.
    ///
    /// `actix-cors` 는 `*` 를 개별 Origin 으로 받지 않으므로 와일드카드 항목은 버립니다.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|o| o.trim().trim_end_matches('/'))
            .filter(|o| !o.is_empty())
            .filter(|o| {
                if o.contains('*') {
                    log::error!("CORS_ALLOWED_ORIGINS 의 와일드카드 항목은 무시됩니다: {}", o);
                    return false;
                }
                true
            })
            .map(|o| o.to_string())
            .collect()
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
