//! 아파트 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 Stripe 클라이언트를 만들어 서비스 컨테이너에 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use apartment_service_backend::config::{
    CorsConfig, DatabaseConfig, Environment, JwtConfig, RateLimitConfig, ServerConfig,
};
use apartment_service_backend::core::ServiceContainer;
use apartment_service_backend::db::Database;
use apartment_service_backend::routes::configure_all_routes;
use apartment_service_backend::services::StripeClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 아파트 관리 서비스 시작중... ({:?})", Environment::current());

    let database = Arc::new(initialize_database().await);

    if let Err(e) = database.ensure_indexes().await {
        warn!("인덱스 생성 실패, 기존 데이터에 중복이 있는지 확인하세요: {}", e);
    }

    if !JwtConfig::guard_enabled() {
        warn!("⚠️ JWT_SECRET 이 설정되지 않아 관리자/인증 가드가 비활성화됩니다");
    }

    let container = ServiceContainer::from_database(
        database.clone(),
        Arc::new(StripeClient::from_env()),
    );

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let result = start_http_server(container).await;

    Arc::unwrap_or_clone(database).shutdown().await;
    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(container: ServiceContainer) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Rate Limiting 설정이 올바르지 않습니다 (0 값은 허용되지 않음)",
        ))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);
        let container = container.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .configure(move |cfg| container.register(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=apartment_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 에 연결합니다. 실패하면 프로세스를 종료합니다.
async fn initialize_database() -> Database {
    info!("📡 데이터베이스 연결 중...");

    let uri = DatabaseConfig::uri();
    let name = DatabaseConfig::database_name();

    match Database::connect(&uri, &name).await {
        Ok(database) => database,
        Err(e) => {
            error!("❌ MongoDB 연결 실패: {}", e);
            std::process::exit(1);
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin 은 `CORS_ALLOWED_ORIGINS` (쉼표 구분) 에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
