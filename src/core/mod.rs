//! # Core Module
//!
//! 애플리케이션 조립을 담당하는 모듈입니다.
//!
//! ### [`container`] - 서비스 컨테이너
//! - `main` 에서 데이터베이스 연결과 결제 게이트웨이로 한 번 생성
//! - 모든 서비스를 `web::Data` 로 보관하고 `App` 에 등록
//! - 전역 상태나 지연 초기화 없이 명시적으로 주입
//!
//! ```rust,ignore
//! let container = ServiceContainer::from_database(database.clone(), Arc::new(StripeClient::from_env()));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| container.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod container;

pub use container::*;
