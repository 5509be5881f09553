//! # Configuration Module
//!
//! 아파트 관리 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, MongoDB, CORS, Rate Limiting 설정
//! - [`payment_config`] - Stripe 결제 설정
//! - [`auth_config`] - 선택적 JWT 가드 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # MongoDB (둘 중 하나)
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DB_USER="cloud" DB_PASS="..." DB_CLUSTER="cluster0.xxxx.mongodb.net"
//! export DATABASE_NAME="cloudDB"
//!
//! # Stripe
//! export STRIPE_SECRET_KEY="sk_test_..."
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://cloud-bms.vercel.app"
//! ```

pub mod data_config;
pub mod payment_config;
pub mod auth_config;

pub use data_config::*;
pub use payment_config::*;
pub use auth_config::*;
