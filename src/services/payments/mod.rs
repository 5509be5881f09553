//! 결제 서비스 모듈
//!
//! - [`payment_gateway`] - Stripe 결제 인텐트 클라이언트
//! - [`payment_service`] - 인텐트 생성, 결제 기록 사가

pub mod payment_gateway;
pub mod payment_service;

pub use payment_gateway::*;
pub use payment_service::*;
