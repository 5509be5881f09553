//! 아파트 관리 서비스 백엔드
//!
//! 아파트 목록, 입주 계약, 월세 결제, 쿠폰과 공지사항을 관리하는 REST API 입니다.
//!
//! # Features
//!
//! - **아파트**: 전체/페이지 목록, 개수 조회
//! - **사용자**: 이메일 기준 최초 1회 저장, 역할(`user`/`member`/`admin`) 필터 조회
//! - **계약**: 사용자당 하나, 관리자 승인 시 `member` 로 승격
//! - **결제**: Stripe 결제 인텐트 생성, 결제 기록 후 월세 초기화
//! - **관리자**: 멤버 강등, 쿠폰, 공지사항
//!
//! # Architecture
//!
//! ```text
//! HTTP ─▶ routes (CORS, rate limit, AuthMiddleware)
//!           └▶ handlers ─▶ services ─┬▶ repositories ─▶ MongoDB (cloudDB)
//!                                    └▶ PaymentGateway ─▶ Stripe API
//! ```
//!
//! 서비스와 리포지토리는 `core::ServiceContainer` 가 한 번 만들어 `web::Data` 로 공유합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use apartment_service_backend::core::ServiceContainer;
//! use apartment_service_backend::services::StripeClient;
//!
//! let container = ServiceContainer::from_database(database, Arc::new(StripeClient::from_env()));
//! let user = container.user_service.get_by_email("kim@example.com").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
