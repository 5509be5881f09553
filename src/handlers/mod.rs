//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 파싱과 응답 직렬화만 담당하고, 비즈니스 로직은 `web::Data` 로
//! 주입된 서비스에 위임합니다.
//!
//! ```text
//! Client ──HTTP──▶ Handlers ──▶ Services ──▶ Repositories ──▶ MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! | 모듈 | 엔드포인트 |
//! |------|-----------|
//! | [`apartments`] | `/apartments`, `/all-apartments`, `/apartments-count` |
//! | [`users`] | `/user`, `/user/{email}`, `/users`, `/members` |
//! | [`agreements`] | `/agreement`, `/agreements/...` |
//! | [`payments`] | `/create-payment-intent`, `/payment` |
//! | [`admin`] | `/members/{id}`, `/coupon(s)`, `/announcement(s)` |
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>` 를 반환하며, `AppError` 의
//! `ResponseError` 구현이 `{"error": "..."}` 본문과 상태 코드를 만듭니다.

pub mod admin;
pub mod agreements;
pub mod apartments;
pub mod payments;
pub mod users;
