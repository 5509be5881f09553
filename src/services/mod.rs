//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 상태를 갖지 않으며 리포지토리 트레이트 객체(`Arc<dyn ...>`)와
//! 결제 게이트웨이에만 의존합니다. `main` 에서 한 번 생성되어 `web::Data` 로 주입됩니다.
//!
//! # Features
//!
//! - 사용자 upsert-if-absent, 멤버 필터, 멤버 강등
//! - 계약 생성(중복 거절), 승인/거절 상태 전이
//! - 결제 인텐트 생성, 결제 기록 사가(보상 삭제 포함)
//! - 아파트 목록/페이지/개수, 쿠폰, 공지사항
//! - 선택적 API 가드의 JWT 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo.clone());
//! let user = user_service.get_by_email("kim@example.com").await?;
//! ```

pub mod apartments;
pub mod users;
pub mod agreements;
pub mod payments;
pub mod coupons;
pub mod announcements;
pub mod auth;

pub use apartments::*;
pub use users::*;
pub use agreements::*;
pub use payments::*;
pub use coupons::*;
pub use announcements::*;
pub use auth::*;
