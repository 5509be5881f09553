//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 컬렉션마다 `async_trait` 트레이트 하나와 MongoDB 구현체 하나를 둡니다.
//! 서비스는 `Arc<dyn Trait>` 에만 의존하므로 테스트에서는 메모리 구현으로 교체됩니다.
//!
//! | 트레이트 | MongoDB 구현 | 컬렉션 |
//! |----------|--------------|--------|
//! | [`ApartmentRepository`] | [`MongoApartmentRepository`] | `apartmentCollection` |
//! | [`UserRepository`] | [`MongoUserRepository`] | `users` |
//! | [`AgreementRepository`] | [`MongoAgreementRepository`] | `agreements` |
//! | [`PaymentRepository`] | [`MongoPaymentRepository`] | `payments` |
//! | [`CouponRepository`] | [`MongoCouponRepository`] | `coupons` |
//! | [`AnnouncementRepository`] | [`MongoAnnouncementRepository`] | `announcements` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{MongoUserRepository, UserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_email("kim@example.com").await?;
//! ```

pub mod apartments;
pub mod users;
pub mod agreements;
pub mod payments;
pub mod coupons;
pub mod announcements;

#[cfg(test)]
pub mod memory;

pub use apartments::*;
pub use users::*;
pub use agreements::*;
pub use payments::*;
pub use coupons::*;
pub use announcements::*;

use mongodb::bson::{oid::ObjectId, Bson};
use crate::errors::AppError;

/// `insert_one` 결과의 `inserted_id` 를 ObjectId 로 꺼냅니다.
pub(crate) fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, AppError> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError(format!("예상치 못한 inserted_id 형식: {}", inserted_id)))
}
