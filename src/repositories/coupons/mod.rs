//! coupons 컬렉션 리포지토리

pub mod coupon_repo;

pub use coupon_repo::*;
