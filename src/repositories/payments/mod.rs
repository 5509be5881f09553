//! payments 컬렉션 리포지토리

pub mod payment_repo;

pub use payment_repo::*;
