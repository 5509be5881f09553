//! apartments 컬렉션 리포지토리

pub mod apartment_repo;

pub use apartment_repo::*;
