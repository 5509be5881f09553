//! agreements 컬렉션 리포지토리

pub mod agreement_repo;

pub use agreement_repo::*;
