//! announcements 컬렉션 리포지토리

pub mod announcement_repo;

pub use announcement_repo::*;
