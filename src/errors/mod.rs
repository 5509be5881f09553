//! 에러 타입 모듈
//!
//! [`errors`] 의 `AppError` 와 보조 타입들을 재export 합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
