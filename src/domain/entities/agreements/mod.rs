//! Agreements Entity Module

pub mod agreement;

pub use agreement::*;
