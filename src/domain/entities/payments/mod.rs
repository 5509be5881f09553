//! Payments Entity Module

pub mod payment;

pub use payment::*;
