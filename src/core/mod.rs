//! Shared constants and the bounded stat primitive.

pub mod constants;
pub mod stat;

pub use stat::*;
