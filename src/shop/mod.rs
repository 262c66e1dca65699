//! Between-tower weapon shop.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
