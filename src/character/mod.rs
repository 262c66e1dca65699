//! Hero classes and hero construction.

pub mod class;
pub mod hero;

pub use class::*;
pub use hero::*;
