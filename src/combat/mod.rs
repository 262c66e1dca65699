//! Combat: combatants, strike resolution, and the round loop.

pub mod battle;
pub mod logic;
pub mod types;

pub use battle::*;
pub use logic::*;
pub use types::*;
