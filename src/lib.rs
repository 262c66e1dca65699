//! Aethermoor - turn-based tower campaign engine.
//!
//! A party of up to five heroes fights through twenty towers. Clearing a
//! tower pays currency (and essence in multiplayer) which is spent in a
//! between-tower weapon shop.

pub mod campaign;
pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod shop;
pub mod simulator;
pub mod towers;

pub use error::{GameError, Result};
