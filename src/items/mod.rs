//! Item system: types, catalog, inventory, and the equip rules.

pub mod catalog;
pub mod equipment;
pub mod inventory;
pub mod types;

pub use catalog::*;
pub use equipment::*;
pub use inventory::*;
pub use types::*;
