//! The twenty-tower campaign: battles, rewards, and the between-tower phases.

pub mod config;
pub mod controller;
pub mod logic;
pub mod phases;
pub mod rewards;
pub mod types;

pub use config::CampaignConfig;
pub use controller::{AutoPilot, PartyController};
pub use logic::Campaign;
pub use phases::{run_equip_phase, run_shop_phase};
pub use rewards::{distribute_currency, distribute_essence};
pub use types::*;
