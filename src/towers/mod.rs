//! The twenty towers of the campaign.

mod data;
mod tower;

pub use data::{build_towers, roster_for};
pub use tower::Tower;
