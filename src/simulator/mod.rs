//! Campaign balance simulator for Monte Carlo analysis.
//!
//! Plays many seeded campaigns with the auto-pilot controller to measure:
//! - How often a party reaches the last tower
//! - Where wipes pile up
//! - How much currency and essence a run ends with

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
