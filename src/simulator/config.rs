//! Simulation configuration.

use crate::campaign::CampaignConfig;
use crate::character::HeroClass;
use crate::core::constants::{DEFAULT_MAX_BATTLES_PER_CAMPAIGN, DEFAULT_MAX_ROUNDS_PER_BATTLE};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of campaigns to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Party composition, in party order
    pub party: Vec<HeroClass>,

    /// Play in shared-party mode
    pub multiplayer: bool,

    /// Battles per campaign before it counts as stuck
    pub max_battles: u32,

    /// Rounds per battle before it counts as a wipe
    pub max_rounds_per_battle: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            party: vec![HeroClass::Vanguard],
            multiplayer: false,
            max_battles: DEFAULT_MAX_BATTLES_PER_CAMPAIGN,
            max_rounds_per_battle: DEFAULT_MAX_ROUNDS_PER_BATTLE,
        }
    }
}

impl SimConfig {
    /// Quick config for a single class
    pub fn class_balance_test(class: HeroClass) -> Self {
        Self {
            num_runs: 50,
            party: vec![class],
            ..Default::default()
        }
    }

    pub fn campaign_config(&self) -> CampaignConfig {
        CampaignConfig {
            multiplayer: self.multiplayer,
            max_rounds_per_battle: self.max_rounds_per_battle,
            max_battles: self.max_battles,
        }
    }
}
