//! Campaign configuration.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_MAX_BATTLES_PER_CAMPAIGN, DEFAULT_MAX_ROUNDS_PER_BATTLE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Shared-party mode: essence is split between survivors, the equip
    /// phase is skipped, and the final ranking orders heroes by essence.
    pub multiplayer: bool,

    /// Rounds before a battle is abandoned as a wipe
    pub max_rounds_per_battle: u32,

    /// Battles before a campaign gives up
    pub max_battles: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            multiplayer: false,
            max_rounds_per_battle: DEFAULT_MAX_ROUNDS_PER_BATTLE,
            max_battles: DEFAULT_MAX_BATTLES_PER_CAMPAIGN,
        }
    }
}

impl CampaignConfig {
    pub fn single_player() -> Self {
        Self::default()
    }

    pub fn multiplayer() -> Self {
        Self {
            multiplayer: true,
            ..Default::default()
        }
    }
}
