use serde::{Deserialize, Serialize};

use crate::character::{Hero, HeroClass};
use crate::combat::Fighter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerOutcome {
    Cleared,
    Wiped,
    /// Already cleared before a checkpoint reset; walked past without a fight.
    Skipped,
}

/// What happened at one tower visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerReport {
    /// 1-based tower number.
    pub tower: usize,
    pub outcome: TowerOutcome,
    pub rounds: u32,
    /// Currency paid to each survivor on a clear.
    pub currency_reward: u32,
    /// Essence paid to each survivor on a multiplayer clear.
    pub essence_share: u32,
    /// 0-based index of the next tower to visit.
    pub next_tower_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub name: String,
    pub class: HeroClass,
    pub alive: bool,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub currency: u32,
    pub essence: u32,
    pub equipped: Vec<String>,
    pub weapons_owned: usize,
}

impl HeroSummary {
    pub fn from_hero(hero: &Hero) -> Self {
        Self {
            name: hero.name().to_string(),
            class: hero.class,
            alive: hero.is_alive(),
            health: hero.combatant.stats.health.value(),
            max_health: hero.combatant.stats.health.max(),
            attack: hero.attack(),
            defense: hero.defense(),
            currency: hero.currency,
            essence: hero.essence,
            equipped: hero
                .inventory
                .equipped_weapons()
                .iter()
                .map(|w| w.name.clone())
                .collect(),
            weapons_owned: hero.inventory.owned_weapons().len(),
        }
    }
}

/// Snapshot for a results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignStatus {
    pub current_tower_index: usize,
    /// Clearance flag per tower, in tower order.
    pub cleared: Vec<bool>,
    /// Party order, or ranked by essence in multiplayer.
    pub heroes: Vec<HeroSummary>,
}

impl CampaignStatus {
    pub fn towers_cleared(&self) -> usize {
        self.cleared.iter().filter(|&&c| c).count()
    }
}

/// Totals for one played-out campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub completed: bool,
    pub battles: u32,
    pub wipes: u32,
    pub rounds: u64,
    /// Wipes per tower, index 0 = tower 1.
    pub wipes_by_tower: Vec<u32>,
}
