//! Tower-by-tower orchestration.

use rand::Rng;
use tracing::{info, warn};

use super::config::CampaignConfig;
use super::controller::PartyController;
use super::phases::{run_equip_phase, run_shop_phase};
use super::rewards::{distribute_currency, distribute_essence};
use super::types::{CampaignStatus, CampaignSummary, HeroSummary, TowerOutcome, TowerReport};
use crate::character::Hero;
use crate::combat::{run_tower_battle, BattleOutcome, Fighter};
use crate::core::constants::MAX_PARTY_SIZE;
use crate::error::{GameError, Result};
use crate::items::Catalog;
use crate::towers::{build_towers, Tower};

/// One run through the towers with a fixed party.
pub struct Campaign<R: Rng> {
    heroes: Vec<Hero>,
    towers: Vec<Tower>,
    current_tower_index: usize,
    catalog: Catalog,
    config: CampaignConfig,
    rng: R,
    battles_fought: u32,
}

impl<R: Rng> Campaign<R> {
    pub fn new(config: CampaignConfig, rng: R) -> Self {
        Self::with_catalog(config, Catalog::standard(), rng)
    }

    pub fn with_catalog(config: CampaignConfig, catalog: Catalog, rng: R) -> Self {
        Self {
            heroes: Vec::new(),
            towers: build_towers(),
            current_tower_index: 0,
            catalog,
            config,
            rng,
            battles_fought: 0,
        }
    }

    pub fn add_hero(&mut self, hero: Hero) -> Result<()> {
        if self.heroes.len() >= MAX_PARTY_SIZE {
            return Err(GameError::PartyFull {
                max: MAX_PARTY_SIZE,
            });
        }
        self.heroes.push(hero);
        Ok(())
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub fn current_tower_index(&self) -> usize {
        self.current_tower_index
    }

    pub fn battles_fought(&self) -> u32 {
        self.battles_fought
    }

    pub fn is_finished(&self) -> bool {
        self.current_tower_index >= self.towers.len()
    }

    /// Visits the current tower: fights it, pays out, and runs the shop and
    /// equip phases on a clear, or falls back to the checkpoint on a wipe.
    ///
    /// Returns `None` once the campaign is over or the party is empty.
    pub fn play_next_tower<C>(&mut self, controller: &mut C) -> Option<TowerReport>
    where
        C: PartyController + ?Sized,
    {
        if self.is_finished() {
            return None;
        }
        if self.heroes.is_empty() {
            warn!("no heroes in the party");
            return None;
        }

        let index = self.current_tower_index;
        let number = self.towers[index].number;

        if self.towers[index].is_cleared() {
            self.current_tower_index += 1;
            return Some(TowerReport {
                tower: number,
                outcome: TowerOutcome::Skipped,
                rounds: 0,
                currency_reward: 0,
                essence_share: 0,
                next_tower_index: self.current_tower_index,
            });
        }

        let (outcome, rounds) = {
            let mut battle = run_tower_battle(&mut self.towers[index], &mut self.heroes, &mut self.rng)
                .with_max_rounds(self.config.max_rounds_per_battle);
            for event in battle.by_ref() {
                controller.on_battle_event(number, &event);
            }
            (
                battle.outcome().unwrap_or(BattleOutcome::Wiped),
                battle.rounds(),
            )
        };
        self.battles_fought += 1;

        match outcome {
            BattleOutcome::Cleared => {
                let tower = &self.towers[index];
                let currency_reward = distribute_currency(tower, &mut self.heroes);
                let essence_share = if self.config.multiplayer {
                    distribute_essence(tower, &mut self.heroes)
                } else {
                    0
                };
                info!(tower = number, rounds, currency_reward, essence_share, "tower cleared");

                self.current_tower_index += 1;
                if !self.is_finished() {
                    self.between_towers(currency_reward, controller);
                }

                Some(TowerReport {
                    tower: number,
                    outcome: TowerOutcome::Cleared,
                    rounds,
                    currency_reward,
                    essence_share,
                    next_tower_index: self.current_tower_index,
                })
            }
            BattleOutcome::Wiped => {
                self.current_tower_index = self.heroes[0].checkpoint.saturating_sub(1);
                info!(
                    tower = number,
                    rounds,
                    respawn = self.current_tower_index + 1,
                    "party wiped"
                );
                Some(TowerReport {
                    tower: number,
                    outcome: TowerOutcome::Wiped,
                    rounds,
                    currency_reward: 0,
                    essence_share: 0,
                    next_tower_index: self.current_tower_index,
                })
            }
        }
    }

    fn between_towers<C>(&mut self, tower_currency: u32, controller: &mut C)
    where
        C: PartyController + ?Sized,
    {
        for hero in self.heroes.iter_mut().filter(|h| h.is_alive()) {
            run_shop_phase(&self.catalog, hero, controller, &mut self.rng);
            if !self.config.multiplayer {
                run_equip_phase(hero, tower_currency, controller);
            }
        }
    }

    /// Plays towers until the campaign ends or the battle cap is reached.
    pub fn play<C>(&mut self, controller: &mut C) -> CampaignSummary
    where
        C: PartyController + ?Sized,
    {
        let mut summary = CampaignSummary {
            wipes_by_tower: vec![0; self.towers.len()],
            ..Default::default()
        };

        while self.battles_fought < self.config.max_battles {
            let Some(report) = self.play_next_tower(controller) else {
                break;
            };
            match report.outcome {
                TowerOutcome::Skipped => continue,
                TowerOutcome::Cleared => {}
                TowerOutcome::Wiped => {
                    summary.wipes += 1;
                    summary.wipes_by_tower[report.tower - 1] += 1;
                }
            }
            summary.battles += 1;
            summary.rounds += report.rounds as u64;
        }

        summary.completed = self.is_finished();
        if !summary.completed {
            warn!(
                battles = self.battles_fought,
                tower = self.current_tower_index + 1,
                "campaign stopped before the last tower"
            );
        }
        summary
    }

    pub fn status(&self) -> CampaignStatus {
        let mut heroes: Vec<HeroSummary> = self.heroes.iter().map(HeroSummary::from_hero).collect();
        if self.config.multiplayer {
            heroes.sort_by(|a, b| b.essence.cmp(&a.essence));
        }
        CampaignStatus {
            current_tower_index: self.current_tower_index,
            cleared: self.towers.iter().map(|t| t.is_cleared()).collect(),
            heroes,
        }
    }
}
