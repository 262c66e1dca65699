//! The round loop, exposed as a lazy stream of battle events.

use std::iter::FusedIterator;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::logic::{pick_target, resolve_attack};
use super::types::{Fighter, Role};
use crate::character::Hero;
use crate::core::constants::DEFAULT_MAX_ROUNDS_PER_BATTLE;
use crate::towers::Tower;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Every roster member is dead; the tower is now cleared.
    Cleared,
    /// Every hero fell. The party has been healed and revived.
    Wiped,
}

/// One landed attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeRecord {
    pub round: u32,
    pub side: Role,
    pub attacker: String,
    pub target: String,
    pub damage: u32,
    pub target_defeated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    RoundStarted {
        round: u32,
        heroes_alive: usize,
        enemies_alive: usize,
    },
    Strike(StrikeRecord),
    Finished(BattleOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    RoundStart,
    HeroTurn(usize),
    EnemyTurn(usize),
    Done,
}

/// A battle between a party and one tower's roster.
///
/// Each call to `next` advances the fight by one observable step. The last
/// event is always `Finished`, after which the iterator is exhausted.
pub struct Battle<'a, R: Rng> {
    tower: &'a mut Tower,
    heroes: &'a mut [Hero],
    rng: &'a mut R,
    phase: Phase,
    round: u32,
    max_rounds: u32,
    outcome: Option<BattleOutcome>,
}

/// Starts a battle for `tower`. Nothing happens until the returned iterator
/// is driven.
pub fn run_tower_battle<'a, R: Rng>(
    tower: &'a mut Tower,
    heroes: &'a mut [Hero],
    rng: &'a mut R,
) -> Battle<'a, R> {
    Battle {
        tower,
        heroes,
        rng,
        phase: Phase::RoundStart,
        round: 0,
        max_rounds: DEFAULT_MAX_ROUNDS_PER_BATTLE,
        outcome: None,
    }
}

impl<'a, R: Rng> Battle<'a, R> {
    /// Caps the number of rounds. A battle that reaches the cap ends as a
    /// wipe.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Rounds started so far.
    pub fn rounds(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Drives the battle to the end and returns its outcome.
    pub fn resolve(mut self) -> BattleOutcome {
        for _ in self.by_ref() {}
        self.outcome.unwrap_or(BattleOutcome::Wiped)
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleEvent {
        match outcome {
            BattleOutcome::Cleared => {
                self.tower.check_clear();
            }
            BattleOutcome::Wiped => {
                for hero in self.heroes.iter_mut() {
                    hero.combatant.revive();
                }
            }
        }
        self.phase = Phase::Done;
        self.outcome = Some(outcome);
        BattleEvent::Finished(outcome)
    }

    fn start_round(&mut self) -> BattleEvent {
        let heroes_alive = self.heroes.iter().filter(|h| h.is_alive()).count();
        let enemies_alive = self.tower.alive_count();

        if enemies_alive == 0 {
            return self.finish(BattleOutcome::Cleared);
        }
        if heroes_alive == 0 {
            return self.finish(BattleOutcome::Wiped);
        }
        if self.round >= self.max_rounds {
            warn!(
                tower = self.tower.number,
                rounds = self.round,
                "battle hit the round cap"
            );
            return self.finish(BattleOutcome::Wiped);
        }

        self.round += 1;
        self.phase = Phase::HeroTurn(0);
        BattleEvent::RoundStarted {
            round: self.round,
            heroes_alive,
            enemies_alive,
        }
    }

    fn hero_strike(&mut self, i: usize) -> Option<StrikeRecord> {
        let hero = &mut self.heroes[i];
        if !hero.is_alive() || self.tower.alive_count() == 0 {
            return None;
        }
        let target = match pick_target(hero.name(), &self.tower.roster, &mut *self.rng) {
            Ok(t) => t,
            Err(e) => {
                error!(error = %e, "hero turn skipped");
                return None;
            }
        };
        let enemy = &mut self.tower.roster[target];
        let damage = resolve_attack(hero, enemy);
        Some(StrikeRecord {
            round: self.round,
            side: Role::Hero,
            attacker: hero.name().to_string(),
            target: enemy.name().to_string(),
            damage,
            target_defeated: !enemy.is_alive(),
        })
    }

    fn enemy_strike(&mut self, i: usize) -> Option<StrikeRecord> {
        let enemy = &mut self.tower.roster[i];
        if !enemy.is_alive() || !self.heroes.iter().any(|h| h.is_alive()) {
            return None;
        }
        let target = match pick_target(enemy.name(), &*self.heroes, &mut *self.rng) {
            Ok(t) => t,
            Err(e) => {
                error!(error = %e, "enemy turn skipped");
                return None;
            }
        };
        let hero = &mut self.heroes[target];
        let damage = resolve_attack(enemy, hero);
        Some(StrikeRecord {
            round: self.round,
            side: Role::Enemy,
            attacker: enemy.name().to_string(),
            target: hero.name().to_string(),
            damage,
            target_defeated: !hero.is_alive(),
        })
    }
}

impl<'a, R: Rng> Iterator for Battle<'a, R> {
    type Item = BattleEvent;

    fn next(&mut self) -> Option<BattleEvent> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::RoundStart => return Some(self.start_round()),
                Phase::HeroTurn(i) => {
                    if i >= self.heroes.len() {
                        self.phase = Phase::EnemyTurn(0);
                        continue;
                    }
                    self.phase = Phase::HeroTurn(i + 1);
                    if let Some(strike) = self.hero_strike(i) {
                        debug!(
                            round = strike.round,
                            attacker = %strike.attacker,
                            target = %strike.target,
                            damage = strike.damage,
                            "hero strike"
                        );
                        return Some(BattleEvent::Strike(strike));
                    }
                }
                Phase::EnemyTurn(i) => {
                    if i >= self.tower.roster.len() {
                        self.phase = Phase::RoundStart;
                        continue;
                    }
                    self.phase = Phase::EnemyTurn(i + 1);
                    if let Some(strike) = self.enemy_strike(i) {
                        debug!(
                            round = strike.round,
                            attacker = %strike.attacker,
                            target = %strike.target,
                            damage = strike.damage,
                            "enemy strike"
                        );
                        return Some(BattleEvent::Strike(strike));
                    }
                }
            }
        }
    }
}

impl<'a, R: Rng> FusedIterator for Battle<'a, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_hero, HeroClass};
    use crate::combat::types::EnemyKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_one_hit_clear_event_sequence() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion]);
        let mut heroes = vec![create_hero(HeroClass::Rogue, "Vex")];
        let mut rng = rng();

        let events: Vec<_> = run_tower_battle(&mut tower, &mut heroes, &mut rng).collect();

        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            BattleEvent::RoundStarted {
                round: 1,
                heroes_alive: 1,
                enemies_alive: 1
            }
        );
        match &events[1] {
            BattleEvent::Strike(s) => {
                assert_eq!(s.side, Role::Hero);
                assert_eq!(s.damage, 55);
                assert!(s.target_defeated);
            }
            other => panic!("expected strike, got {:?}", other),
        }
        assert_eq!(events[2], BattleEvent::Finished(BattleOutcome::Cleared));
        assert!(tower.is_cleared());
        assert_eq!(heroes[0].currency, 15);
    }

    #[test]
    fn test_wipe_revives_party_and_keeps_enemy_damage() {
        let mut tower = Tower::from_kinds(17, &[EnemyKind::BlightGiant]);
        let mut heroes = vec![create_hero(HeroClass::Rogue, "Vex")];
        let mut rng = rng();

        let outcome = run_tower_battle(&mut tower, &mut heroes, &mut rng).resolve();

        assert_eq!(outcome, BattleOutcome::Wiped);
        assert!(!tower.is_cleared());
        assert!(heroes[0].is_alive());
        assert_eq!(heroes[0].combatant.stats.health.value(), 80);
        assert_eq!(tower.roster[0].combatant.stats.health.value(), 85);
        assert_eq!(heroes[0].currency, 45);
    }

    #[test]
    fn test_dead_enemies_do_not_strike() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion; 2]);
        let mut heroes = vec![
            create_hero(HeroClass::Rogue, "A"),
            create_hero(HeroClass::Rogue, "B"),
        ];
        let mut rng = rng();

        let events: Vec<_> = run_tower_battle(&mut tower, &mut heroes, &mut rng).collect();
        let enemy_strikes = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::Strike(s) if s.side == Role::Enemy))
            .count();
        let hero_strikes = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::Strike(s) if s.side == Role::Hero))
            .count();

        assert_eq!(
            events.last(),
            Some(&BattleEvent::Finished(BattleOutcome::Cleared))
        );
        // Both minions fall before their turn comes.
        assert_eq!(hero_strikes, 2);
        assert_eq!(enemy_strikes, 0);
    }

    #[test]
    fn test_strikes_only_target_living() {
        let mut tower = Tower::from_kinds(5, &[EnemyKind::BlightedMinion; 20]);
        let mut heroes = vec![
            create_hero(HeroClass::Vanguard, "A"),
            create_hero(HeroClass::Guardian, "B"),
        ];
        let mut rng = rng();

        for event in run_tower_battle(&mut tower, &mut heroes, &mut rng) {
            if let BattleEvent::Strike(s) = event {
                assert!(s.damage >= 1);
            }
        }
        assert!(tower.is_cleared());
    }

    #[test]
    fn test_empty_roster_clears_without_rounds() {
        let mut tower = Tower::new(1, Vec::new());
        let mut heroes = vec![create_hero(HeroClass::Weaver, "W")];
        let mut rng = rng();

        let mut battle = run_tower_battle(&mut tower, &mut heroes, &mut rng);
        assert_eq!(
            battle.next(),
            Some(BattleEvent::Finished(BattleOutcome::Cleared))
        );
        assert_eq!(battle.rounds(), 0);
        assert_eq!(battle.next(), None);
        assert_eq!(battle.next(), None);
    }

    #[test]
    fn test_empty_party_wipes() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion]);
        let mut heroes: Vec<Hero> = Vec::new();
        let mut rng = rng();

        let outcome = run_tower_battle(&mut tower, &mut heroes, &mut rng).resolve();
        assert_eq!(outcome, BattleOutcome::Wiped);
    }

    #[test]
    fn test_round_cap_ends_as_wipe() {
        let mut tower = Tower::from_kinds(20, &[EnemyKind::BlightGiant]);
        let mut heroes = vec![create_hero(HeroClass::Guardian, "G")];
        let mut rng = rng();

        let mut battle = run_tower_battle(&mut tower, &mut heroes, &mut rng).with_max_rounds(1);
        let events: Vec<_> = battle.by_ref().collect();
        assert_eq!(battle.rounds(), 1);
        assert_eq!(battle.outcome(), Some(BattleOutcome::Wiped));
        assert_eq!(
            events.last(),
            Some(&BattleEvent::Finished(BattleOutcome::Wiped))
        );
    }
}
