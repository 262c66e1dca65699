use serde::{Deserialize, Serialize};

use crate::core::constants::{HERO_HIT_REWARD, MIN_STRIKE_DAMAGE};
use crate::core::stat::Stats;

/// Which side a combatant fights on. Per-side behavior lives in tables keyed
/// by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Hero,
    Enemy,
}

impl Role {
    /// Currency credited to the attacker for every landed hit.
    pub fn hit_reward(&self) -> u32 {
        match self {
            Role::Hero => HERO_HIT_REWARD,
            Role::Enemy => 0,
        }
    }
}

/// The shared core of every hero and enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub role: Role,
    pub stats: Stats,
    alive: bool,
    defending: bool,
}

impl Combatant {
    pub fn new(name: impl Into<String>, role: Role, health: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            role,
            stats: Stats::new(health, attack),
            alive: health > 0,
            defending: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_defending(&self) -> bool {
        self.defending
    }

    /// Raises the guard. The next landed hit is halved and drops it again.
    pub fn defend(&mut self) {
        self.defending = true;
    }

    /// Applies an incoming hit of `raw` damage and returns what was dealt.
    pub fn take_hit(&mut self, raw: u32) -> u32 {
        let mut dealt = raw
            .saturating_sub(self.stats.defense.value())
            .max(MIN_STRIKE_DAMAGE);
        if self.defending {
            dealt /= 2;
            self.defending = false;
        }
        self.stats.health.modify(-(dealt as i64));
        if self.stats.health.is_depleted() {
            self.alive = false;
        }
        dealt
    }

    /// Heals a living combatant. Returns the HP actually recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        let before = self.stats.health.value();
        self.stats.health.modify(amount as i64);
        self.stats.health.value() - before
    }

    /// Full heal and revive; only the battle resolver's party wipe uses this.
    pub fn revive(&mut self) {
        self.stats.health.restore();
        self.alive = true;
    }
}

/// Anything that can stand in a battle line.
pub trait Fighter {
    fn combatant(&self) -> &Combatant;

    fn combatant_mut(&mut self) -> &mut Combatant;

    /// Receives the per-hit reward of this fighter's role. Most fighters keep
    /// no purse.
    fn collect_hit_reward(&mut self, _amount: u32) {}

    fn name(&self) -> &str {
        &self.combatant().name
    }

    fn is_alive(&self) -> bool {
        self.combatant().is_alive()
    }
}

impl Fighter for Combatant {
    fn combatant(&self) -> &Combatant {
        self
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        self
    }
}

/// Enemy archetypes that populate the towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    BlightedMinion,
    JuniorGiant,
    BlightGiant,
}

impl EnemyKind {
    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::BlightedMinion => "Blighted Minion",
            EnemyKind::JuniorGiant => "Junior Giant",
            EnemyKind::BlightGiant => "Blight Giant",
        }
    }

    /// (health, attack, essence reward, currency reward)
    pub fn profile(&self) -> (u32, u32, u32, u32) {
        match self {
            EnemyKind::BlightedMinion => (40, 12, 5, 20),
            EnemyKind::JuniorGiant => (120, 25, 20, 50),
            EnemyKind::BlightGiant => (250, 40, 50, 100),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub combatant: Combatant,
    pub kind: EnemyKind,
    essence_reward: u32,
    currency_reward: u32,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        let (health, attack, essence_reward, currency_reward) = kind.profile();
        Self {
            combatant: Combatant::new(kind.name(), Role::Enemy, health, attack),
            kind,
            essence_reward,
            currency_reward,
        }
    }

    /// An enemy outside the stock archetypes, for scripted encounters.
    pub fn custom(
        name: &str,
        kind: EnemyKind,
        health: u32,
        attack: u32,
        essence_reward: u32,
        currency_reward: u32,
    ) -> Self {
        Self {
            combatant: Combatant::new(name, Role::Enemy, health, attack),
            kind,
            essence_reward,
            currency_reward,
        }
    }

    pub fn essence_reward(&self) -> u32 {
        self.essence_reward
    }

    pub fn currency_reward(&self) -> u32 {
        self.currency_reward
    }
}

impl Fighter for Enemy {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_creation() {
        let c = Combatant::new("Test Orc", Role::Enemy, 50, 10);
        assert_eq!(c.name, "Test Orc");
        assert_eq!(c.stats.health.value(), 50);
        assert_eq!(c.stats.attack.value(), 10);
        assert!(c.is_alive());
        assert!(!c.is_defending());
    }

    #[test]
    fn test_take_hit_subtracts_defense() {
        let mut c = Combatant::new("Target", Role::Enemy, 50, 10);
        assert_eq!(c.take_hit(25), 15);
        assert_eq!(c.stats.health.value(), 35);
    }

    #[test]
    fn test_take_hit_minimum_one() {
        let mut c = Combatant::new("Target", Role::Enemy, 50, 10);
        assert_eq!(c.take_hit(3), 1);
        assert_eq!(c.take_hit(0), 1);
        assert_eq!(c.stats.health.value(), 48);
    }

    #[test]
    fn test_defending_halves_once() {
        let mut c = Combatant::new("Target", Role::Hero, 100, 10);
        c.defend();
        c.defend();
        assert!(c.is_defending());
        assert_eq!(c.take_hit(31), 10);
        assert!(!c.is_defending());
        assert_eq!(c.take_hit(31), 21);
    }

    #[test]
    fn test_defending_against_minimum_hit_deals_zero() {
        let mut c = Combatant::new("Target", Role::Hero, 100, 10);
        c.defend();
        assert_eq!(c.take_hit(5), 0);
        assert_eq!(c.stats.health.value(), 100);
    }

    #[test]
    fn test_death_at_zero_health() {
        let mut c = Combatant::new("Target", Role::Enemy, 20, 10);
        c.take_hit(100);
        assert_eq!(c.stats.health.value(), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_heal_reports_recovered_amount() {
        let mut c = Combatant::new("Target", Role::Hero, 100, 10);
        c.take_hit(40);
        assert_eq!(c.heal(75), 30);
        assert_eq!(c.stats.health.value(), 100);
    }

    #[test]
    fn test_dead_combatant_cannot_heal() {
        let mut c = Combatant::new("Target", Role::Hero, 10, 10);
        c.take_hit(100);
        assert_eq!(c.heal(50), 0);
        assert!(!c.is_alive());
    }

    #[test]
    fn test_revive_restores_full_health() {
        let mut c = Combatant::new("Target", Role::Hero, 80, 10);
        c.take_hit(200);
        c.revive();
        assert!(c.is_alive());
        assert_eq!(c.stats.health.value(), 80);
    }

    #[test]
    fn test_hit_reward_by_role() {
        assert_eq!(Role::Hero.hit_reward(), 15);
        assert_eq!(Role::Enemy.hit_reward(), 0);
    }

    #[test]
    fn test_enemy_profiles() {
        let minion = Enemy::new(EnemyKind::BlightedMinion);
        assert_eq!(minion.combatant.stats.health.value(), 40);
        assert_eq!(minion.combatant.stats.attack.value(), 12);
        assert_eq!(minion.essence_reward(), 5);
        assert_eq!(minion.currency_reward(), 20);

        let giant = Enemy::new(EnemyKind::BlightGiant);
        assert_eq!(giant.combatant.name, "Blight Giant");
        assert_eq!(giant.currency_reward(), 100);
        assert_eq!(giant.combatant.role, Role::Enemy);
    }
}
