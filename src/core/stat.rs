use serde::{Deserialize, Serialize};

use super::constants::{ATTACK_MAX, BASE_DEFENSE, BASE_SPEED, DEFENSE_MAX, SPEED_MAX};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatKind {
    Health,
    Attack,
    Defense,
    Speed,
}

impl StatKind {
    pub fn all() -> [StatKind; 4] {
        [
            StatKind::Health,
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Speed,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            StatKind::Health => "HP",
            StatKind::Attack => "ATK",
            StatKind::Defense => "DEF",
            StatKind::Speed => "SPD",
        }
    }
}

/// A bounded attribute. `value` always stays within `0..=max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    kind: StatKind,
    value: u32,
    max: u32,
}

impl Stat {
    /// Creates a stat, clamping the starting value to `max`.
    pub fn new(kind: StatKind, value: u32, max: u32) -> Self {
        Self {
            kind,
            value: value.min(max),
            max,
        }
    }

    /// A stat that starts full.
    pub fn full(kind: StatKind, max: u32) -> Self {
        Self::new(kind, max, max)
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.abbrev()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Shifts the value by `amount` and clamps into `0..=max`. Returns the new value.
    pub fn modify(&mut self, amount: i64) -> u32 {
        let shifted = (self.value as i64).saturating_add(amount);
        self.value = shifted.clamp(0, self.max as i64) as u32;
        self.value
    }

    pub fn restore(&mut self) {
        self.value = self.max;
    }

    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.name(), self.value, self.max)
    }
}

/// The fixed four-stat record every combatant carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub health: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,
}

impl Stats {
    /// Stats for a fresh combatant: full health, the given attack, and the
    /// shared defense/speed baselines.
    pub fn new(health: u32, attack: u32) -> Self {
        Self {
            health: Stat::full(StatKind::Health, health),
            attack: Stat::new(StatKind::Attack, attack, ATTACK_MAX),
            defense: Stat::new(StatKind::Defense, BASE_DEFENSE, DEFENSE_MAX),
            speed: Stat::new(StatKind::Speed, BASE_SPEED, SPEED_MAX),
        }
    }

    pub fn get(&self, kind: StatKind) -> &Stat {
        match kind {
            StatKind::Health => &self.health,
            StatKind::Attack => &self.attack,
            StatKind::Defense => &self.defense,
            StatKind::Speed => &self.speed,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut Stat {
        match kind {
            StatKind::Health => &mut self.health,
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Speed => &mut self.speed,
        }
    }
}
