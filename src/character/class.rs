use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;
use crate::items::{Armor, ArmorSlot, Item, Potion, Weapon, WeaponCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Vanguard,
    Weaver,
    Alchemist,
    Rogue,
    Guardian,
}

impl HeroClass {
    pub fn all() -> [HeroClass; 5] {
        [
            HeroClass::Vanguard,
            HeroClass::Weaver,
            HeroClass::Alchemist,
            HeroClass::Rogue,
            HeroClass::Guardian,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Vanguard => "Vanguard",
            HeroClass::Weaver => "Weaver",
            HeroClass::Alchemist => "Alchemist",
            HeroClass::Rogue => "Rogue",
            HeroClass::Guardian => "Guardian",
        }
    }

    pub fn base_health(&self) -> u32 {
        match self {
            HeroClass::Vanguard => 150,
            HeroClass::Weaver => 100,
            HeroClass::Alchemist => 120,
            HeroClass::Rogue => 80,
            HeroClass::Guardian => 200,
        }
    }

    pub fn base_attack(&self) -> u32 {
        match self {
            HeroClass::Vanguard => 25,
            HeroClass::Weaver => 30,
            HeroClass::Alchemist => 20,
            HeroClass::Rogue => 40,
            HeroClass::Guardian => 15,
        }
    }

    /// The one weapon category this class may buy.
    pub fn weapon_category(&self) -> WeaponCategory {
        match self {
            HeroClass::Vanguard => WeaponCategory::Sword,
            HeroClass::Weaver => WeaponCategory::Staff,
            HeroClass::Alchemist => WeaponCategory::Mace,
            HeroClass::Rogue => WeaponCategory::Dagger,
            HeroClass::Guardian => WeaponCategory::Shield,
        }
    }

    /// Signature weapon every hero starts with, owned and equipped.
    pub fn starting_weapon(&self) -> Weapon {
        let (name, bonus) = match self {
            HeroClass::Vanguard => ("Voidslayer", 20),
            HeroClass::Weaver => ("Starfire Staff", 18),
            HeroClass::Alchemist => ("Mortis Mortar", 15),
            HeroClass::Rogue => ("Shadowfang", 25),
            HeroClass::Guardian => ("Aegis Shield", 12),
        };
        Weapon::new(name, bonus, self.weapon_category(), "None", 0)
    }

    pub fn starting_armor(&self) -> Option<Armor> {
        match self {
            HeroClass::Vanguard | HeroClass::Guardian => {
                Some(Armor::new("Plate Armor", 30, ArmorSlot::Chest))
            }
            _ => None,
        }
    }

    /// Consumables packed at creation.
    pub fn starting_supplies(&self) -> Vec<Item> {
        match self {
            HeroClass::Weaver => vec![Item::Potion(Potion::new("Mana Potion", 50))],
            HeroClass::Alchemist => vec![
                Item::Potion(Potion::new("Health Potion", 75)),
                Item::Potion(Potion::new("Health Potion", 75)),
            ],
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for HeroClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeroClass {
    type Err = GameError;

    /// Accepts a class name (any case) or its menu number 1-5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| HeroClass::all().get(i).copied())
                .ok_or_else(|| GameError::UnknownClass(trimmed.to_string()));
        }
        HeroClass::all()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::UnknownClass(trimmed.to_string()))
    }
}
