use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Sword,
    Staff,
    Dagger,
    Mace,
    Shield,
    Bow,
}

impl WeaponCategory {
    pub fn all() -> [WeaponCategory; 6] {
        [
            WeaponCategory::Sword,
            WeaponCategory::Staff,
            WeaponCategory::Dagger,
            WeaponCategory::Mace,
            WeaponCategory::Shield,
            WeaponCategory::Bow,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponCategory::Sword => "Sword",
            WeaponCategory::Staff => "Staff",
            WeaponCategory::Dagger => "Dagger",
            WeaponCategory::Mace => "Mace",
            WeaponCategory::Shield => "Shield",
            WeaponCategory::Bow => "Bow",
        }
    }

    /// Shields are the defensive category the shop always tries to stock.
    pub fn is_defensive(&self) -> bool {
        matches!(self, WeaponCategory::Shield)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage_bonus: u32,
    pub category: WeaponCategory,
    /// Flavor text only; no mechanical effect.
    pub passive: String,
    pub price: u32,
}

impl Weapon {
    pub fn new(
        name: &str,
        damage_bonus: u32,
        category: WeaponCategory,
        passive: &str,
        price: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            damage_bonus,
            category,
            passive: passive.to_string(),
            price,
        }
    }

    /// Catalog identity: the same name may appear in two categories.
    pub fn same_as(&self, other: &Weapon) -> bool {
        self.name == other.name && self.category == other.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmorSlot {
    Chest,
    Helmet,
    Boots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub defense_bonus: u32,
    pub slot: ArmorSlot,
}

impl Armor {
    pub fn new(name: &str, defense_bonus: u32, slot: ArmorSlot) -> Self {
        Self {
            name: name.to_string(),
            defense_bonus,
            slot,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    pub name: String,
    pub heal: u32,
}

impl Potion {
    pub fn new(name: &str, heal: u32) -> Self {
        Self {
            name: name.to_string(),
            heal,
        }
    }
}

/// Anything an inventory can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
    Potion(Potion),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => &w.name,
            Item::Armor(a) => &a.name,
            Item::Potion(p) => &p.name,
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            _ => None,
        }
    }
}
