use serde::{Deserialize, Serialize};

use super::types::{Armor, Item, Potion, Weapon};
use crate::core::constants::INVENTORY_CAPACITY;
use crate::error::{GameError, Result};

/// A hero's belongings.
///
/// Equipped weapons are always a subset of the owned weapons. Stat bonuses are
/// applied by the owning hero, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    capacity: usize,
    owned: Vec<Item>,
    equipped_weapons: Vec<Weapon>,
    equipped_armor: Option<Armor>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(INVENTORY_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            owned: Vec::new(),
            equipped_weapons: Vec::new(),
            equipped_armor: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.owned.len() >= self.capacity
    }

    /// Stores an item, or fails with `CapacityExceeded` when full.
    pub fn try_add(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(GameError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.owned.push(item);
        Ok(())
    }

    /// Stores an item. Returns false (and stores nothing) when full.
    pub fn add(&mut self, item: Item) -> bool {
        self.try_add(item).is_ok()
    }

    pub fn owned(&self) -> &[Item] {
        &self.owned
    }

    /// Owned weapons in acquisition order; equip picks index into this list.
    pub fn owned_weapons(&self) -> Vec<&Weapon> {
        self.owned.iter().filter_map(Item::as_weapon).collect()
    }

    pub fn owns_weapon(&self, weapon: &Weapon) -> bool {
        self.owned
            .iter()
            .filter_map(Item::as_weapon)
            .any(|w| w.same_as(weapon))
    }

    pub fn potions(&self) -> impl Iterator<Item = &Potion> {
        self.owned.iter().filter_map(|item| match item {
            Item::Potion(p) => Some(p),
            _ => None,
        })
    }

    pub fn equipped_weapons(&self) -> &[Weapon] {
        &self.equipped_weapons
    }

    pub fn equipped_armor(&self) -> Option<&Armor> {
        self.equipped_armor.as_ref()
    }

    pub fn is_equipped(&self, weapon: &Weapon) -> bool {
        self.equipped_weapons.iter().any(|w| w.same_as(weapon))
    }

    /// Sum of attack bonuses from the equipped weapons.
    pub fn equipped_attack_bonus(&self) -> u32 {
        self.equipped_weapons.iter().map(|w| w.damage_bonus).sum()
    }

    /// Marks an owned weapon as equipped. Refuses weapons that are not owned
    /// or already equipped.
    pub(crate) fn push_equipped(&mut self, weapon: Weapon) -> bool {
        if !self.owns_weapon(&weapon) || self.is_equipped(&weapon) {
            return false;
        }
        self.equipped_weapons.push(weapon);
        true
    }

    /// Unequips every weapon and hands them back.
    pub(crate) fn take_equipped(&mut self) -> Vec<Weapon> {
        std::mem::take(&mut self.equipped_weapons)
    }

    /// Swaps the equipped armor, returning the previous piece.
    pub(crate) fn replace_armor(&mut self, armor: Armor) -> Option<Armor> {
        self.equipped_armor.replace(armor)
    }

    /// Removes the first potion with this name.
    pub(crate) fn take_potion(&mut self, name: &str) -> Option<Potion> {
        let pos = self
            .owned
            .iter()
            .position(|item| matches!(item, Item::Potion(p) if p.name == name))?;
        match self.owned.remove(pos) {
            Item::Potion(p) => Some(p),
            _ => None,
        }
    }
}
