use serde::{Deserialize, Serialize};

use super::class::HeroClass;
use crate::combat::{Combatant, Fighter, Role};
use crate::core::constants::STARTING_CHECKPOINT;
use crate::items::{Armor, Inventory, Item, Weapon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub combatant: Combatant,
    pub class: HeroClass,
    pub currency: u32,
    pub essence: u32,
    pub inventory: Inventory,
    /// 1-based tower the party respawns at after a wipe.
    pub checkpoint: usize,
}

/// Builds a hero of `class` with its signature weapon and starting kit
/// already equipped.
pub fn create_hero(class: HeroClass, name: &str) -> Hero {
    let mut hero = Hero {
        combatant: Combatant::new(name, Role::Hero, class.base_health(), class.base_attack()),
        class,
        currency: 0,
        essence: 0,
        inventory: Inventory::default(),
        checkpoint: STARTING_CHECKPOINT,
    };

    let weapon = class.starting_weapon();
    hero.inventory.add(Item::Weapon(weapon.clone()));
    hero.equip_weapon(weapon);

    if let Some(armor) = class.starting_armor() {
        hero.inventory.add(Item::Armor(armor.clone()));
        hero.equip_armor(armor);
    }

    for item in class.starting_supplies() {
        hero.inventory.add(item);
    }

    hero
}

impl Hero {
    pub fn name(&self) -> &str {
        &self.combatant.name
    }

    pub fn attack(&self) -> u32 {
        self.combatant.stats.attack.value()
    }

    pub fn defense(&self) -> u32 {
        self.combatant.stats.defense.value()
    }

    /// Adds an owned weapon to the equipped set and applies its bonus.
    /// Returns false if it is not owned or already equipped.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> bool {
        let bonus = weapon.damage_bonus;
        if !self.inventory.push_equipped(weapon) {
            return false;
        }
        self.combatant.stats.attack.modify(bonus as i64);
        true
    }

    /// Equips armor, first reversing the bonus of the piece it replaces.
    pub fn equip_armor(&mut self, armor: Armor) -> Option<Armor> {
        let bonus = armor.defense_bonus;
        let previous = self.inventory.replace_armor(armor);
        if let Some(old) = &previous {
            self.combatant
                .stats
                .defense
                .modify(-(old.defense_bonus as i64));
        }
        self.combatant.stats.defense.modify(bonus as i64);
        previous
    }

    /// Drinks the first potion named `name`. Returns the HP recovered, or
    /// None if no such potion is carried or the hero is down.
    pub fn use_potion(&mut self, name: &str) -> Option<u32> {
        if !self.is_alive() {
            return None;
        }
        let potion = self.inventory.take_potion(name)?;
        Some(self.combatant.heal(potion.heal))
    }
}

impl Fighter for Hero {
    fn combatant(&self) -> &Combatant {
        &self.combatant
    }

    fn combatant_mut(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    fn collect_hit_reward(&mut self, amount: u32) {
        self.currency = self.currency.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ArmorSlot, WeaponCategory};

    #[test]
    fn test_create_vanguard() {
        let hero = create_hero(HeroClass::Vanguard, "Aria");
        assert_eq!(hero.name(), "Aria");
        assert_eq!(hero.combatant.stats.health.value(), 150);
        assert_eq!(hero.attack(), 45, "25 base + Voidslayer 20");
        assert_eq!(hero.defense(), 40, "10 base + Plate Armor 30");
        assert_eq!(hero.currency, 0);
        assert_eq!(hero.essence, 0);
        assert_eq!(hero.checkpoint, 1);
        assert_eq!(hero.inventory.equipped_weapons().len(), 1);
        assert_eq!(hero.inventory.owned().len(), 2);
    }

    #[test]
    fn test_create_each_class_attack() {
        let expected = [
            (HeroClass::Vanguard, 45),
            (HeroClass::Weaver, 48),
            (HeroClass::Alchemist, 35),
            (HeroClass::Rogue, 65),
            (HeroClass::Guardian, 27),
        ];
        for (class, attack) in expected {
            let hero = create_hero(class, "Test");
            assert_eq!(hero.attack(), attack, "{:?}", class);
            assert_eq!(hero.combatant.role, Role::Hero);
        }
    }

    #[test]
    fn test_equip_weapon_rejects_unowned() {
        let mut hero = create_hero(HeroClass::Rogue, "Vex");
        let blade = Weapon::new("Windblade", 32, WeaponCategory::Dagger, "", 100);
        assert!(!hero.equip_weapon(blade.clone()));
        assert_eq!(hero.attack(), 65);

        hero.inventory.add(Item::Weapon(blade.clone()));
        assert!(hero.equip_weapon(blade));
        assert_eq!(hero.attack(), 97);
    }

    #[test]
    fn test_equip_armor_swaps_bonus() {
        let mut hero = create_hero(HeroClass::Guardian, "Bram");
        assert_eq!(hero.defense(), 40);
        let previous = hero.equip_armor(Armor::new("Swift Boots", 15, ArmorSlot::Boots));
        assert_eq!(previous.map(|a| a.name), Some("Plate Armor".to_string()));
        assert_eq!(hero.defense(), 25);
    }

    #[test]
    fn test_use_potion_heals_and_consumes() {
        let mut hero = create_hero(HeroClass::Alchemist, "Mira");
        hero.combatant.take_hit(110);
        let hp = hero.combatant.stats.health.value();
        assert_eq!(hp, 20);
        assert_eq!(hero.use_potion("Health Potion"), Some(75));
        assert_eq!(hero.use_potion("Health Potion"), Some(25));
        assert_eq!(hero.use_potion("Health Potion"), None);
    }

    #[test]
    fn test_fallen_hero_keeps_potions() {
        let mut hero = create_hero(HeroClass::Alchemist, "Mira");
        hero.combatant.take_hit(1_000);
        assert!(!hero.is_alive());

        assert_eq!(hero.use_potion("Health Potion"), None);
        let potions = hero
            .inventory
            .owned()
            .iter()
            .filter(|item| matches!(item, Item::Potion(_)))
            .count();
        assert_eq!(potions, 2);
    }

    #[test]
    fn test_hit_reward_accumulates() {
        let mut hero = create_hero(HeroClass::Weaver, "Sol");
        hero.collect_hit_reward(15);
        hero.collect_hit_reward(15);
        assert_eq!(hero.currency, 30);
    }
}
