//! The fixed equipment catalog.
//!
//! Built once per process with [`Catalog::standard`] and handed to the shop
//! explicitly. The tables are content, not derived from any formula.

use super::types::{Armor, ArmorSlot, Weapon, WeaponCategory};

#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    armors: Vec<Armor>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The stock weapon and armor tables.
    pub fn standard() -> Self {
        let mut weapons = Vec::new();
        for category in WeaponCategory::all() {
            weapons.extend(weapon_table(category));
        }
        Self {
            weapons,
            armors: armor_table(),
        }
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn armors(&self) -> &[Armor] {
        &self.armors
    }

    /// Weapons of one category, in table order.
    pub fn weapons_in(&self, category: WeaponCategory) -> impl Iterator<Item = &Weapon> + '_ {
        self.weapons.iter().filter(move |w| w.category == category)
    }

    pub fn find_weapon(&self, name: &str, category: WeaponCategory) -> Option<&Weapon> {
        self.weapons_in(category).find(|w| w.name == name)
    }

    pub fn find_armor(&self, name: &str) -> Option<&Armor> {
        self.armors.iter().find(|a| a.name == name)
    }
}

fn weapon_table(category: WeaponCategory) -> Vec<Weapon> {
    use WeaponCategory::*;
    let rows: &[(&str, u32, &str, u32)] = match category {
        Sword => &[
            ("Blade of the Six Kings", 55, "Lifesteal 10%", 150),
            ("Windtalker", 40, "Attack Speed +15%", 120),
            ("Berserker's Fury", 45, "Crit Damage +40%", 130),
            ("Rose Gold Meteor", 50, "Magic Resist 25%", 140),
            ("Scarlet Phantom", 35, "Crit Rate +20%", 100),
            ("Blade of Despair", 60, "Extra DMG to low HP", 160),
            ("Golden Staff", 30, "Attack Speed +25%", 90),
            ("Flying Dagger", 28, "Movement Speed", 80),
            ("Terror Blade", 48, "VS Hero 15%", 135),
            ("Great Dragon Sword", 52, "AS+10% Lifesteal 8%", 145),
            ("Holy Blade", 45, "True Damage 20", 130),
            ("Wrist Slasher", 32, "Bounce Attack", 95),
        ],
        Staff => &[
            ("Starlium Staff", 45, "Magic Power +30%", 130),
            ("Crystal Orchid", 40, "Cooldown 10%", 120),
            ("Enchanted Talisman", 35, "Mana Regen", 100),
            ("Blood Wings", 50, "Spell Vamp 15%", 140),
            ("Genius Wand", 38, "Magic PEN 20", 115),
            ("Lightning Truncheon", 42, "Burst DMG", 125),
            ("Divine Glaive", 48, "Magic PEN 35", 135),
            ("Clock of Destiny", 35, "HP+500", 100),
            ("Fleeting Time", 40, "Reset Ultimate", 120),
            ("Winter Truncheon", 38, "Stun Immunity", 115),
            ("Glowing Wand", 32, "Burn Damage", 95),
            ("Staff of the Nine Realms", 55, "Ultimate CD-20%", 150),
        ],
        Dagger => &[
            ("Corrosion Dagger", 25, "Attack Speed +20%", 80),
            ("Haas's Claws", 30, "Lifesteal 15%", 95),
            ("Blade of Heptaseas", 28, "Jungle DMG 30%", 90),
            ("Demon Hunter Sword", 35, "VS Minions +30%", 110),
            ("Windblade", 32, "Movement Speed", 100),
            ("KillerExecutioner", 38, "Execute Low HP", 120),
            ("Bahamut", 35, "AOE Magic DMG", 110),
            ("Death Sickle", 30, "Slow Effect", 95),
            ("Malefic Roar", 45, "Physical PEN 30", 135),
            ("Necklace of Durance", 25, "Healing Reduction 50%", 80),
        ],
        Mace => &[
            ("War Axe", 45, "Damage +10%", 130),
            ("Cursed Helmet", 30, "AOE Damage", 95),
            ("Bloodlust Axe", 40, "Spell Vamp 15%", 120),
            ("Malefic Roar", 50, "Physical PEN 30", 140),
            ("Hunter's Strike", 35, "VS Jungle 25%", 110),
            ("Brute Force", 42, "ATK+DEF 5%", 125),
            ("Endless Battle", 38, "True Damage", 115),
            ("Queen's Wings", 40, "Damage Reduction 30%", 120),
            ("Radiant Armor", 35, "Counter Attack", 110),
            ("Athenian Shield", 30, "Block 50%", 95),
        ],
        Shield => &[
            ("Aegis", 20, "HP +500", 70),
            ("Dominance Ice", 25, "Attack Speed Slow", 85),
            ("Antique Cuirass", 30, "AOE Defense", 100),
            ("Cursed Shield", 25, "Reflect DMG", 85),
            ("Twilight Armor", 28, "VS Marksman 20%", 95),
            ("Oracle Armor", 22, "Shield Effect +30%", 75),
            ("Guardian Plate", 35, "VS Mage 25%", 110),
            ("Dreadnought Plate", 32, "Push Back", 105),
            ("Rose's Metal", 26, "Lifesteal Reduction", 90),
            ("Athena's Shield", 30, "Magic Shield", 100),
        ],
        Bow => &[
            ("Swift Crossbow", 45, "Attack Speed +20%", 130),
            ("Demon's Bane", 50, "VS Tank 25%", 140),
            ("Windbow", 40, "Movement Speed", 120),
            ("Golden Arrow", 35, "Gold Gain +15%", 110),
            ("Arrow of Ice", 42, "Slow Effect", 125),
            ("Arrow of Death", 55, "Execute", 150),
            ("Serpent's Maw", 38, "Lifedrain", 115),
            ("Berserker's Arrow", 48, "Crit Rate +25%", 135),
        ],
    };

    rows.iter()
        .map(|&(name, damage, passive, price)| Weapon::new(name, damage, category, passive, price))
        .collect()
}

fn armor_table() -> Vec<Armor> {
    use ArmorSlot::*;
    vec![
        Armor::new("Guardian Plate", 50, Chest),
        Armor::new("Crusader Emblem", 45, Chest),
        Armor::new("Twilight Armor", 40, Chest),
        Armor::new("Oracle Armor", 35, Chest),
        Armor::new("Brute Force", 48, Chest),
        Armor::new("Steel Helmet", 25, Helmet),
        Armor::new("Assault Helmet", 30, Helmet),
        Armor::new("Dreadnought Plate", 35, Helmet),
        Armor::new("Tough Boots", 20, Boots),
        Armor::new("Warrior Boots", 25, Boots),
        Armor::new("Swift Boots", 15, Boots),
        Armor::new("Demon Shoes", 20, Boots),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sizes() {
        let catalog = Catalog::standard();
        let count = |c| catalog.weapons_in(c).count();
        assert_eq!(count(WeaponCategory::Sword), 12);
        assert_eq!(count(WeaponCategory::Staff), 12);
        assert_eq!(count(WeaponCategory::Dagger), 10);
        assert_eq!(count(WeaponCategory::Mace), 10);
        assert_eq!(count(WeaponCategory::Shield), 10);
        assert_eq!(count(WeaponCategory::Bow), 8);
        assert_eq!(catalog.weapons().len(), 62);
        assert_eq!(catalog.armors().len(), 12);
    }

    #[test]
    fn test_shared_name_across_categories() {
        let catalog = Catalog::standard();
        let dagger = catalog
            .find_weapon("Malefic Roar", WeaponCategory::Dagger)
            .unwrap();
        let mace = catalog
            .find_weapon("Malefic Roar", WeaponCategory::Mace)
            .unwrap();
        assert_eq!(dagger.damage_bonus, 45);
        assert_eq!(mace.damage_bonus, 50);
        assert!(!dagger.same_as(mace));
    }

    #[test]
    fn test_cheapest_shield_is_aegis() {
        let catalog = Catalog::standard();
        let cheapest = catalog
            .weapons_in(WeaponCategory::Shield)
            .min_by_key(|w| w.price)
            .unwrap();
        assert_eq!(cheapest.name, "Aegis");
        assert_eq!(cheapest.price, 70);
    }

    #[test]
    fn test_find_armor() {
        let catalog = Catalog::standard();
        let boots = catalog.find_armor("Swift Boots").unwrap();
        assert_eq!(boots.defense_bonus, 15);
        assert_eq!(boots.slot, ArmorSlot::Boots);
        assert!(catalog.find_armor("Paper Hat").is_none());
    }
}
