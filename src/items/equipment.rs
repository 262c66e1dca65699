//! Equip phase rules: how many weapons may be active, and swapping the set.

use serde::{Deserialize, Serialize};

use super::types::Weapon;
use crate::character::Hero;
use crate::core::constants::{EQUIP_BONUS_THRESHOLD, EQUIP_LIMIT_BASE, EQUIP_LIMIT_BONUS};
use crate::error::{GameError, Result, SelectionFault};

/// Weapon slots granted by the currency a tower paid out.
pub fn equip_limit(tower_currency: u32) -> usize {
    if tower_currency >= EQUIP_BONUS_THRESHOLD {
        EQUIP_LIMIT_BONUS
    } else {
        EQUIP_LIMIT_BASE
    }
}

/// Result of an equip swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipSummary {
    pub equipped: Vec<Weapon>,
    pub total_attack_bonus: u32,
    /// Attack after the swap.
    pub attack: u32,
}

/// Checks 1-based `picks` against `owned` weapons and a slot `limit`.
///
/// Exactly `min(limit, owned)` distinct in-range picks are required.
pub fn validate_picks(picks: &[usize], owned: usize, limit: usize) -> Result<()> {
    if picks.len() > limit {
        return Err(GameError::InvalidSelection {
            index: picks[limit],
            reason: SelectionFault::TooMany { limit },
        });
    }
    let mut seen = Vec::with_capacity(picks.len());
    for &pick in picks {
        if pick == 0 || pick > owned {
            return Err(GameError::InvalidSelection {
                index: pick,
                reason: SelectionFault::OutOfRange { len: owned },
            });
        }
        if seen.contains(&pick) {
            return Err(GameError::InvalidSelection {
                index: pick,
                reason: SelectionFault::Duplicate,
            });
        }
        seen.push(pick);
    }
    let expected = limit.min(owned);
    if picks.len() < expected {
        return Err(GameError::PickCount {
            expected,
            got: picks.len(),
        });
    }
    Ok(())
}

/// Replaces the hero's equipped weapons with the 1-based `picks` from their
/// owned weapons.
///
/// Nothing changes if the picks are invalid, including two picks that are
/// copies of the same weapon. Old bonuses come off before the
/// new ones go on, and both moves clamp, so a capped attack stat can drift
/// below its pre-swap baseline.
pub fn choose_equipped(hero: &mut Hero, limit: usize, picks: &[usize]) -> Result<EquipSummary> {
    let owned: Vec<Weapon> = hero
        .inventory
        .owned_weapons()
        .into_iter()
        .cloned()
        .collect();
    validate_picks(picks, owned.len(), limit)?;
    for (i, &pick) in picks.iter().enumerate() {
        if picks[..i].iter().any(|&p| owned[p - 1].same_as(&owned[pick - 1])) {
            return Err(GameError::InvalidSelection {
                index: pick,
                reason: SelectionFault::Duplicate,
            });
        }
    }

    for old in hero.inventory.take_equipped() {
        hero.combatant
            .stats
            .attack
            .modify(-(old.damage_bonus as i64));
    }

    let mut ordered = picks.to_vec();
    ordered.sort_unstable();

    let mut total_attack_bonus = 0;
    for pick in ordered {
        let weapon = owned[pick - 1].clone();
        let bonus = weapon.damage_bonus;
        if hero.inventory.push_equipped(weapon) {
            total_attack_bonus += bonus;
        }
    }
    hero.combatant
        .stats
        .attack
        .modify(total_attack_bonus as i64);

    Ok(EquipSummary {
        equipped: hero.inventory.equipped_weapons().to_vec(),
        total_attack_bonus,
        attack: hero.attack(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_hero, HeroClass};
    use crate::items::{Item, WeaponCategory};

    fn staff(name: &str, bonus: u32) -> Weapon {
        Weapon::new(name, bonus, WeaponCategory::Staff, "", 100)
    }

    fn weaver_with_staffs() -> Hero {
        let mut hero = create_hero(HeroClass::Weaver, "Sol");
        hero.inventory.add(Item::Weapon(staff("Genius Wand", 10)));
        hero.inventory.add(Item::Weapon(staff("Glowing Wand", 5)));
        hero.inventory.add(Item::Weapon(staff("Blood Wings", 7)));
        hero
    }

    #[test]
    fn test_equip_limit_thresholds() {
        assert_eq!(equip_limit(0), 2);
        assert_eq!(equip_limit(149), 2);
        assert_eq!(equip_limit(150), 3);
        assert_eq!(equip_limit(10_000), 3);
    }

    #[test]
    fn test_choose_equipped_replaces_set() {
        let mut hero = weaver_with_staffs();
        assert_eq!(hero.attack(), 48);

        let summary = choose_equipped(&mut hero, 2, &[2, 3]).unwrap();
        assert_eq!(summary.total_attack_bonus, 15);
        assert_eq!(summary.attack, 45, "30 base + 10 + 5");
        let names: Vec<_> = summary.equipped.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Genius Wand", "Glowing Wand"]);
    }

    #[test]
    fn test_choose_equipped_is_not_additive() {
        let mut hero = weaver_with_staffs();
        choose_equipped(&mut hero, 2, &[2, 3]).unwrap();
        let summary = choose_equipped(&mut hero, 2, &[1, 4]).unwrap();
        assert_eq!(summary.attack, 30 + 18 + 7);
        assert_eq!(hero.inventory.equipped_weapons().len(), 2);
    }

    #[test]
    fn test_duplicate_pick_rejected_before_mutation() {
        let mut hero = weaver_with_staffs();
        let err = choose_equipped(&mut hero, 2, &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidSelection {
                reason: SelectionFault::Duplicate,
                ..
            }
        ));
        assert_eq!(hero.attack(), 48);
        assert_eq!(hero.inventory.equipped_weapons()[0].name, "Starfire Staff");
    }

    #[test]
    fn test_same_weapon_twice_rejected_before_mutation() {
        let mut hero = create_hero(HeroClass::Rogue, "Vex");
        let blade = Weapon::new("Windblade", 32, WeaponCategory::Dagger, "", 100);
        hero.inventory.add(Item::Weapon(blade.clone()));
        hero.inventory.add(Item::Weapon(blade));
        assert_eq!(hero.inventory.owned_weapons().len(), 3);

        let err = choose_equipped(&mut hero, 2, &[2, 3]).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSelection {
                index: 3,
                reason: SelectionFault::Duplicate,
            }
        );
        assert_eq!(hero.attack(), 65);
        assert_eq!(hero.inventory.equipped_weapons()[0].name, "Shadowfang");

        let summary = choose_equipped(&mut hero, 2, &[1, 2]).unwrap();
        assert_eq!(summary.total_attack_bonus, 25 + 32);
        assert_eq!(
            summary.total_attack_bonus,
            hero.inventory.equipped_attack_bonus()
        );
        assert_eq!(summary.attack, 40 + 25 + 32);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut hero = weaver_with_staffs();
        assert!(choose_equipped(&mut hero, 2, &[1, 5]).is_err());
        assert!(choose_equipped(&mut hero, 2, &[0, 1]).is_err());
    }

    #[test]
    fn test_pick_count_must_fill_slots() {
        let mut hero = weaver_with_staffs();
        assert_eq!(
            choose_equipped(&mut hero, 3, &[1, 2]).unwrap_err(),
            GameError::PickCount {
                expected: 3,
                got: 2,
            }
        );
        assert!(choose_equipped(&mut hero, 2, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_fewer_owned_than_slots() {
        let mut hero = create_hero(HeroClass::Rogue, "Vex");
        let summary = choose_equipped(&mut hero, 3, &[1]).unwrap();
        assert_eq!(summary.equipped.len(), 1);
        assert_eq!(summary.attack, 65);
    }

    #[test]
    fn test_clamped_attack_drifts_after_swap() {
        let mut hero = create_hero(HeroClass::Rogue, "Vex");
        for (name, bonus) in [("Malefic Roar", 45), ("KillerExecutioner", 38)] {
            hero.inventory.add(Item::Weapon(Weapon::new(
                name,
                bonus,
                WeaponCategory::Dagger,
                "",
                120,
            )));
        }
        // 40 + 25 + 45 + 38 = 148 clamps to 100.
        let summary = choose_equipped(&mut hero, 3, &[1, 2, 3]).unwrap();
        assert_eq!(summary.attack, 100);
        // Removing 108 from 100 floors at 0; re-adding 25 leaves 25, not 65.
        let summary = choose_equipped(&mut hero, 1, &[1]).unwrap();
        assert_eq!(summary.attack, 25);
    }
}
