//! Tower clear rewards.

use crate::character::Hero;
use crate::combat::Fighter;
use crate::towers::Tower;

/// Pays every living hero the roster's full currency drop. Returns the
/// amount each survivor received.
pub fn distribute_currency(tower: &Tower, heroes: &mut [Hero]) -> u32 {
    let per_hero = tower.total_currency_reward();
    for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
        hero.currency = hero.currency.saturating_add(per_hero);
    }
    per_hero
}

/// Splits the roster's essence evenly between living heroes, dropping the
/// remainder. Returns each survivor's share.
pub fn distribute_essence(tower: &Tower, heroes: &mut [Hero]) -> u32 {
    let alive = heroes.iter().filter(|h| h.is_alive()).count() as u32;
    if alive == 0 {
        return 0;
    }
    let share = tower.total_essence_reward() / alive;
    for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
        hero.essence = hero.essence.saturating_add(share);
    }
    share
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{create_hero, HeroClass};
    use crate::combat::EnemyKind;

    fn party(n: usize) -> Vec<Hero> {
        (0..n)
            .map(|i| create_hero(HeroClass::Vanguard, &format!("H{}", i)))
            .collect()
    }

    #[test]
    fn test_each_survivor_gets_full_currency() {
        let tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion; 5]);
        let mut heroes = party(2);

        assert_eq!(distribute_currency(&tower, &mut heroes), 100);
        assert_eq!(heroes[0].currency, 100);
        assert_eq!(heroes[1].currency, 100);
    }

    #[test]
    fn test_dead_heroes_get_nothing() {
        let tower = Tower::from_kinds(1, &[EnemyKind::JuniorGiant]);
        let mut heroes = party(3);
        heroes[1].combatant.take_hit(10_000);

        distribute_currency(&tower, &mut heroes);
        distribute_essence(&tower, &mut heroes);
        assert_eq!(heroes[1].currency, 0);
        assert_eq!(heroes[1].essence, 0);
        assert_eq!(heroes[0].essence, 10);
        assert_eq!(heroes[2].essence, 10);
    }

    #[test]
    fn test_essence_remainder_is_dropped() {
        // 5 + 50 = 55 essence over 3 heroes.
        let tower = Tower::from_kinds(10, &[EnemyKind::BlightedMinion, EnemyKind::BlightGiant]);
        let mut heroes = party(3);

        assert_eq!(distribute_essence(&tower, &mut heroes), 18);
        let total: u32 = heroes.iter().map(|h| h.essence).sum();
        assert_eq!(total, 54);
    }

    #[test]
    fn test_no_survivors_no_essence() {
        let tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion]);
        let mut heroes = party(1);
        heroes[0].combatant.take_hit(10_000);
        assert_eq!(distribute_essence(&tower, &mut heroes), 0);
    }
}
