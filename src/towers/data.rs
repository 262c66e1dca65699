//! Tower roster content.

use super::tower::Tower;
use crate::combat::EnemyKind;
use crate::core::constants::{
    TOWER_COUNT, WAVE_BASE_ENEMIES, WAVE_ENEMIES_PER_TOWER, WAVE_TOWER_COUNT,
};

use EnemyKind::{BlightGiant, BlightedMinion, JuniorGiant};

/// Hand-authored rosters for towers 10-20, as (kind, count) groups in
/// roster order.
const BOSS_ROSTERS: [&[(EnemyKind, usize)]; TOWER_COUNT - WAVE_TOWER_COUNT] = [
    // 10
    &[(BlightedMinion, 10), (BlightGiant, 1)],
    // 11
    &[(BlightedMinion, 12)],
    // 12
    &[(BlightedMinion, 15)],
    // 13
    &[(BlightedMinion, 18)],
    // 14
    &[(JuniorGiant, 1)],
    // 15
    &[(JuniorGiant, 2)],
    // 16
    &[(BlightedMinion, 15), (JuniorGiant, 3)],
    // 17
    &[(BlightGiant, 1)],
    // 18
    &[(BlightedMinion, 10), (JuniorGiant, 2)],
    // 19
    &[(BlightedMinion, 10), (JuniorGiant, 3)],
    // 20
    &[(BlightedMinion, 15), (JuniorGiant, 5), (BlightGiant, 2)],
];

/// Enemy kinds for a 1-based tower number, in roster order. Empty for
/// numbers outside 1..=20.
pub fn roster_for(number: usize) -> Vec<EnemyKind> {
    match number {
        1..=WAVE_TOWER_COUNT => {
            vec![BlightedMinion; WAVE_BASE_ENEMIES + WAVE_ENEMIES_PER_TOWER * number]
        }
        n if n > WAVE_TOWER_COUNT && n <= TOWER_COUNT => BOSS_ROSTERS[n - WAVE_TOWER_COUNT - 1]
            .iter()
            .flat_map(|&(kind, count)| std::iter::repeat(kind).take(count))
            .collect(),
        _ => Vec::new(),
    }
}

/// All twenty towers, fresh.
pub fn build_towers() -> Vec<Tower> {
    (1..=TOWER_COUNT)
        .map(|n| Tower::from_kinds(n, &roster_for(n)))
        .collect()
}
