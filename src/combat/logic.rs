//! Single-strike resolution and target picking.

use rand::Rng;

use super::types::Fighter;
use crate::error::{GameError, Result};

/// Resolves one attack and returns the damage dealt.
///
/// The defender must be alive. Heroes collect their per-hit reward whether or
/// not the hit kills.
pub fn resolve_attack<A, D>(attacker: &mut A, defender: &mut D) -> u32
where
    A: Fighter + ?Sized,
    D: Fighter + ?Sized,
{
    debug_assert!(defender.is_alive(), "attack on a dead combatant");
    let raw = attacker.combatant().stats.attack.value();
    let dealt = defender.combatant_mut().take_hit(raw);

    let reward = attacker.combatant().role.hit_reward();
    if reward > 0 {
        attacker.collect_hit_reward(reward);
    }
    dealt
}

/// Puts the fighter on guard until the next hit lands.
pub fn resolve_defend<F: Fighter + ?Sized>(fighter: &mut F) {
    fighter.combatant_mut().defend();
}

/// Indices of the living members of a line, in line order.
pub fn alive_indices<F: Fighter>(line: &[F]) -> Vec<usize> {
    line.iter()
        .enumerate()
        .filter(|(_, f)| f.is_alive())
        .map(|(i, _)| i)
        .collect()
}

/// Picks a uniformly random living member of `line`.
pub fn pick_target<F: Fighter>(
    attacker: &str,
    line: &[F],
    rng: &mut impl Rng,
) -> Result<usize> {
    let alive = alive_indices(line);
    if alive.is_empty() {
        return Err(GameError::NoLegalTarget {
            attacker: attacker.to_string(),
        });
    }
    Ok(alive[rng.gen_range(0..alive.len())])
}
