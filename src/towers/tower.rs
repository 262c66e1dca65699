use serde::{Deserialize, Serialize};

use crate::combat::{Enemy, EnemyKind, Fighter};

/// One campaign stage: a fixed enemy roster and its clearance flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    /// 1-based position in the campaign.
    pub number: usize,
    /// Dead enemies stay in the roster.
    pub roster: Vec<Enemy>,
    cleared: bool,
}

impl Tower {
    pub fn new(number: usize, roster: Vec<Enemy>) -> Self {
        Self {
            number,
            roster,
            cleared: false,
        }
    }

    pub fn from_kinds(number: usize, kinds: &[EnemyKind]) -> Self {
        Self::new(number, kinds.iter().map(|&k| Enemy::new(k)).collect())
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn alive_count(&self) -> usize {
        self.roster.iter().filter(|e| e.is_alive()).count()
    }

    /// Marks the tower cleared once every enemy is down. Never un-clears.
    pub fn check_clear(&mut self) -> bool {
        if !self.cleared && self.alive_count() == 0 {
            self.cleared = true;
        }
        self.cleared
    }

    /// Currency the whole roster drops (paid to each surviving hero).
    pub fn total_currency_reward(&self) -> u32 {
        self.roster.iter().map(|e| e.currency_reward()).sum()
    }

    pub fn total_essence_reward(&self) -> u32 {
        self.roster.iter().map(|e| e.essence_reward()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tower_not_cleared() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion; 3]);
        assert!(!tower.is_cleared());
        assert!(!tower.check_clear());
        assert_eq!(tower.alive_count(), 3);
    }

    #[test]
    fn test_clears_only_when_all_dead() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion; 2]);
        tower.roster[0].combatant.take_hit(1_000);
        assert!(!tower.check_clear());
        tower.roster[1].combatant.take_hit(1_000);
        assert!(tower.check_clear());
        assert_eq!(tower.roster.len(), 2, "dead enemies remain listed");
    }

    #[test]
    fn test_cleared_is_one_way() {
        let mut tower = Tower::from_kinds(1, &[EnemyKind::BlightedMinion]);
        tower.roster[0].combatant.take_hit(1_000);
        tower.check_clear();
        tower.roster[0].combatant.revive();
        assert!(tower.check_clear());
    }

    #[test]
    fn test_reward_totals() {
        let tower = Tower::from_kinds(
            10,
            &[
                EnemyKind::BlightedMinion,
                EnemyKind::JuniorGiant,
                EnemyKind::BlightGiant,
            ],
        );
        assert_eq!(tower.total_currency_reward(), 170);
        assert_eq!(tower.total_essence_reward(), 75);
    }

    #[test]
    fn test_empty_tower_clears_immediately() {
        let mut tower = Tower::new(1, Vec::new());
        assert!(tower.check_clear());
    }
}
