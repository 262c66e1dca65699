//! Decision seam between the campaign and whoever drives the party.

use crate::character::Hero;
use crate::combat::BattleEvent;
use crate::items::Weapon;

/// Supplies shop and equip decisions and observes battles.
///
/// Selections are 1-based. An empty purchase selection leaves the shop.
pub trait PartyController {
    /// Offer numbers to buy this shop round.
    fn choose_purchases(&mut self, hero: &Hero, offers: &[Weapon]) -> Vec<usize>;

    /// Owned-weapon numbers to equip, `min(limit, owned)` of them.
    fn choose_equipped(&mut self, hero: &Hero, limit: usize) -> Vec<usize>;

    fn on_battle_event(&mut self, _tower: usize, _event: &BattleEvent) {}
}

/// Greedy scripted controller: buys the hardest-hitting offers it can
/// afford and equips its strongest weapons.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPilot;

impl PartyController for AutoPilot {
    fn choose_purchases(&mut self, hero: &Hero, offers: &[Weapon]) -> Vec<usize> {
        let mut free_slots = hero
            .inventory
            .capacity()
            .saturating_sub(hero.inventory.len());
        let mut budget = hero.currency;

        let mut ranked: Vec<usize> = (0..offers.len()).collect();
        ranked.sort_by(|&a, &b| {
            offers[b]
                .damage_bonus
                .cmp(&offers[a].damage_bonus)
                .then(offers[a].price.cmp(&offers[b].price))
        });

        let mut picks: Vec<usize> = Vec::new();
        for i in ranked {
            if free_slots == 0 {
                break;
            }
            let offer = &offers[i];
            if offer.price > budget
                || hero.inventory.owns_weapon(offer)
                || picks.iter().any(|&p| offers[p - 1].name == offer.name)
            {
                continue;
            }
            budget -= offer.price;
            free_slots -= 1;
            picks.push(i + 1);
        }
        picks.sort_unstable();
        picks
    }

    fn choose_equipped(&mut self, hero: &Hero, limit: usize) -> Vec<usize> {
        let owned = hero.inventory.owned_weapons();
        let mut ranked: Vec<usize> = (0..owned.len()).collect();
        ranked.sort_by(|&a, &b| owned[b].damage_bonus.cmp(&owned[a].damage_bonus));
        ranked.truncate(limit);
        ranked.into_iter().map(|i| i + 1).collect()
    }
}
