//! Shop and equip phase drivers.

use rand::Rng;
use tracing::{debug, info, warn};

use super::controller::PartyController;
use crate::character::Hero;
use crate::items::{choose_equipped, equip_limit, Catalog, EquipSummary};
use crate::shop::{available_weapons, cheapest_unowned_price, purchase_batch, PurchaseReceipt};

/// Runs shop rounds for one hero until they leave, go broke, or stop buying.
///
/// A round ends the phase when the hero can no longer afford the cheapest
/// offer they do not own. An invalid selection also ends it.
pub fn run_shop_phase<C, R>(
    catalog: &Catalog,
    hero: &mut Hero,
    controller: &mut C,
    rng: &mut R,
) -> Vec<PurchaseReceipt>
where
    C: PartyController + ?Sized,
    R: Rng,
{
    let mut receipts = Vec::new();

    loop {
        let offers = available_weapons(catalog, hero, rng);
        let picks = controller.choose_purchases(hero, &offers);
        if picks.is_empty() {
            debug!(hero = %hero.name(), "left the shop");
            break;
        }

        let receipt = match purchase_batch(hero, &offers, &picks) {
            Ok(receipt) => receipt,
            Err(e) => {
                warn!(hero = %hero.name(), error = %e, "shop selection rejected");
                break;
            }
        };
        info!(
            hero = %hero.name(),
            bought = receipt.purchased.len(),
            skipped = receipt.skipped.len(),
            spent = receipt.total_spent,
            remaining = receipt.remaining_currency,
            "shop round"
        );
        for skipped in &receipt.skipped {
            debug!(
                hero = %hero.name(),
                offer = skipped.index,
                weapon = %skipped.name,
                reason = skipped.reason.describe(),
                "offer skipped"
            );
        }
        let bought = receipt.bought_anything();
        receipts.push(receipt);
        if !bought {
            break;
        }

        match cheapest_unowned_price(hero, &offers) {
            Some(price) if hero.currency >= price => {}
            _ => break,
        }
    }

    receipts
}

/// Lets the controller pick the hero's active weapons for the next tower.
///
/// `tower_currency` is what the cleared tower paid out; it sets the slot
/// limit. Returns `None` when nothing changed.
pub fn run_equip_phase<C>(hero: &mut Hero, tower_currency: u32, controller: &mut C) -> Option<EquipSummary>
where
    C: PartyController + ?Sized,
{
    if hero.inventory.owned_weapons().is_empty() {
        return None;
    }

    let limit = equip_limit(tower_currency);
    let picks = controller.choose_equipped(hero, limit);
    match choose_equipped(hero, limit, &picks) {
        Ok(summary) => {
            info!(
                hero = %hero.name(),
                weapons = summary.equipped.len(),
                bonus = summary.total_attack_bonus,
                attack = summary.attack,
                "equipped"
            );
            Some(summary)
        }
        Err(e) => {
            warn!(hero = %hero.name(), error = %e, "equip selection rejected, keeping current set");
            None
        }
    }
}
