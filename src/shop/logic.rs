//! Offer filtering and batched purchases.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use super::types::{PurchaseReceipt, SkipReason, SkippedOffer};
use crate::character::Hero;
use crate::core::constants::{
    SHOP_LOW_TIER_HEADROOM, SHOP_LOW_TIER_LIMIT, SHOP_MAX_OFFERS, SHOP_MID_TIER_HEADROOM,
    SHOP_MID_TIER_LIMIT, SHOP_SHIELD_HEADROOM,
};
use crate::error::{GameError, Result, SelectionFault};
use crate::items::{Catalog, Item, Weapon, WeaponCategory};

/// Highest price the shop will show a hero holding `currency`, or `None`
/// once the hero is rich enough to see everything.
pub fn price_ceiling(currency: u32) -> Option<u32> {
    if currency < SHOP_LOW_TIER_LIMIT {
        Some(currency + SHOP_LOW_TIER_HEADROOM)
    } else if currency < SHOP_MID_TIER_LIMIT {
        Some(currency + SHOP_MID_TIER_HEADROOM)
    } else {
        None
    }
}

/// Builds the hero's shop offer list.
///
/// Only the class's weapon category is offered, filtered by the price
/// ceiling. If nothing passes the filter the whole class list is used. The
/// list is shuffled and cut to at most eight entries. When no shield made it
/// in, the cheapest shield within reach takes the last slot.
pub fn available_weapons(catalog: &Catalog, hero: &Hero, rng: &mut impl Rng) -> Vec<Weapon> {
    let category = hero.class.weapon_category();
    let ceiling = price_ceiling(hero.currency);

    let mut offers: Vec<Weapon> = catalog
        .weapons_in(category)
        .filter(|w| ceiling.map_or(true, |c| w.price <= c))
        .cloned()
        .collect();
    if offers.is_empty() {
        offers = catalog.weapons_in(category).cloned().collect();
    }

    offers.shuffle(rng);
    offers.truncate(SHOP_MAX_OFFERS);

    if !offers.iter().any(|w| w.category.is_defensive()) {
        let reach = hero.currency.saturating_add(SHOP_SHIELD_HEADROOM);
        let shield = catalog
            .weapons_in(WeaponCategory::Shield)
            .filter(|w| w.price <= reach)
            .min_by_key(|w| w.price);
        if let Some(shield) = shield {
            offers.truncate(SHOP_MAX_OFFERS - 1);
            offers.push(shield.clone());
        }
    }
    offers
}

/// Cheapest offer the hero does not already own.
pub fn cheapest_unowned_price(hero: &Hero, offers: &[Weapon]) -> Option<u32> {
    offers
        .iter()
        .filter(|w| !hero.inventory.owns_weapon(w))
        .map(|w| w.price)
        .min()
}

fn validate_indices(indices: &[usize], len: usize) -> Result<BTreeSet<usize>> {
    let mut seen = BTreeSet::new();
    for &index in indices {
        if index == 0 || index > len {
            return Err(GameError::InvalidSelection {
                index,
                reason: SelectionFault::OutOfRange { len },
            });
        }
        if !seen.insert(index) {
            return Err(GameError::InvalidSelection {
                index,
                reason: SelectionFault::Duplicate,
            });
        }
    }
    Ok(seen)
}

/// Buys the selected offers (1-based indices) in ascending index order.
///
/// The whole selection is validated before anything changes. Offers the
/// hero already owns, names picked earlier in the batch, and offers that
/// would overdraw the running total are skipped. Payment is taken once at
/// the end; a purchase that does not fit in the inventory is still paid for
/// and reported as dropped.
pub fn purchase_batch(hero: &mut Hero, offers: &[Weapon], indices: &[usize]) -> Result<PurchaseReceipt> {
    let picks = validate_indices(indices, offers.len())?;

    let mut receipt = PurchaseReceipt::default();
    let mut chosen: Vec<&Weapon> = Vec::new();
    let mut total: u32 = 0;

    for index in picks {
        let weapon = &offers[index - 1];
        let reason = if hero.inventory.owns_weapon(weapon) {
            Some(SkipReason::AlreadyOwned)
        } else if chosen.iter().any(|w| w.name == weapon.name) {
            Some(SkipReason::AlreadySelected)
        } else if total.saturating_add(weapon.price) > hero.currency {
            Some(SkipReason::InsufficientFunds)
        } else {
            None
        };

        match reason {
            Some(reason) => receipt.skipped.push(SkippedOffer {
                index,
                name: weapon.name.clone(),
                reason,
            }),
            None => {
                total += weapon.price;
                chosen.push(weapon);
            }
        }
    }

    hero.currency -= total;
    for weapon in chosen {
        match hero.inventory.try_add(Item::Weapon(weapon.clone())) {
            Ok(()) => receipt.purchased.push(weapon.clone()),
            Err(e) => {
                warn!(hero = %hero.name(), weapon = %weapon.name, error = %e, "purchase dropped");
                receipt.dropped.push(weapon.clone());
            }
        }
    }

    receipt.total_spent = total;
    receipt.remaining_currency = hero.currency;
    Ok(receipt)
}
