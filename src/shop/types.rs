use serde::{Deserialize, Serialize};

use crate::items::Weapon;

/// Why a selected offer was not bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    AlreadyOwned,
    /// An earlier pick in the same batch has this name.
    AlreadySelected,
    InsufficientFunds,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::AlreadyOwned => "already owned",
            SkipReason::AlreadySelected => "already selected",
            SkipReason::InsufficientFunds => "not enough currency",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedOffer {
    /// 1-based position in the offer list.
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Result of one purchase batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    /// Paid for and stored in the inventory.
    pub purchased: Vec<Weapon>,
    pub skipped: Vec<SkippedOffer>,
    /// Paid for, but the inventory had no room.
    pub dropped: Vec<Weapon>,
    pub total_spent: u32,
    pub remaining_currency: u32,
}

impl PurchaseReceipt {
    pub fn bought_anything(&self) -> bool {
        !self.purchased.is_empty() || !self.dropped.is_empty()
    }
}
