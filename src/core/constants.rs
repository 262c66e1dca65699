// Combat
pub const HERO_HIT_REWARD: u32 = 15;
pub const MIN_STRIKE_DAMAGE: u32 = 1;

// Stat defaults shared by every combatant
pub const ATTACK_MAX: u32 = 100;
pub const BASE_DEFENSE: u32 = 10;
pub const DEFENSE_MAX: u32 = 50;
pub const BASE_SPEED: u32 = 10;
pub const SPEED_MAX: u32 = 50;

// Party and inventory
pub const MAX_PARTY_SIZE: usize = 5;
pub const INVENTORY_CAPACITY: usize = 20;
pub const STARTING_CHECKPOINT: usize = 1;

// Campaign layout
pub const TOWER_COUNT: usize = 20;
pub const WAVE_TOWER_COUNT: usize = 9;
pub const WAVE_BASE_ENEMIES: usize = 5;
pub const WAVE_ENEMIES_PER_TOWER: usize = 3;

// Shop pricing tiers
pub const SHOP_LOW_TIER_LIMIT: u32 = 100;
pub const SHOP_MID_TIER_LIMIT: u32 = 250;
pub const SHOP_LOW_TIER_HEADROOM: u32 = 50;
pub const SHOP_MID_TIER_HEADROOM: u32 = 100;
pub const SHOP_MAX_OFFERS: usize = 8;
pub const SHOP_SHIELD_HEADROOM: u32 = 100;

// Equip slots
pub const EQUIP_LIMIT_BASE: usize = 2;
pub const EQUIP_LIMIT_BONUS: usize = 3;
pub const EQUIP_BONUS_THRESHOLD: u32 = 150;

// Runaway guards for unattended runs
pub const DEFAULT_MAX_ROUNDS_PER_BATTLE: u32 = 10_000;
pub const DEFAULT_MAX_BATTLES_PER_CAMPAIGN: u32 = 500;
