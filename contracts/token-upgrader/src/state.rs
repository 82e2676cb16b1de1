//! State definitions for the token upgrader contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:token-upgrader";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// New tokens paid out per old token
pub const UPGRADE_RATE: u128 = 60;

/// Token pair fixed by `Initialize`
#[cw_serde]
pub struct TokenPair {
    pub old_token: Addr,
    pub new_token: Addr,
}

/// Running totals
#[cw_serde]
pub struct UpgradeStats {
    pub total_upgrades: u64,
    pub total_old_collected: Uint128,
    pub total_new_distributed: Uint128,
}

/// Absent until initialized; never rewritten afterwards
pub const TOKEN_PAIR: Item<TokenPair> = Item::new("token_pair");

pub const PAUSED: Item<bool> = Item::new("paused");

pub const STATS: Item<UpgradeStats> = Item::new("stats");
