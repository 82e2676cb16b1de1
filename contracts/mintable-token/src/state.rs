//! State definitions for the mintable token contract
//!
//! Balances, allowances and token info live in `cw20_base::state`; this
//! module only holds the minter registry and permit bookkeeping.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:mintable-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest `max_limit` a minter may be granted (10^36 base units)
pub const MAX_MINTER_LIMIT: Uint128 =
    Uint128::new(1_000_000_000_000_000_000_000_000_000_000_000_000);

// ============================================================================
// Minter Registry
// ============================================================================

/// Rate limit state of one minter
#[cw_serde]
pub struct MinterLimit {
    /// Ceiling the limit refills to
    pub max_limit: Uint128,
    /// Limit as of `last_updated` (not including refill since then)
    pub current_limit: Uint128,
    /// Block time (seconds) of the last mint or reconfiguration
    pub last_updated: u64,
    /// Seconds needed to refill from zero to `max_limit`
    pub duration: u64,
}

/// minter => limit state
pub const MINTER_LIMITS: Map<&Addr, MinterLimit> = Map::new("minter_limits");

/// Dense sequence of active minters: position => minter
pub const MINTERS: Map<u32, Addr> = Map::new("minters");

/// Reverse index: minter => position in `MINTERS`
pub const MINTER_INDEX: Map<&Addr, u32> = Map::new("minter_index");

/// Number of entries in `MINTERS`
pub const MINTER_COUNT: Item<u32> = Item::new("minter_count");

// ============================================================================
// Permit
// ============================================================================

/// Fixed signing domain, captured at instantiation
#[cw_serde]
pub struct PermitDomain {
    /// Token name at instantiation; later renames do not change it
    pub name: String,
    /// Bech32 prefix used to render recovered signer accounts
    pub account_prefix: String,
}

pub const PERMIT_DOMAIN: Item<PermitDomain> = Item::new("permit_domain");

/// owner => next permit nonce
pub const PERMIT_NONCES: Map<&Addr, u64> = Map::new("permit_nonces");
