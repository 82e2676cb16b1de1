//! State definitions for the token vesting contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:token-vesting";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schedule parameters, fixed at instantiation
#[cw_serde]
pub struct Schedule {
    /// CW20 token being vested
    pub token: Addr,
    /// Block time (seconds) the first tranche starts counting from
    pub start: u64,
    /// Seconds per tranche
    pub duration: u64,
    /// Number of tranches
    pub num_vestings: u32,
}

pub const SCHEDULE: Item<Schedule> = Item::new("schedule");

/// Total amount paid out so far
pub const RELEASED: Item<Uint128> = Item::new("released");
