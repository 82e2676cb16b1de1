//! Message types for the token vesting contract

use common::OwnershipResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Receives released tokens; recorded as the contract owner
    pub beneficiary: String,
    /// CW20 token to vest
    pub token: String,
    /// Block time (seconds) tranches count from
    pub start: u64,
    /// Seconds per tranche
    pub duration: u64,
    /// Number of tranches
    pub num_vestings: u32,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Pay out everything unlocked so far to the beneficiary. Anyone may call.
    Release {},

    /// Propose a new beneficiary
    TransferOwnership { new_owner: String },

    AcceptOwnership {},

    CancelOwnershipTransfer {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ScheduleResponse)]
    Schedule {},

    #[returns(ReleasableAmountResponse)]
    ReleasableAmount {},

    #[returns(ReleasedResponse)]
    Released {},

    #[returns(StartResponse)]
    Start {},

    #[returns(DurationResponse)]
    Duration {},

    #[returns(NumVestingsResponse)]
    NumVestings {},

    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ScheduleResponse {
    pub beneficiary: Addr,
    pub token: Addr,
    pub start: u64,
    pub duration: u64,
    pub num_vestings: u32,
    /// Block time the last tranche unlocks
    pub end: u64,
    pub released: Uint128,
}

#[cw_serde]
pub struct ReleasableAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct ReleasedResponse {
    pub released: Uint128,
}

#[cw_serde]
pub struct StartResponse {
    pub start: u64,
}

#[cw_serde]
pub struct DurationResponse {
    pub duration: u64,
}

#[cw_serde]
pub struct NumVestingsResponse {
    pub num_vestings: u32,
}
