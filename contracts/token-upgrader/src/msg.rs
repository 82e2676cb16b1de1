//! Message types for the token upgrader contract

use common::OwnershipResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for initialization, pause and withdrawals
    pub owner: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Fix the token pair (owner only, once)
    Initialize {
        old_token: String,
        new_token: String,
    },

    /// Exchange `amount` old tokens, using an existing allowance
    UpgradeToken { amount: Uint128 },

    /// Exchange `amount` old tokens, approving this contract with a permit
    /// signed by the caller
    UpgradeTokenByPermit {
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },

    // ========================================================================
    // Owner
    // ========================================================================
    /// Halt both upgrade paths
    Pause {},

    /// Resume upgrades
    Unpause {},

    /// Move CW20 tokens held by this contract
    WithdrawCw20Token {
        token: String,
        recipient: String,
        amount: Uint128,
    },

    /// Move native coins held by this contract
    WithdrawNative {
        denom: String,
        recipient: String,
        amount: Uint128,
    },

    TransferOwnership {
        new_owner: String,
    },

    AcceptOwnership {},

    CancelOwnershipTransfer {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(OwnershipResponse)]
    Ownership {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub initialized: bool,
    pub paused: bool,
    pub old_token: Option<Addr>,
    pub new_token: Option<Addr>,
    /// New tokens paid per old token
    pub upgrade_rate: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_upgrades: u64,
    pub total_old_collected: Uint128,
    pub total_new_distributed: Uint128,
}
