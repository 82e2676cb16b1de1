//! Message types for the mintable token contract
//!
//! The CW20 surface (transfers, allowances, balance queries) keeps the
//! standard `cw20` shapes so wallets and other contracts can talk to the
//! token without knowing about the minter registry.

use common::OwnershipResponse;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, TokenInfoResponse};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_balances: Vec<Cw20Coin>,
    /// Owner address for minter and token management
    pub owner: String,
    /// Bech32 prefix of accounts on this chain (e.g. "terra"); recovered
    /// permit signers are rendered with it
    pub account_prefix: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // CW20
    // ========================================================================
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    Burn {
        amount: Uint128,
    },
    BurnFrom {
        owner: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Set `spender`'s allowance over `owner`'s tokens from a signature by
    /// `owner`. Anyone can submit it.
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        /// Last valid block time (seconds)
        deadline: u64,
        /// Recovery id, 27/28 or 0/1
        v: u8,
        r: Binary,
        s: Binary,
    },

    // ========================================================================
    // Minter Registry
    // ========================================================================
    /// Add a minter or change its limit (owner only)
    SetMinterLimit {
        minter: String,
        /// Ceiling the limit refills to
        max_limit: Uint128,
        /// Seconds to refill from zero to `max_limit`
        duration: u64,
    },

    /// Remove a minter (owner only). `index_hint` must be its current index.
    RemoveMinterByIndexHint {
        minter: String,
        index_hint: u32,
    },

    /// Mint from the caller's limit (active minters only)
    Mint {
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Owner
    // ========================================================================
    /// Mint without a limit (owner only)
    OwnerMint {
        recipient: String,
        amount: Uint128,
    },

    /// Change the token's display name (owner only)
    SetName {
        name: String,
    },

    /// Propose a new owner
    TransferOwnership {
        new_owner: String,
    },

    /// Accept a pending ownership proposal
    AcceptOwnership {},

    /// Withdraw a pending ownership proposal
    CancelOwnershipTransfer {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Stored limit state of a minter, without refill since `last_updated`;
    /// all zero for non-minters
    #[returns(MinterConfigResponse)]
    MinterConfig { minter: String },

    #[returns(MinterCountResponse)]
    MinterCount {},

    #[returns(MinterByIndexResponse)]
    MinterByIndex { index: u32 },

    /// Ceiling of a minter's limit; zero for non-minters
    #[returns(MintingLimitResponse)]
    MintingMaxLimitOf { minter: String },

    /// Limit a minter could spend right now; zero for non-minters
    #[returns(MintingLimitResponse)]
    MintingCurrentLimitOf { minter: String },

    /// Nonce the next permit signed by `owner` must use
    #[returns(PermitNonceResponse)]
    PermitNonce { owner: String },

    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},

    #[returns(OwnershipResponse)]
    Ownership {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct MinterConfigResponse {
    pub minter: Addr,
    pub max_limit: Uint128,
    pub current_limit: Uint128,
    pub last_updated: u64,
    pub duration: u64,
}

#[cw_serde]
pub struct MinterCountResponse {
    pub count: u32,
}

#[cw_serde]
pub struct MinterByIndexResponse {
    pub minter: Addr,
}

#[cw_serde]
pub struct MintingLimitResponse {
    pub limit: Uint128,
}

#[cw_serde]
pub struct PermitNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct DomainSeparatorResponse {
    /// Hex-encoded 32-byte separator
    pub domain_separator: String,
}
