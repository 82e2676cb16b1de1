//! Error types for the mintable token contract

use common::OwnershipError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Base(#[from] cw20_base::ContractError),

    #[error("{0}")]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Minter Registry Errors
    // ========================================================================

    #[error("Not enough limits: available {available}, requested {requested}")]
    NotEnoughLimits {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Invalid duration: replenish duration must be greater than zero")]
    InvalidDuration,

    #[error("Limits too high: {max_limit} exceeds ceiling {ceiling}")]
    LimitsTooHigh { max_limit: Uint128, ceiling: Uint128 },

    #[error("Invalid minter index: {index}")]
    InvalidIndex { index: u32 },

    #[error("Invalid index hint: {index_hint}")]
    InvalidIndexHint { index_hint: u32 },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    // ========================================================================
    // Permit Errors
    // ========================================================================

    #[error("Permit expired: deadline {deadline}, block time {now}")]
    PermitExpired { deadline: u64, now: u64 },

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid signer: permit owner {owner}, recovered {recovered}")]
    InvalidSigner { owner: String, recovered: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid account prefix: {prefix}")]
    InvalidAccountPrefix { prefix: String },

    #[error("Name is not in the expected format (3-50 UTF-8 bytes)")]
    InvalidName,
}
