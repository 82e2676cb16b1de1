//! Error types for the token vesting contract

use common::OwnershipError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ownership(#[from] OwnershipError),

    // ========================================================================
    // Construction Errors
    // ========================================================================

    #[error("Invalid token: {token:?} is not a valid contract address")]
    InvalidToken { token: String },

    #[error("Invalid duration: tranche duration must be greater than zero")]
    InvalidDuration,

    #[error("Invalid number of vestings: at least one tranche required")]
    InvalidNumVestings,

    #[error("Invalid final time: schedule ends at {final_time}, before block time {now}")]
    InvalidFinalTime { final_time: u64, now: u64 },

    // ========================================================================
    // Release Errors
    // ========================================================================

    #[error("No token releasable")]
    NoTokenReleasable,
}
