//! Error types for the token upgrader contract

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
    // Lifecycle Errors
    // ========================================================================

    #[error("Already initialized")]
    AlreadyInitialized,

    #[error("Uninitialized: token pair has not been set")]
    Uninitialized,

    // ========================================================================
    // Pause Errors
    // ========================================================================

    #[error("Enforced pause: upgrades are paused")]
    EnforcedPause,

    #[error("Expected pause: upgrades are not paused")]
    ExpectedPause,

    #[error("Invalid zero amount")]
    InvalidZeroAmount,
}
