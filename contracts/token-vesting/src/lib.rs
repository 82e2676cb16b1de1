//! Token Vesting Contract - Tranche-based release of a CW20 balance
//!
//! Whatever the contract holds of its token is split into `num_vestings`
//! equal tranches. Tranche `i` (1-based) unlocks at `start + i * duration`;
//! the last tranche also carries the rounding remainder.
//!
//! `Release` is permissionless and always pays the current owner, who is the
//! beneficiary. Transferring ownership (two-step) re-targets future releases.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod schedule;
pub mod state;

pub use crate::error::ContractError;
