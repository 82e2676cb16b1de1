//! Mintable Token Contract - CW20 ledger with rate-limited bridge minters
//!
//! The ledger itself (balances, transfers, allowances) is `cw20-base`. This
//! contract adds the control logic around it:
//!
//! # Minter Registry
//! 1. Owner grants a minter (typically a bridge) a `max_limit` and a `duration`
//! 2. Each mint spends from the minter's current limit
//! 3. The limit refills linearly, reaching `max_limit` again after `duration`
//!    seconds of inactivity; refill is computed lazily on every access
//!
//! # Permit
//! Holders can sign an approval off-chain; anyone may submit it with
//! `Permit`, which checks the signature and consumes the holder's nonce.
//!
//! # Security
//! - Owner-gated configuration with two-step ownership handoff
//! - Minter index with O(1) removal by caller-supplied index hint
//! - Per-owner permit nonces prevent signature replay

pub mod contract;
pub mod error;
mod execute;
pub mod limits;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::limits::materialize_limit;
