//! Token Upgrader Contract - One-way migration from an old CW20 to a new one
//!
//! # Upgrade Flow
//! 1. Owner calls `Initialize` once with the old and new token addresses
//! 2. Owner funds this contract with enough new tokens
//! 3. Holder approves this contract on the old token (or signs a permit)
//! 4. Holder calls `UpgradeToken` / `UpgradeTokenByPermit`: the old tokens are
//!    pulled into custody and `amount * UPGRADE_RATE` new tokens are sent back
//!
//! # Security
//! - Owner-gated initialization, pause and withdrawals
//! - Two-step ownership handoff
//! - Emergency pause of both upgrade paths; withdrawals stay available

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::UPGRADE_RATE;
