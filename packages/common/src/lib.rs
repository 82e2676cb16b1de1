//! Common - Shared Types and Utilities for the Token Contracts
//!
//! This package provides the pieces used by more than one contract:
//! - `ownership` - two-step owner handoff and owner checks
//! - `asset` - native / CW20 transfer message construction
//! - `hash` - keccak256 and the permit digest layout
//! - `address` - signer account derivation from secp256k1 public keys
//! - `permit` - the permit execute message understood by the token

pub mod address;
pub mod asset;
pub mod hash;
pub mod ownership;
pub mod permit;

pub use asset::AssetInfo;
pub use ownership::{Ownership, OwnershipError, OwnershipResponse};
pub use permit::{PermitExecuteMsg, PermitSignature};
