//! Execute handlers for the mintable token contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `minter` - minter limit configuration, removal and rate-limited mint
//! - `permit` - signed approvals
//! - `admin` - owner mint and rename

mod admin;
mod minter;
mod permit;

pub use admin::*;
pub use minter::*;
pub use permit::*;
