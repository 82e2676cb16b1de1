//! Execute handlers for the token upgrader contract.
//!
//! - `upgrade` - initialization and both upgrade paths
//! - `admin` - pause and withdrawals

mod admin;
mod upgrade;

pub use admin::*;
pub use upgrade::*;
