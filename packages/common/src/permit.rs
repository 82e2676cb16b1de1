//! Permit message shared between the token and the contracts that submit
//! signed approvals on a holder's behalf.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Execute message understood by permit-capable tokens.
///
/// Serializes as `{"permit": {...}}`, the same shape as the token's own
/// `ExecuteMsg::Permit`, so callers do not need the token crate.
#[cw_serde]
pub enum PermitExecuteMsg {
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },
}

/// Detached secp256k1 signature in `(v, r, s)` form
#[derive(Clone, Debug, PartialEq)]
pub struct PermitSignature {
    pub v: u8,
    pub r: Binary,
    pub s: Binary,
}

impl PermitSignature {
    pub fn new(v: u8, r: Binary, s: Binary) -> Self {
        Self { v, r, s }
    }

    /// Public key recovery parameter. Accepts both `27/28` and raw `0/1`.
    pub fn recovery_param(&self) -> Option<u8> {
        match self.v {
            0 | 1 => Some(self.v),
            27 | 28 => Some(self.v - 27),
            _ => None,
        }
    }

    /// 64-byte `r ‖ s` form expected by the crypto API.
    pub fn compact(&self) -> Option<[u8; 64]> {
        if self.r.len() != 32 || self.s.len() != 32 {
            return None;
        }
        let mut sig = [0u8; 64];
        sig[..32].copy_from_slice(self.r.as_slice());
        sig[32..].copy_from_slice(self.s.as_slice());
        Some(sig)
    }
}

/// Build the `Permit` call a contract dispatches to `token` for `owner`.
pub fn permit_msg(
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
    deadline: u64,
    signature: PermitSignature,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&PermitExecuteMsg::Permit {
            owner: owner.to_string(),
            spender: spender.to_string(),
            amount,
            deadline,
            v: signature.v,
            r: signature.r,
            s: signature.s,
        })?,
        funds: vec![],
    }))
}
