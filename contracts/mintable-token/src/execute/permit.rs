//! Signed approval handler.
//!
//! The holder signs `permit_digest(domain, struct_hash)` off-chain. Anyone may
//! relay it; under the token's account prefix, the recovered key must control
//! `owner` as either its standard or its `ethsecp256k1` account. A successful
//! permit consumes the holder's nonce and sets the allowance to exactly
//! `amount`, with no expiry.

use cosmwasm_std::{Addr, Binary, DepsMut, Env, Response, StdResult, Storage, Uint128};
use cw20::{AllowanceResponse, Expiration};
use cw20_base::state::{ALLOWANCES, ALLOWANCES_SPENDER};

use crate::error::ContractError;
use crate::state::{PERMIT_DOMAIN, PERMIT_NONCES};
use common::address::signer_accounts;
use common::hash::{domain_separator, permit_digest, permit_struct_hash};
use common::PermitSignature;

#[allow(clippy::too_many_arguments)]
pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    amount: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();
    if now > deadline {
        return Err(ContractError::PermitExpired { deadline, now });
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = deps.api.addr_validate(&spender)?;
    let nonce = PERMIT_NONCES.may_load(deps.storage, &owner_addr)?.unwrap_or(0);

    let digest = permit_hash(
        deps.storage,
        &env,
        &owner_addr,
        &spender_addr,
        amount,
        nonce,
        deadline,
    )?;

    let signature = PermitSignature::new(v, r, s);
    let recovery_param = signature
        .recovery_param()
        .ok_or(ContractError::InvalidSignature)?;
    let compact = signature.compact().ok_or(ContractError::InvalidSignature)?;
    let pubkey = deps
        .api
        .secp256k1_recover_pubkey(&digest, &compact, recovery_param)
        .map_err(|_| ContractError::InvalidSignature)?;

    let domain = PERMIT_DOMAIN.load(deps.storage)?;
    let [standard, eth] = signer_accounts(&pubkey, &domain.account_prefix)?;
    if owner_addr.as_str() != standard && owner_addr.as_str() != eth {
        return Err(ContractError::InvalidSigner {
            owner: owner_addr.to_string(),
            recovered: standard,
        });
    }

    PERMIT_NONCES.save(deps.storage, &owner_addr, &(nonce + 1))?;
    set_allowance(deps.storage, &owner_addr, &spender_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "permit")
        .add_attribute("owner", owner_addr)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}

/// Digest a holder must sign to approve `spender` for `amount` at `nonce`.
pub fn permit_hash(
    storage: &dyn Storage,
    env: &Env,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
    nonce: u64,
    deadline: u64,
) -> StdResult<[u8; 32]> {
    let separator = current_domain_separator(storage, env)?;
    let struct_hash = permit_struct_hash(
        owner.as_str(),
        spender.as_str(),
        amount.u128(),
        nonce,
        deadline,
    );
    Ok(permit_digest(&separator, &struct_hash))
}

/// Domain separator for this deployment on the current chain.
pub fn current_domain_separator(storage: &dyn Storage, env: &Env) -> StdResult<[u8; 32]> {
    let domain = PERMIT_DOMAIN.load(storage)?;
    Ok(domain_separator(
        &domain.name,
        &env.block.chain_id,
        env.contract.address.as_str(),
    ))
}

/// Overwrite the allowance `owner` granted `spender` with `amount`.
///
/// Any earlier expiry is replaced by `Expiration::Never`; a zero amount
/// clears the entry the way cw20-base does.
fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if owner == spender {
        return Err(cw20_base::ContractError::CannotSetOwnAccount {}.into());
    }

    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
        ALLOWANCES_SPENDER.remove(storage, (spender, owner));
        return Ok(());
    }

    let allowance = AllowanceResponse {
        allowance: amount,
        expires: Expiration::Never {},
    };
    ALLOWANCES.save(storage, (owner, spender), &allowance)?;
    ALLOWANCES_SPENDER.save(storage, (spender, owner), &allowance)?;
    Ok(())
}
