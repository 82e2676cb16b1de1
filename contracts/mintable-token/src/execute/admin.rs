//! Owner-only token operations.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use cw20_base::state::TOKEN_INFO;

use crate::error::ContractError;
use crate::execute::minter::credit_mint;
use common::ownership::assert_owner;

/// Accepted display-name length in bytes
const NAME_MIN_BYTES: usize = 3;
const NAME_MAX_BYTES: usize = 50;

/// Mint outside the minter registry.
pub fn execute_owner_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    credit_mint(deps.storage, &recipient_addr, amount)?;

    Ok(Response::new()
        .add_attribute("method", "owner_mint")
        .add_attribute("recipient", recipient_addr)
        .add_attribute("amount", amount))
}

/// Change the display name. The permit signing domain keeps the original name.
pub fn execute_set_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    if !(NAME_MIN_BYTES..=NAME_MAX_BYTES).contains(&name.len()) {
        return Err(ContractError::InvalidName);
    }

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    let previous = std::mem::replace(&mut token_info.name, name);
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "set_name")
        .add_attribute("previous_name", previous)
        .add_attribute("name", token_info.name))
}
