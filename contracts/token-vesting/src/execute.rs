//! Execute handlers for the token vesting contract.

use cosmwasm_std::{DepsMut, Env, Response, StdResult};

use crate::error::ContractError;
use crate::query::current_releasable;
use crate::state::{RELEASED, SCHEDULE};
use common::asset::cw20_transfer_msg;
use common::ownership::get_owner;

/// Pay the unlocked, unreleased amount to the current owner.
///
/// `RELEASED` is updated before the transfer message is dispatched.
pub fn execute_release(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let schedule = SCHEDULE.load(deps.storage)?;
    let amount = current_releasable(deps.as_ref(), &env, &schedule)?;
    if amount.is_zero() {
        return Err(ContractError::NoTokenReleasable);
    }

    let released = RELEASED.update(deps.storage, |released| -> StdResult<_> {
        Ok(released.checked_add(amount)?)
    })?;
    let beneficiary = get_owner(deps.storage)?;

    Ok(Response::new()
        .add_message(cw20_transfer_msg(&schedule.token, &beneficiary, amount)?)
        .add_attribute("method", "release")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("amount", amount)
        .add_attribute("released", released))
}
