//! Query handlers for the token upgrader contract.

use cosmwasm_std::{Deps, StdResult, Uint128};

use crate::msg::{ConfigResponse, StatsResponse};
use crate::state::{PAUSED, STATS, TOKEN_PAIR, UPGRADE_RATE};
use common::ownership::get_owner;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let pair = TOKEN_PAIR.may_load(deps.storage)?;
    Ok(ConfigResponse {
        owner: get_owner(deps.storage)?,
        initialized: pair.is_some(),
        paused: PAUSED.load(deps.storage)?,
        old_token: pair.as_ref().map(|p| p.old_token.clone()),
        new_token: pair.map(|p| p.new_token),
        upgrade_rate: Uint128::new(UPGRADE_RATE),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_upgrades: stats.total_upgrades,
        total_old_collected: stats.total_old_collected,
        total_new_distributed: stats.total_new_distributed,
    })
}
