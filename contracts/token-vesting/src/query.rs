//! Query handlers for the token vesting contract.

use cosmwasm_std::{Deps, Env, StdResult, Uint128};

use crate::msg::{
    DurationResponse, NumVestingsResponse, ReleasableAmountResponse, ReleasedResponse,
    ScheduleResponse, StartResponse,
};
use crate::schedule::{final_time, releasable};
use crate::state::{Schedule, RELEASED, SCHEDULE};
use common::asset::query_cw20_balance;
use common::ownership::get_owner;

/// Releasable amount at the current block, from the live token balance.
pub fn current_releasable(deps: Deps, env: &Env, schedule: &Schedule) -> StdResult<Uint128> {
    let released = RELEASED.load(deps.storage)?;
    let balance = query_cw20_balance(&deps.querier, &schedule.token, &env.contract.address)?;
    releasable(schedule, released, balance, env.block.time.seconds())
}

pub fn query_schedule(deps: Deps) -> StdResult<ScheduleResponse> {
    let schedule = SCHEDULE.load(deps.storage)?;
    Ok(ScheduleResponse {
        beneficiary: get_owner(deps.storage)?,
        end: final_time(schedule.start, schedule.duration, schedule.num_vestings)?,
        token: schedule.token,
        start: schedule.start,
        duration: schedule.duration,
        num_vestings: schedule.num_vestings,
        released: RELEASED.load(deps.storage)?,
    })
}

pub fn query_releasable_amount(deps: Deps, env: Env) -> StdResult<ReleasableAmountResponse> {
    let schedule = SCHEDULE.load(deps.storage)?;
    let amount = current_releasable(deps, &env, &schedule)?;
    Ok(ReleasableAmountResponse { amount })
}

pub fn query_released(deps: Deps) -> StdResult<ReleasedResponse> {
    let released = RELEASED.load(deps.storage)?;
    Ok(ReleasedResponse { released })
}

pub fn query_start(deps: Deps) -> StdResult<StartResponse> {
    let start = SCHEDULE.load(deps.storage)?.start;
    Ok(StartResponse { start })
}

pub fn query_duration(deps: Deps) -> StdResult<DurationResponse> {
    let duration = SCHEDULE.load(deps.storage)?.duration;
    Ok(DurationResponse { duration })
}

pub fn query_num_vestings(deps: Deps) -> StdResult<NumVestingsResponse> {
    let num_vestings = SCHEDULE.load(deps.storage)?.num_vestings;
    Ok(NumVestingsResponse { num_vestings })
}
