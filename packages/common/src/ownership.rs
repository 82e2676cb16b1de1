//! Two-step ownership shared by every contract in the workspace.
//!
//! The current owner proposes a successor with `TransferOwnership`; nothing
//! changes until the proposed address calls `AcceptOwnership`. The owner may
//! withdraw a proposal at any time with `CancelOwnershipTransfer`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Response, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

/// Owner record, stored under a single key by each contract.
#[cw_serde]
pub struct Ownership {
    /// Address allowed to run owner-only operations
    pub owner: Addr,
    /// Proposed successor, if a handoff is in progress
    pub pending_owner: Option<Addr>,
}

/// Response for the `Ownership {}` query of each contract
#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

#[derive(Error, Debug, PartialEq)]
pub enum OwnershipError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} is not the owner")]
    NotOwner { sender: String },

    #[error("Unauthorized: only the pending owner can accept ownership")]
    NotPendingOwner,

    #[error("No pending ownership transfer")]
    NoPendingOwner,
}

/// Record the initial owner. Called once from `instantiate`.
pub fn initialize_owner(storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
    OWNERSHIP.save(
        storage,
        &Ownership {
            owner: owner.clone(),
            pending_owner: None,
        },
    )
}

/// Fail with `NotOwner` unless `sender` is the current owner.
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Ownership, OwnershipError> {
    let ownership = OWNERSHIP.load(storage)?;
    if &ownership.owner != sender {
        return Err(OwnershipError::NotOwner {
            sender: sender.to_string(),
        });
    }
    Ok(ownership)
}

/// Current owner address.
pub fn get_owner(storage: &dyn Storage) -> StdResult<Addr> {
    Ok(OWNERSHIP.load(storage)?.owner)
}

/// Propose a new owner. Overwrites any earlier proposal.
pub fn transfer_ownership(
    storage: &mut dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    new_owner: &str,
) -> Result<Response, OwnershipError> {
    let mut ownership = assert_owner(storage, sender)?;
    let new_owner = api.addr_validate(new_owner)?;

    ownership.pending_owner = Some(new_owner.clone());
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", ownership.owner)
        .add_attribute("pending_owner", new_owner))
}

/// Complete a handoff. Only the pending owner may call this.
pub fn accept_ownership(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Response, OwnershipError> {
    let mut ownership = OWNERSHIP.load(storage)?;
    let pending = ownership
        .pending_owner
        .take()
        .ok_or(OwnershipError::NoPendingOwner)?;

    if &pending != sender {
        return Err(OwnershipError::NotPendingOwner);
    }

    let previous = std::mem::replace(&mut ownership.owner, pending);
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("owner", ownership.owner))
}

/// Drop a pending proposal.
pub fn cancel_ownership_transfer(
    storage: &mut dyn Storage,
    sender: &Addr,
) -> Result<Response, OwnershipError> {
    let mut ownership = assert_owner(storage, sender)?;
    if ownership.pending_owner.take().is_none() {
        return Err(OwnershipError::NoPendingOwner);
    }
    OWNERSHIP.save(storage, &ownership)?;

    Ok(Response::new().add_attribute("method", "cancel_ownership_transfer"))
}

pub fn query_ownership(storage: &dyn Storage) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner,
        pending_owner: ownership.pending_owner,
    })
}
