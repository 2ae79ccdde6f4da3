use cosmwasm_std::StdError;
use cw_bindings::BindingError;
use cw_ownable::OwnershipError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error("amount must be greater than zero")]
    InvalidZeroAmount {},

    #[error("action ({id}) has already been added")]
    DuplicateActionId { id: u64 },

    #[error("action id ({id}) is out of sequence, expected ({expected})")]
    ActionIdOutOfSequence { id: u64, expected: u64 },

    #[error("no such action ({id})")]
    UnknownAction { id: u64 },

    #[error("action ({id}) has already been triggered")]
    AlreadyTriggered { id: u64 },
}
