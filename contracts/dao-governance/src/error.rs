use cosmwasm_std::{StdError, Timestamp, Uint128};
use cw_bindings::BindingError;
use cw_ledger::LedgerError;
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

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("DAO name must not be empty")]
    EmptyName {},

    #[error("minimum duration must be greater than zero")]
    InvalidMinDuration {},

    #[error("minimum support percentage must be in [1, 100], got ({percentage})")]
    InvalidSupportPercentage { percentage: u64 },

    #[error("action lists differ in length: ({action_types}) types, ({recipients}) recipients, ({tokens}) tokens, ({amounts}) amounts")]
    ArityMismatch {
        action_types: usize,
        recipients: usize,
        tokens: usize,
        amounts: usize,
    },

    #[error("duration ({duration}) is shorter than the minimum ({min})")]
    DurationTooShort { duration: u64, min: u64 },

    #[error("duration ({duration}) runs past the end of time")]
    DurationTooLong { duration: u64 },

    #[error("amount must be greater than zero")]
    InvalidZeroAmount {},

    #[error("no such vote ({id})")]
    UnknownVote { id: u64 },

    #[error("vote ({id}) is closed")]
    VotingClosed { id: u64 },

    #[error("already voted on vote ({id})")]
    AlreadyVoted { id: u64 },

    #[error("not eligible to vote: holds ({balance}), minimum is ({min})")]
    NotEligible { balance: Uint128, min: Uint128 },

    #[error("vote ({id}) is open until ({deadline})")]
    VotingStillOpen { id: u64, deadline: Timestamp },

    #[error("vote ({id}) has already been executed")]
    AlreadyExecuted { id: u64 },
}
