use cosmwasm_std::{StdError, Uint128};
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

    #[error("amount must be greater than zero")]
    InvalidZeroAmount {},

    #[error("insufficient allowance: vault may pull ({allowance}), deposit needs ({amount})")]
    InsufficientAllowance { allowance: Uint128, amount: Uint128 },

    #[error("insufficient balance: vault holds ({balance}), transfer needs ({amount})")]
    InsufficientBalance { balance: Uint128, amount: Uint128 },
}
