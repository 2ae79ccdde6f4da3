use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::cw_ownable_execute;

use crate::state::ActionType;

// so that consumers don't need a cw_ownable dependency to consume
// this contract's queries.
pub use cw_ownable::Ownership;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to set the vault and voting addresses.
    /// Defaults to the instantiator.
    pub owner: Option<String>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Callable only by the owner, and only once.
    SetVaultAddress { address: String },
    /// Callable only by the owner, and only once.
    SetVotingAddress { address: String },
    /// Callable only by the voting contract. ID must be one greater
    /// than the current action id.
    AddAction {
        id: u64,
        action_type: ActionType,
        proposer: String,
        recipient: String,
        token: String,
        amount: Uint128,
    },
    /// Callable only by the voting contract. Performs the action.
    Trigger { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Action)]
    Action { id: u64 },
    #[returns(Vec<crate::state::Action>)]
    ListActions {
        start_after: Option<u64>,
        limit: Option<u64>,
    },
    /// The highest action id added so far.
    #[returns(::std::primitive::u64)]
    CurrentActionId {},
    #[returns(cw_bindings::BindingResponse)]
    VaultAddress {},
    #[returns(cw_bindings::BindingResponse)]
    VotingAddress {},
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
    #[returns(cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct MigrateMsg {}
