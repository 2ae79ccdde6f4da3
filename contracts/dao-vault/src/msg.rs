use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;
use cw_ownable::cw_ownable_execute;

// so that consumers don't need a cw_ownable dependency to consume
// this contract's queries.
pub use cw_ownable::Ownership;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to set the execution address. Defaults to
    /// the instantiator.
    pub owner: Option<String>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Pulls AMOUNT of TOKEN from the sender into the vault. The
    /// sender must have granted the vault an allowance of at least
    /// AMOUNT on TOKEN.
    Deposit { token: String, amount: Uint128 },
    /// Deposits the sent cw20 tokens.
    Receive(Cw20ReceiveMsg),
    /// Callable only by the owner, and only once. Sets the address
    /// allowed to transfer funds out of the vault.
    SetExecutionAddress { address: String },
    /// Callable only by the execution address. Sends AMOUNT of TOKEN
    /// to RECIPIENT.
    Transfer {
        token: String,
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
pub enum ReceiveMsg {
    Deposit {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The amount of TOKEN held in custody.
    #[returns(Uint128)]
    Balance { token: String },
    /// Lists custodied balances ordered by token address.
    #[returns(Vec<TokenBalance>)]
    ListBalances {
        start_after: Option<String>,
        limit: Option<u64>,
    },
    #[returns(cw_bindings::BindingResponse)]
    ExecutionAddress {},
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
    #[returns(cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct TokenBalance {
    pub token: Addr,
    pub balance: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}
