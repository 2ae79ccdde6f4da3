use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_bindings::Binding;
use cw_storage_plus::{Item, Map};

#[cw_serde]
#[derive(Copy)]
pub enum ActionType {
    /// Move tokens from the vault to a recipient.
    TokenTransfer,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::TokenTransfer => write!(f, "token_transfer"),
        }
    }
}

#[cw_serde]
pub struct Action {
    pub id: u64,
    pub action_type: ActionType,
    /// The account that created the proposal this action belongs to.
    pub proposer: Addr,
    pub recipient: Addr,
    /// The cw20 token to move.
    pub token: Addr,
    pub amount: Uint128,
    /// Set once the vault has moved the funds. Never unset.
    pub triggered: bool,
}

/// The vault actions draw funds from.
pub const VAULT: Binding = Binding::new("vault", "vault");
/// The only address allowed to add and trigger actions.
pub const VOTING: Binding = Binding::new("voting", "voting");

/// The highest action id added so far. Zero before the first action.
pub const CURRENT_ACTION_ID: Item<u64> = Item::new("current_action_id");
pub const ACTIONS: Map<u64, Action> = Map::new("actions");

pub fn current_action_id(storage: &dyn Storage) -> StdResult<u64> {
    Ok(CURRENT_ACTION_ID.may_load(storage)?.unwrap_or_default())
}
