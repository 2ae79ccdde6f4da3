use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_bindings::Binding;
use cw_storage_plus::Map;

/// The only address allowed to move funds out of the vault.
pub const EXECUTION: Binding = Binding::new("execution", "execution");

/// Custodied balance per cw20 token address.
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

pub fn load_balance(storage: &dyn Storage, token: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, token)?.unwrap_or_default())
}

/// Adds AMOUNT to the custodied balance of TOKEN and returns the new
/// balance.
pub fn credit(storage: &mut dyn Storage, token: &Addr, amount: Uint128) -> StdResult<Uint128> {
    BALANCES.update(storage, token, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })
}
