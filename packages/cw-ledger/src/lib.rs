#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]


use std::fmt;

use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, CustomQuery, Deps, QuerierWrapper, StdError,
    StdResult, Uint128, WasmMsg,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("invalid cw20 - did not respond to `TokenInfo` query: {err}")]
    InvalidCw20 { err: StdError },
}

/// A cw20 contract that has been checked to answer `TokenInfo`
/// queries. Should be built with `Cw20Ledger::checked` unless the
/// address is already known to be a token, for example because it was
/// loaded from storage after being checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cw20Ledger(Addr);

impl Cw20Ledger {
    /// Validates ADDR and confirms that it responds to a cw20
    /// `TokenInfo` query.
    pub fn checked(deps: Deps, addr: &str) -> Result<Self, LedgerError> {
        let addr = deps.api.addr_validate(addr)?;
        let _info: cw20::TokenInfoResponse = deps
            .querier
            .query_wasm_smart(addr.clone(), &cw20::Cw20QueryMsg::TokenInfo {})
            .map_err(|err| LedgerError::InvalidCw20 { err })?;
        Ok(Self(addr))
    }

    pub fn unchecked(addr: Addr) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn into_addr(self) -> Addr {
        self.0
    }

    /// Queries OWNER's balance on this ledger.
    pub fn query_balance<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        owner: &Addr,
    ) -> StdResult<Uint128> {
        let balance: cw20::BalanceResponse = querier.query_wasm_smart(
            &self.0,
            &cw20::Cw20QueryMsg::Balance {
                address: owner.to_string(),
            },
        )?;
        Ok(balance.balance)
    }

    /// Queries the amount SPENDER may pull from OWNER. An allowance
    /// that has expired at BLOCK reads as zero.
    pub fn query_allowance<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        block: &BlockInfo,
        owner: &Addr,
        spender: &Addr,
    ) -> StdResult<Uint128> {
        let allowance: cw20::AllowanceResponse = querier.query_wasm_smart(
            &self.0,
            &cw20::Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )?;
        if allowance.expires.is_expired(block) {
            Ok(Uint128::zero())
        } else {
            Ok(allowance.allowance)
        }
    }

    /// Gets a message that moves AMOUNT from the sending contract to
    /// RECIPIENT. AMOUNT being zero will cause the message execution to
    /// fail.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&cw20::Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }
        .into())
    }

    /// Gets a message that pulls AMOUNT from OWNER to RECIPIENT using
    /// the allowance OWNER granted to the sending contract.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&cw20::Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }
        .into())
    }
}

impl fmt::Display for Cw20Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
