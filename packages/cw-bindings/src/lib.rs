#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

#[cw_serde]
pub struct BindingResponse {
    /// The role the bound address plays.
    pub role: String,
    /// The bound address, if the binding has been set.
    pub address: Option<Addr>,
}

#[derive(Error, Debug, PartialEq)]
pub enum BindingError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("unauthorized: sender is not the {role} address")]
    Unauthorized { role: String },

    #[error("the {role} address has not been set")]
    Unbound { role: String },

    #[error("the {role} address has already been set to ({address})")]
    AlreadyBound { role: String, address: Addr },
}

/// The single address allowed to act as ROLE.
pub struct Binding<'a> {
    item: Item<'a, Addr>,
    role: &'a str,
}

impl<'a> Binding<'a> {
    pub const fn new(storage_key: &'a str, role: &'a str) -> Self {
        Binding {
            item: Item::new(storage_key),
            role,
        }
    }

    pub fn role(&self) -> &str {
        self.role
    }

    /// Sets the bound address. Fails if an address has already been
    /// bound.
    pub fn bind(&self, storage: &mut dyn Storage, addr: Addr) -> Result<(), BindingError> {
        if let Some(address) = self.item.may_load(storage)? {
            return Err(BindingError::AlreadyBound {
                role: self.role.to_string(),
                address,
            });
        }
        Ok(self.item.save(storage, &addr)?)
    }

    /// Loads the bound address, failing with `Unbound` if there is
    /// none.
    pub fn load(&self, storage: &dyn Storage) -> Result<Addr, BindingError> {
        self.item.may_load(storage)?.ok_or_else(|| BindingError::Unbound {
            role: self.role.to_string(),
        })
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<Addr>> {
        self.item.may_load(storage)
    }

    /// Errors unless SENDER is the bound address. An unset binding
    /// admits no one.
    pub fn assert_caller(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), BindingError> {
        let bound = self.load(storage)?;
        if bound != *sender {
            return Err(BindingError::Unauthorized {
                role: self.role.to_string(),
            });
        }
        Ok(())
    }

    pub fn query(&self, storage: &dyn Storage) -> StdResult<BindingResponse> {
        Ok(BindingResponse {
            role: self.role.to_string(),
            address: self.item.may_load(storage)?,
        })
    }
}
