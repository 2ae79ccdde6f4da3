use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_bindings::Binding;
use cw_storage_plus::{Item, Map};

use crate::proposal::Proposal;

/// The DAO's voting rules. Fixed at instantiation.
#[cw_serde]
pub struct Config {
    pub name: String,
    /// The shortest duration, in seconds, a proposal may be open for.
    pub min_duration: u64,
    /// The percentage of cast weight that must vote yes for a
    /// proposal to pass. In [1, 100].
    pub min_support_percentage: u64,
    /// The governance token balance an address needs to vote.
    pub min_token_hold: Uint128,
    /// The cw20 token whose balances are vote weights.
    pub governance_token: Addr,
}

/// A ballot cast on a proposal.
#[cw_serde]
pub struct Ballot {
    pub support: bool,
    /// The voter's governance token balance when the ballot was cast.
    pub weight: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// The action queue. The only contract this one commands.
pub const EXECUTION: Binding = Binding::new("execution", "execution");
/// The number of proposals that have been created.
pub const VOTE_COUNT: Item<u64> = Item::new("vote_count");
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
pub const BALLOTS: Map<(u64, &Addr), Ballot> = Map::new("ballots");
