use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::proposal::Proposal;

/// Information about a proposal returned by proposal queries.
#[cw_serde]
pub struct VoteResponse {
    /// The ID of the proposal being returned.
    pub id: u64,
    pub proposal: Proposal,
    /// The time at which ballots stop being accepted.
    pub deadline: Timestamp,
    /// The share of cast weight in favor, rounded down. Zero if no
    /// weight has been cast.
    pub support_percentage: Uint128,
}

/// A list of proposals returned by `ListVotes` and `ReverseVotes`.
#[cw_serde]
pub struct VoteListResponse {
    pub votes: Vec<VoteResponse>,
}

/// Information about a ballot that was cast.
#[cw_serde]
pub struct BallotInfo {
    pub voter: Addr,
    pub support: bool,
    /// The voter's governance token balance when the ballot was cast.
    pub weight: Uint128,
}

/// The ballot an address cast on a proposal, if any.
#[cw_serde]
pub struct BallotResponse {
    pub ballot: Option<BallotInfo>,
}

#[cw_serde]
pub struct BallotListResponse {
    pub ballots: Vec<BallotInfo>,
}
