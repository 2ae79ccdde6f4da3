use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::cw_ownable_execute;
use dao_action_queue::state::ActionType;

// so that consumers don't need a cw_ownable dependency to consume
// this contract's queries.
pub use cw_ownable::Ownership;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to set the execution address. Defaults to
    /// the instantiator.
    pub owner: Option<String>,
    /// The name of the DAO.
    pub name: String,
    /// The shortest duration, in seconds, a proposal may be open for.
    pub min_duration: u64,
    /// The percentage of cast weight that must vote yes for a
    /// proposal to pass. Must be in [1, 100].
    pub min_support_percentage: u64,
    /// The governance token balance an address needs to vote.
    pub min_token_hold: Uint128,
    /// The cw20 token whose balances are vote weights.
    pub governance_token: String,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Sets the action queue this contract commands. Callable only by
    /// the owner, and only once.
    SetExecutionAddress { address: String },
    /// Creates a proposal that, if passed, performs one action per
    /// index of the given lists. The lists must be the same length.
    Forward {
        /// Seconds the proposal is open for.
        duration: u64,
        action_types: Vec<ActionType>,
        recipients: Vec<String>,
        tokens: Vec<String>,
        amounts: Vec<Uint128>,
    },
    /// Casts a ballot weighted by the sender's current governance
    /// token balance.
    ParticipateVote { vote_id: u64, support: bool },
    /// Resolves a proposal whose duration has elapsed, triggering its
    /// actions if it passed. Callable by anyone.
    ExecuteVote { vote_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(crate::query::VoteResponse)]
    Vote { vote_id: u64 },
    #[returns(crate::query::VoteListResponse)]
    ListVotes {
        start_after: Option<u64>,
        limit: Option<u64>,
    },
    /// Lists proposals from newest to oldest.
    #[returns(crate::query::VoteListResponse)]
    ReverseVotes {
        start_before: Option<u64>,
        limit: Option<u64>,
    },
    /// The id of the most recently created proposal, or zero.
    #[returns(::std::primitive::u64)]
    CurrentVoteId {},
    #[returns(crate::query::BallotResponse)]
    Ballot { vote_id: u64, voter: String },
    #[returns(crate::query::BallotListResponse)]
    ListBallots {
        vote_id: u64,
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
pub struct MigrateMsg {}
