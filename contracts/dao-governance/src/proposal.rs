use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, BlockInfo, OverflowError, StdResult, Storage, Timestamp, Uint128, Uint256,
};

use crate::query::VoteResponse;
use crate::state::VOTE_COUNT;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[cw_serde]
#[derive(Copy)]
pub enum Status {
    /// The proposal is accepting ballots.
    Open,
    /// The proposal's duration has elapsed with enough support to
    /// pass, but it has not been executed.
    Passed,
    /// The proposal's duration has elapsed without enough support to
    /// pass, and it has not been executed.
    Failed,
    /// The proposal has been resolved. See `Proposal::outcome`.
    Executed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::Passed => write!(f, "passed"),
            Status::Failed => write!(f, "failed"),
            Status::Executed => write!(f, "executed"),
        }
    }
}

/// How an executed proposal was decided.
#[cw_serde]
#[derive(Copy)]
pub enum Outcome {
    /// The proposal's actions were triggered.
    Passed,
    /// The proposal's actions were not triggered.
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

#[cw_serde]
pub struct Proposal {
    /// The address that created this proposal.
    pub proposer: Addr,
    pub created_at: Timestamp,
    /// Seconds after `created_at` during which ballots may be cast.
    pub duration: u64,
    /// The action queue entries triggered if this proposal passes, in
    /// the order they are triggered.
    pub action_ids: Vec<u64>,
    pub yes_weight: Uint128,
    pub no_weight: Uint128,
    /// The support percentage this proposal needs to pass.
    pub min_support_percentage: u64,
    /// The stored status. Only ever `Open` or `Executed`; use
    /// `current_status` for the status at a given block.
    pub status: Status,
    /// Set when the proposal is executed.
    pub outcome: Option<Outcome>,
}

pub fn next_vote_id(store: &dyn Storage) -> StdResult<u64> {
    Ok(VOTE_COUNT.may_load(store)?.unwrap_or_default() + 1)
}

pub fn advance_vote_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = next_vote_id(store)?;
    VOTE_COUNT.save(store, &id)?;
    Ok(id)
}

/// The time DURATION seconds after CREATED_AT, or None if that is
/// beyond what a `Timestamp` can hold.
pub fn deadline_after(created_at: Timestamp, duration: u64) -> Option<Timestamp> {
    duration
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|nanos| created_at.nanos().checked_add(nanos))
        .map(Timestamp::from_nanos)
}

/// True once NOW is at or past the end of a proposal created at
/// CREATED_AT that lasts DURATION seconds.
pub fn deadline_reached(now: Timestamp, created_at: Timestamp, duration: u64) -> bool {
    match deadline_after(created_at, duration) {
        Some(deadline) => now >= deadline,
        None => false,
    }
}

impl Proposal {
    pub fn new(
        proposer: Addr,
        created_at: Timestamp,
        duration: u64,
        action_ids: Vec<u64>,
        min_support_percentage: u64,
    ) -> Self {
        Self {
            proposer,
            created_at,
            duration,
            action_ids,
            yes_weight: Uint128::zero(),
            no_weight: Uint128::zero(),
            min_support_percentage,
            status: Status::Open,
            outcome: None,
        }
    }

    /// Consumes the proposal and returns a version which may be used
    /// in a query response, with its status brought up to date with
    /// the current block.
    pub fn into_response(mut self, block: &BlockInfo, id: u64) -> VoteResponse {
        self.update_status(block);
        VoteResponse {
            id,
            deadline: self.deadline(),
            support_percentage: self.support_percentage(),
            proposal: self,
        }
    }

    pub fn deadline(&self) -> Timestamp {
        // Durations are checked against `deadline_after` on creation.
        deadline_after(self.created_at, self.duration).unwrap_or(Timestamp::from_nanos(u64::MAX))
    }

    pub fn deadline_reached(&self, block: &BlockInfo) -> bool {
        deadline_reached(block.time, self.created_at, self.duration)
    }

    /// `yes * 100 / (yes + no)`, rounded down. Zero if no weight has
    /// been cast.
    pub fn support_percentage(&self) -> Uint128 {
        let total = Uint256::from(self.yes_weight) + Uint256::from(self.no_weight);
        if total.is_zero() {
            return Uint128::zero();
        }
        // At most 100, so the conversion back can not fail.
        Uint128::try_from(self.yes_weight.full_mul(100u8) / total).unwrap_or(Uint128::new(100))
    }

    pub fn is_passed(&self) -> bool {
        self.support_percentage() >= Uint128::from(self.min_support_percentage)
    }

    /// Gets the status of the proposal at BLOCK. An open proposal
    /// whose deadline has been reached is passed or failed depending
    /// on its tally.
    pub fn current_status(&self, block: &BlockInfo) -> Status {
        match self.status {
            Status::Open if self.deadline_reached(block) => {
                if self.is_passed() {
                    Status::Passed
                } else {
                    Status::Failed
                }
            }
            status => status,
        }
    }

    /// Sets a proposal's status to its current status.
    pub fn update_status(&mut self, block: &BlockInfo) {
        self.status = self.current_status(block);
    }

    /// Adds WEIGHT to the yes or no tally.
    pub fn add_vote(&mut self, support: bool, weight: Uint128) -> Result<(), OverflowError> {
        if support {
            self.yes_weight = self.yes_weight.checked_add(weight)?;
        } else {
            self.no_weight = self.no_weight.checked_add(weight)?;
        }
        Ok(())
    }
}
