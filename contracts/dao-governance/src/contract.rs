#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw_ledger::Cw20Ledger;
use cw_storage_plus::Bound;
use dao_action_queue::state::ActionType;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::proposal::{advance_vote_id, deadline_after, Outcome, Proposal, Status};
use crate::query::{BallotInfo, BallotListResponse, BallotResponse, VoteListResponse, VoteResponse};
use crate::state::{Ballot, Config, BALLOTS, CONFIG, EXECUTION, PROPOSALS, VOTE_COUNT};

pub(crate) const CONTRACT_NAME: &str = "crates.io:dao-governance";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) const DEFAULT_LIMIT: u64 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.name.trim().is_empty() {
        return Err(ContractError::EmptyName {});
    }
    if msg.min_duration == 0 {
        return Err(ContractError::InvalidMinDuration {});
    }
    if msg.min_support_percentage == 0 || msg.min_support_percentage > 100 {
        return Err(ContractError::InvalidSupportPercentage {
            percentage: msg.min_support_percentage,
        });
    }
    let governance_token = Cw20Ledger::checked(deps.as_ref(), &msg.governance_token)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    let config = Config {
        name: msg.name,
        min_duration: msg.min_duration,
        min_support_percentage: msg.min_support_percentage,
        min_token_hold: msg.min_token_hold,
        governance_token: governance_token.into_addr(),
    };
    CONFIG.save(deps.storage, &config)?;
    VOTE_COUNT.save(deps.storage, &0)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("name", config.name)
        .add_attribute("min_duration", config.min_duration.to_string())
        .add_attribute(
            "min_support_percentage",
            config.min_support_percentage.to_string(),
        )
        .add_attribute("min_token_hold", config.min_token_hold)
        .add_attribute("governance_token", config.governance_token)
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetExecutionAddress { address } => {
            execute_set_execution_address(deps, info, address)
        }
        ExecuteMsg::Forward {
            duration,
            action_types,
            recipients,
            tokens,
            amounts,
        } => execute_forward(
            deps,
            env,
            info,
            duration,
            action_types,
            recipients,
            tokens,
            amounts,
        ),
        ExecuteMsg::ParticipateVote { vote_id, support } => {
            execute_participate_vote(deps, env, info, vote_id, support)
        }
        ExecuteMsg::ExecuteVote { vote_id } => execute_execute_vote(deps, env, vote_id),
        ExecuteMsg::UpdateOwnership(action) => execute_update_owner(deps, env, info, action),
    }
}

pub fn execute_set_execution_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    EXECUTION.bind(deps.storage, addr.clone())?;

    Ok(Response::default()
        .add_attribute("action", "set_execution_address")
        .add_attribute(EXECUTION.role(), addr))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_forward(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    duration: u64,
    action_types: Vec<ActionType>,
    recipients: Vec<String>,
    tokens: Vec<String>,
    amounts: Vec<Uint128>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let len = action_types.len();
    if recipients.len() != len || tokens.len() != len || amounts.len() != len {
        return Err(ContractError::ArityMismatch {
            action_types: len,
            recipients: recipients.len(),
            tokens: tokens.len(),
            amounts: amounts.len(),
        });
    }
    if duration < config.min_duration {
        return Err(ContractError::DurationTooShort {
            duration,
            min: config.min_duration,
        });
    }
    if deadline_after(env.block.time, duration).is_none() {
        return Err(ContractError::DurationTooLong { duration });
    }
    if amounts.iter().any(Uint128::is_zero) {
        return Err(ContractError::InvalidZeroAmount {});
    }
    let execution = EXECUTION.load(deps.storage)?;

    let current_action_id: u64 = deps.querier.query_wasm_smart(
        execution.as_str(),
        &dao_action_queue::msg::QueryMsg::CurrentActionId {},
    )?;

    let mut action_ids = Vec::with_capacity(len);
    let mut msgs = Vec::with_capacity(len);
    for (offset, (((action_type, recipient), token), amount)) in action_types
        .into_iter()
        .zip(recipients)
        .zip(tokens)
        .zip(amounts)
        .enumerate()
    {
        let id = current_action_id
            .checked_add(offset as u64 + 1)
            .ok_or_else(|| StdError::generic_err("action id overflow"))?;
        msgs.push(WasmMsg::Execute {
            contract_addr: execution.to_string(),
            msg: to_json_binary(&dao_action_queue::msg::ExecuteMsg::AddAction {
                id,
                action_type,
                proposer: info.sender.to_string(),
                recipient,
                token,
                amount,
            })?,
            funds: vec![],
        });
        action_ids.push(id);
    }

    let id = advance_vote_id(deps.storage)?;
    let proposal = Proposal::new(
        info.sender.clone(),
        env.block.time,
        duration,
        action_ids,
        config.min_support_percentage,
    );
    PROPOSALS.save(deps.storage, id, &proposal)?;

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "forward")
        .add_attribute("vote_id", id.to_string())
        .add_attribute("proposer", info.sender)
        .add_attribute("duration", duration.to_string())
        .add_attribute("deadline", proposal.deadline().to_string())
        .add_attribute("action_ids", join_ids(&proposal.action_ids)))
}

pub fn execute_participate_vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    vote_id: u64,
    support: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut proposal = PROPOSALS
        .may_load(deps.storage, vote_id)?
        .ok_or(ContractError::UnknownVote { id: vote_id })?;

    if proposal.current_status(&env.block) != Status::Open {
        return Err(ContractError::VotingClosed { id: vote_id });
    }
    if BALLOTS.has(deps.storage, (vote_id, &info.sender)) {
        return Err(ContractError::AlreadyVoted { id: vote_id });
    }

    let weight = Cw20Ledger::unchecked(config.governance_token)
        .query_balance(&deps.querier, &info.sender)?;
    if weight < config.min_token_hold {
        return Err(ContractError::NotEligible {
            balance: weight,
            min: config.min_token_hold,
        });
    }

    proposal
        .add_vote(support, weight)
        .map_err(StdError::from)?;
    PROPOSALS.save(deps.storage, vote_id, &proposal)?;
    BALLOTS.save(deps.storage, (vote_id, &info.sender), &Ballot { support, weight })?;

    Ok(Response::default()
        .add_attribute("action", "participate_vote")
        .add_attribute("vote_id", vote_id.to_string())
        .add_attribute("voter", info.sender)
        .add_attribute("support", support.to_string())
        .add_attribute("weight", weight))
}

pub fn execute_execute_vote(
    deps: DepsMut,
    env: Env,
    vote_id: u64,
) -> Result<Response, ContractError> {
    let mut proposal = PROPOSALS
        .may_load(deps.storage, vote_id)?
        .ok_or(ContractError::UnknownVote { id: vote_id })?;

    if proposal.status == Status::Executed {
        return Err(ContractError::AlreadyExecuted { id: vote_id });
    }
    if !proposal.deadline_reached(&env.block) {
        return Err(ContractError::VotingStillOpen {
            id: vote_id,
            deadline: proposal.deadline(),
        });
    }

    let outcome = if proposal.is_passed() {
        Outcome::Passed
    } else {
        Outcome::Failed
    };

    // Any trigger that fails reverts this transaction, leaving the
    // proposal open and passed.
    let msgs = match outcome {
        Outcome::Passed => {
            let execution = EXECUTION.load(deps.storage)?;
            proposal
                .action_ids
                .iter()
                .map(|id| {
                    Ok(WasmMsg::Execute {
                        contract_addr: execution.to_string(),
                        msg: to_json_binary(&dao_action_queue::msg::ExecuteMsg::Trigger {
                            id: *id,
                        })?,
                        funds: vec![],
                    })
                })
                .collect::<StdResult<Vec<_>>>()?
        }
        Outcome::Failed => vec![],
    };

    let support_percentage = proposal.support_percentage();
    proposal.status = Status::Executed;
    proposal.outcome = Some(outcome);
    PROPOSALS.save(deps.storage, vote_id, &proposal)?;

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "execute_vote")
        .add_attribute("vote_id", vote_id.to_string())
        .add_attribute("outcome", outcome.to_string())
        .add_attribute("yes_weight", proposal.yes_weight)
        .add_attribute("no_weight", proposal.no_weight)
        .add_attribute("support_percentage", support_percentage))
}

pub fn execute_update_owner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::default().add_attributes(ownership.into_attributes()))
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Vote { vote_id } => query_vote(deps, env, vote_id),
        QueryMsg::ListVotes { start_after, limit } => {
            query_list_votes(deps, env, start_after, limit)
        }
        QueryMsg::ReverseVotes {
            start_before,
            limit,
        } => query_reverse_votes(deps, env, start_before, limit),
        QueryMsg::CurrentVoteId {} => {
            to_json_binary(&VOTE_COUNT.may_load(deps.storage)?.unwrap_or_default())
        }
        QueryMsg::Ballot { vote_id, voter } => query_ballot(deps, vote_id, voter),
        QueryMsg::ListBallots {
            vote_id,
            start_after,
            limit,
        } => query_list_ballots(deps, vote_id, start_after, limit),
        QueryMsg::ExecutionAddress {} => to_json_binary(&EXECUTION.query(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_vote(deps: Deps, env: Env, id: u64) -> StdResult<Binary> {
    let proposal = PROPOSALS.load(deps.storage, id)?;
    to_json_binary(&proposal.into_response(&env.block, id))
}

pub fn query_list_votes(
    deps: Deps,
    env: Env,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let votes = PROPOSALS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| item.map(|(id, proposal)| proposal.into_response(&env.block, id)))
        .collect::<StdResult<Vec<VoteResponse>>>()?;

    to_json_binary(&VoteListResponse { votes })
}

pub fn query_reverse_votes(
    deps: Deps,
    env: Env,
    start_before: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let max = start_before.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let votes = PROPOSALS
        .range(deps.storage, None, max, Order::Descending)
        .take(limit as usize)
        .map(|item| item.map(|(id, proposal)| proposal.into_response(&env.block, id)))
        .collect::<StdResult<Vec<VoteResponse>>>()?;

    to_json_binary(&VoteListResponse { votes })
}

pub fn query_ballot(deps: Deps, vote_id: u64, voter: String) -> StdResult<Binary> {
    let voter = deps.api.addr_validate(&voter)?;
    let ballot = BALLOTS
        .may_load(deps.storage, (vote_id, &voter))?
        .map(|ballot| BallotInfo {
            voter,
            support: ballot.support,
            weight: ballot.weight,
        });
    to_json_binary(&BallotResponse { ballot })
}

pub fn query_list_ballots(
    deps: Deps,
    vote_id: u64,
    start_after: Option<String>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::<&Addr>::exclusive);

    let ballots = BALLOTS
        .prefix(vote_id)
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let (voter, ballot) = item?;
            Ok(BallotInfo {
                voter,
                support: ballot.support,
                weight: ballot.weight,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&BallotListResponse { ballots })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let storage_version: ContractVersion = get_contract_version(deps.storage)?;

    // Only migrate if newer
    if storage_version.version.as_str() < CONTRACT_VERSION {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new().add_attribute("action", "migrate"))
}
