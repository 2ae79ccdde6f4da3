#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult, Uint128,
    WasmMsg,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw_bindings::Binding;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    current_action_id, Action, ActionType, ACTIONS, CURRENT_ACTION_ID, VAULT, VOTING,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:dao-action-queue";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u64 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
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
        ExecuteMsg::SetVaultAddress { address } => {
            execute_bind(deps, info, &VAULT, "set_vault_address", address)
        }
        ExecuteMsg::SetVotingAddress { address } => {
            execute_bind(deps, info, &VOTING, "set_voting_address", address)
        }
        ExecuteMsg::AddAction {
            id,
            action_type,
            proposer,
            recipient,
            token,
            amount,
        } => execute_add_action(
            deps,
            info,
            id,
            action_type,
            proposer,
            recipient,
            token,
            amount,
        ),
        ExecuteMsg::Trigger { id } => execute_trigger(deps, info, id),
        ExecuteMsg::UpdateOwnership(action) => execute_update_owner(deps, env, info, action),
    }
}

pub fn execute_bind(
    deps: DepsMut,
    info: MessageInfo,
    binding: &Binding,
    action: &str,
    address: String,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    binding.bind(deps.storage, addr.clone())?;

    Ok(Response::default()
        .add_attribute("action", action)
        .add_attribute(binding.role(), addr))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_add_action(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
    action_type: ActionType,
    proposer: String,
    recipient: String,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    VOTING.assert_caller(deps.storage, &info.sender)?;
    // An action that could never be triggered is not worth recording.
    VAULT.load(deps.storage)?;

    let current = current_action_id(deps.storage)?;
    if id <= current {
        return Err(ContractError::DuplicateActionId { id });
    }
    if id != current + 1 {
        return Err(ContractError::ActionIdOutOfSequence {
            id,
            expected: current + 1,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let action = Action {
        id,
        action_type,
        proposer: deps.api.addr_validate(&proposer)?,
        recipient: deps.api.addr_validate(&recipient)?,
        token: deps.api.addr_validate(&token)?,
        amount,
        triggered: false,
    };
    ACTIONS.save(deps.storage, id, &action)?;
    CURRENT_ACTION_ID.save(deps.storage, &id)?;

    Ok(Response::default()
        .add_attribute("action", "add_action")
        .add_attribute("action_id", id.to_string())
        .add_attribute("action_type", action.action_type.to_string())
        .add_attribute("proposer", action.proposer)
        .add_attribute("recipient", action.recipient)
        .add_attribute("token", action.token)
        .add_attribute("amount", action.amount))
}

pub fn execute_trigger(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    VOTING.assert_caller(deps.storage, &info.sender)?;

    let mut action = ACTIONS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::UnknownAction { id })?;
    if action.triggered {
        return Err(ContractError::AlreadyTriggered { id });
    }
    let vault = VAULT.load(deps.storage)?;

    // If the vault can not pay, the transfer message fails and this
    // write is rolled back with it.
    action.triggered = true;
    ACTIONS.save(deps.storage, id, &action)?;

    let msg = match action.action_type {
        ActionType::TokenTransfer => WasmMsg::Execute {
            contract_addr: vault.to_string(),
            msg: to_json_binary(&dao_vault::msg::ExecuteMsg::Transfer {
                token: action.token.to_string(),
                recipient: action.recipient.to_string(),
                amount: action.amount,
            })?,
            funds: vec![],
        },
    };

    Ok(Response::default()
        .add_message(msg)
        .add_attribute("action", "trigger")
        .add_attribute("action_id", id.to_string())
        .add_attribute("recipient", action.recipient)
        .add_attribute("token", action.token)
        .add_attribute("amount", action.amount))
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

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Action { id } => to_json_binary(&ACTIONS.load(deps.storage, id)?),
        QueryMsg::ListActions { start_after, limit } => {
            query_list_actions(deps, start_after, limit)
        }
        QueryMsg::CurrentActionId {} => to_json_binary(&current_action_id(deps.storage)?),
        QueryMsg::VaultAddress {} => to_json_binary(&VAULT.query(deps.storage)?),
        QueryMsg::VotingAddress {} => to_json_binary(&VOTING.query(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_list_actions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let min = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let actions = ACTIONS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| item.map(|(_, action)| action))
        .collect::<StdResult<Vec<Action>>>()?;
    to_json_binary(&actions)
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
