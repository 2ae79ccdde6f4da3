#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw20::Cw20ReceiveMsg;
use cw_ledger::Cw20Ledger;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ReceiveMsg, TokenBalance};
use crate::state::{credit, load_balance, BALANCES, EXECUTION};

pub(crate) const CONTRACT_NAME: &str = "crates.io:dao-vault";
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
        ExecuteMsg::Deposit { token, amount } => execute_deposit(deps, env, info, token, amount),
        ExecuteMsg::Receive(msg) => execute_receive(deps, info, msg),
        ExecuteMsg::SetExecutionAddress { address } => {
            execute_set_execution_address(deps, info, address)
        }
        ExecuteMsg::Transfer {
            token,
            recipient,
            amount,
        } => execute_transfer(deps, info, token, recipient, amount),
        ExecuteMsg::UpdateOwnership(action) => execute_update_owner(deps, env, info, action),
    }
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }

    let ledger = Cw20Ledger::checked(deps.as_ref(), &token)?;
    let allowance = ledger.query_allowance(
        &deps.querier,
        &env.block,
        &info.sender,
        &env.contract.address,
    )?;
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance { allowance, amount });
    }

    let balance = credit(deps.storage, ledger.addr(), amount)?;
    let pull = ledger.transfer_from_msg(&info.sender, &env.contract.address, amount)?;

    Ok(Response::default()
        .add_message(pull)
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("token", ledger.to_string())
        .add_attribute("amount", amount)
        .add_attribute("balance", balance))
}

pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let msg: ReceiveMsg = from_json(&wrapper.msg)?;
    let sender = deps.api.addr_validate(&wrapper.sender)?;
    match msg {
        ReceiveMsg::Deposit {} => {
            if wrapper.amount.is_zero() {
                return Err(ContractError::InvalidZeroAmount {});
            }
            // The sending contract is the token; the tokens have
            // already been moved to us by the time this runs.
            let ledger = Cw20Ledger::checked(deps.as_ref(), info.sender.as_str())?;
            let balance = credit(deps.storage, ledger.addr(), wrapper.amount)?;
            Ok(Response::default()
                .add_attribute("action", "deposit")
                .add_attribute("sender", sender)
                .add_attribute("token", info.sender)
                .add_attribute("amount", wrapper.amount)
                .add_attribute("balance", balance))
        }
    }
}

pub fn execute_set_execution_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let execution = deps.api.addr_validate(&address)?;
    EXECUTION.bind(deps.storage, execution.clone())?;

    Ok(Response::default()
        .add_attribute("action", "set_execution_address")
        .add_attribute("execution", execution))
}

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    EXECUTION.assert_caller(deps.storage, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount {});
    }
    let token = deps.api.addr_validate(&token)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let balance = load_balance(deps.storage, &token)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance { balance, amount });
    }
    let remaining = balance - amount;
    BALANCES.save(deps.storage, &token, &remaining)?;

    let ledger = Cw20Ledger::unchecked(token);
    let send = ledger.transfer_msg(&recipient, amount)?;

    Ok(Response::default()
        .add_message(send)
        .add_attribute("action", "transfer")
        .add_attribute("token", ledger.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("balance", remaining))
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
        QueryMsg::Balance { token } => query_balance(deps, token),
        QueryMsg::ListBalances { start_after, limit } => {
            query_list_balances(deps, start_after, limit)
        }
        QueryMsg::ExecutionAddress {} => to_json_binary(&EXECUTION.query(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_balance(deps: Deps, token: String) -> StdResult<Binary> {
    let token = deps.api.addr_validate(&token)?;
    to_json_binary(&load_balance(deps.storage, &token)?)
}

pub fn query_list_balances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let start_after = start_after
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;
    let min = start_after.as_ref().map(Bound::<&Addr>::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    let balances = BALANCES
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let (token, balance) = item?;
            Ok(TokenBalance { token, balance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&balances)
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
