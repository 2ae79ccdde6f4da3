use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::{AppResponse, Executor};
use dao_action_queue::state::ActionType;

use crate::{msg::ExecuteMsg, testing::queries::query_current_vote_id};

use super::instantiate::Suite;

/// Approves the vault to pull AMOUNT payout tokens from SENDER, then
/// deposits them.
pub(crate) fn deposit(suite: &mut Suite, sender: &str, amount: u128) {
    suite
        .app
        .execute_contract(
            Addr::unchecked(sender),
            suite.payout_token.clone(),
            &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                spender: suite.vault.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            Addr::unchecked(sender),
            suite.vault.clone(),
            &dao_vault::msg::ExecuteMsg::Deposit {
                token: suite.payout_token.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

pub(crate) fn forward(
    suite: &mut Suite,
    sender: &str,
    duration: u64,
    transfers: Vec<(&str, u128)>,
) -> anyhow::Result<AppResponse> {
    let len = transfers.len();
    suite.app.execute_contract(
        Addr::unchecked(sender),
        suite.governance.clone(),
        &ExecuteMsg::Forward {
            duration,
            action_types: vec![ActionType::TokenTransfer; len],
            recipients: transfers.iter().map(|(r, _)| r.to_string()).collect(),
            tokens: vec![suite.payout_token.to_string(); len],
            amounts: transfers.iter().map(|(_, a)| Uint128::new(*a)).collect(),
        },
        &[],
    )
}

/// Creates a proposal paying out TRANSFERS of the payout token and
/// returns its id.
pub(crate) fn make_proposal(
    suite: &mut Suite,
    sender: &str,
    duration: u64,
    transfers: Vec<(&str, u128)>,
) -> u64 {
    forward(suite, sender, duration, transfers).unwrap();
    query_current_vote_id(&suite.app, &suite.governance)
}

pub(crate) fn vote(
    suite: &mut Suite,
    sender: &str,
    vote_id: u64,
    support: bool,
) -> anyhow::Result<AppResponse> {
    suite.app.execute_contract(
        Addr::unchecked(sender),
        suite.governance.clone(),
        &ExecuteMsg::ParticipateVote { vote_id, support },
        &[],
    )
}

pub(crate) fn execute_vote(
    suite: &mut Suite,
    sender: &str,
    vote_id: u64,
) -> anyhow::Result<AppResponse> {
    suite.app.execute_contract(
        Addr::unchecked(sender),
        suite.governance.clone(),
        &ExecuteMsg::ExecuteVote { vote_id },
        &[],
    )
}

pub(crate) fn transfer_gov_tokens(suite: &mut Suite, sender: &str, recipient: &str, amount: u128) {
    suite
        .app
        .execute_contract(
            Addr::unchecked(sender),
            suite.gov_token.clone(),
            &cw20::Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

pub(crate) fn advance_time(suite: &mut Suite, seconds: u64) {
    suite
        .app
        .update_block(|block| block.time = block.time.plus_seconds(seconds));
}
