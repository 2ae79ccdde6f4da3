use cosmwasm_std::{Addr, Uint128};
use cw_bindings::BindingResponse;
use cw_multi_test::App;

use crate::{
    msg::QueryMsg,
    query::{BallotListResponse, BallotResponse, VoteListResponse, VoteResponse},
    state::Config,
};

pub(crate) fn query_config(app: &App, governance: &Addr) -> Config {
    app.wrap()
        .query_wasm_smart(governance, &QueryMsg::Config {})
        .unwrap()
}

pub(crate) fn query_vote(app: &App, governance: &Addr, vote_id: u64) -> VoteResponse {
    app.wrap()
        .query_wasm_smart(governance, &QueryMsg::Vote { vote_id })
        .unwrap()
}

pub(crate) fn query_list_votes(
    app: &App,
    governance: &Addr,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> VoteListResponse {
    app.wrap()
        .query_wasm_smart(governance, &QueryMsg::ListVotes { start_after, limit })
        .unwrap()
}

pub(crate) fn query_reverse_votes(
    app: &App,
    governance: &Addr,
    start_before: Option<u64>,
    limit: Option<u64>,
) -> VoteListResponse {
    app.wrap()
        .query_wasm_smart(
            governance,
            &QueryMsg::ReverseVotes {
                start_before,
                limit,
            },
        )
        .unwrap()
}

pub(crate) fn query_current_vote_id(app: &App, governance: &Addr) -> u64 {
    app.wrap()
        .query_wasm_smart(governance, &QueryMsg::CurrentVoteId {})
        .unwrap()
}

pub(crate) fn query_ballot(app: &App, governance: &Addr, vote_id: u64, voter: &str) -> BallotResponse {
    app.wrap()
        .query_wasm_smart(
            governance,
            &QueryMsg::Ballot {
                vote_id,
                voter: voter.to_string(),
            },
        )
        .unwrap()
}

pub(crate) fn query_list_ballots(
    app: &App,
    governance: &Addr,
    vote_id: u64,
    start_after: Option<String>,
    limit: Option<u64>,
) -> BallotListResponse {
    app.wrap()
        .query_wasm_smart(
            governance,
            &QueryMsg::ListBallots {
                vote_id,
                start_after,
                limit,
            },
        )
        .unwrap()
}

pub(crate) fn query_execution_address(app: &App, governance: &Addr) -> BindingResponse {
    app.wrap()
        .query_wasm_smart(governance, &QueryMsg::ExecutionAddress {})
        .unwrap()
}

pub(crate) fn query_cw20_balance(app: &App, token: &Addr, address: &str) -> Uint128 {
    let res: cw20::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

pub(crate) fn query_vault_balance(app: &App, vault: &Addr, token: &Addr) -> Uint128 {
    app.wrap()
        .query_wasm_smart(
            vault,
            &dao_vault::msg::QueryMsg::Balance {
                token: token.to_string(),
            },
        )
        .unwrap()
}

pub(crate) fn query_action(
    app: &App,
    action_queue: &Addr,
    id: u64,
) -> dao_action_queue::state::Action {
    app.wrap()
        .query_wasm_smart(action_queue, &dao_action_queue::msg::QueryMsg::Action { id })
        .unwrap()
}
