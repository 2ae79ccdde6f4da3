use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20Coin;
use cw_multi_test::{App, Executor};

use crate::msg::InstantiateMsg;

use super::{
    contracts::{action_queue_contract, cw20_base_contract, governance_contract, vault_contract},
    ALICE, BOB, CAROL, CREATOR_ADDR,
};

pub(crate) struct Suite {
    pub app: App,
    pub governance: Addr,
    pub action_queue: Addr,
    pub vault: Addr,
    /// Balances of this token are vote weights.
    pub gov_token: Addr,
    /// The token the vault holds and proposals pay out.
    pub payout_token: Addr,
}

pub(crate) fn get_default_instantiate(gov_token: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        owner: None,
        name: "My DAO".to_string(),
        min_duration: 60,
        min_support_percentage: 50,
        min_token_hold: Uint128::new(1),
        governance_token: gov_token.to_string(),
    }
}

pub(crate) fn instantiate_cw20(
    app: &mut App,
    name: &str,
    symbol: &str,
    initial_balances: Vec<Cw20Coin>,
) -> Addr {
    let cw20_id = app.store_code(cw20_base_contract());
    app.instantiate_contract(
        cw20_id,
        Addr::unchecked(CREATOR_ADDR),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances,
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

/// Instantiates the governance and payout tokens. The creator holds
/// 4000 governance tokens and every payout token; alice, bob and
/// carol hold 3000, 2000 and 1000 governance tokens.
pub(crate) fn instantiate_tokens(app: &mut App) -> (Addr, Addr) {
    let gov_token = instantiate_cw20(
        app,
        "DAO Token",
        "DAOT",
        vec![
            Cw20Coin {
                address: CREATOR_ADDR.to_string(),
                amount: Uint128::new(4000),
            },
            Cw20Coin {
                address: ALICE.to_string(),
                amount: Uint128::new(3000),
            },
            Cw20Coin {
                address: BOB.to_string(),
                amount: Uint128::new(2000),
            },
            Cw20Coin {
                address: CAROL.to_string(),
                amount: Uint128::new(1000),
            },
        ],
    );
    let payout_token = instantiate_cw20(
        app,
        "DAO Action Token",
        "DAOAT",
        vec![Cw20Coin {
            address: CREATOR_ADDR.to_string(),
            amount: Uint128::new(1000),
        }],
    );
    (gov_token, payout_token)
}

/// Instantiates the tokens and the three DAO contracts without
/// binding them to each other. MSG builds the governance contract's
/// instantiate message from the governance token's address.
pub(crate) fn instantiate_unwired(msg: impl FnOnce(&Addr) -> InstantiateMsg) -> Suite {
    let mut app = App::default();
    let (gov_token, payout_token) = instantiate_tokens(&mut app);

    let vault_id = app.store_code(vault_contract());
    let action_queue_id = app.store_code(action_queue_contract());
    let governance_id = app.store_code(governance_contract());

    let vault = app
        .instantiate_contract(
            vault_id,
            Addr::unchecked(CREATOR_ADDR),
            &dao_vault::msg::InstantiateMsg { owner: None },
            &[],
            "vault",
            None,
        )
        .unwrap();
    let action_queue = app
        .instantiate_contract(
            action_queue_id,
            Addr::unchecked(CREATOR_ADDR),
            &dao_action_queue::msg::InstantiateMsg { owner: None },
            &[],
            "action queue",
            None,
        )
        .unwrap();
    let governance = app
        .instantiate_contract(
            governance_id,
            Addr::unchecked(CREATOR_ADDR),
            &msg(&gov_token),
            &[],
            "governance",
            Some(CREATOR_ADDR.to_string()),
        )
        .unwrap();

    Suite {
        app,
        governance,
        action_queue,
        vault,
        gov_token,
        payout_token,
    }
}

/// Binds the contracts to each other in deployment order.
pub(crate) fn wire(suite: &mut Suite) {
    let creator = Addr::unchecked(CREATOR_ADDR);
    suite
        .app
        .execute_contract(
            creator.clone(),
            suite.action_queue.clone(),
            &dao_action_queue::msg::ExecuteMsg::SetVaultAddress {
                address: suite.vault.to_string(),
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            creator.clone(),
            suite.action_queue.clone(),
            &dao_action_queue::msg::ExecuteMsg::SetVotingAddress {
                address: suite.governance.to_string(),
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            creator.clone(),
            suite.governance.clone(),
            &crate::msg::ExecuteMsg::SetExecutionAddress {
                address: suite.action_queue.to_string(),
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            creator,
            suite.vault.clone(),
            &dao_vault::msg::ExecuteMsg::SetExecutionAddress {
                address: suite.action_queue.to_string(),
            },
            &[],
        )
        .unwrap();
}

/// A wired DAO whose vault holds 500 payout tokens.
pub(crate) fn instantiate_with_default_suite() -> Suite {
    let mut suite = instantiate_unwired(get_default_instantiate);
    wire(&mut suite);
    super::execute::deposit(&mut suite, CREATOR_ADDR, 500);
    suite
}
