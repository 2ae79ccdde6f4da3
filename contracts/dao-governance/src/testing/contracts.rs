use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub(crate) fn governance_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

pub(crate) fn action_queue_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        dao_action_queue::contract::execute,
        dao_action_queue::contract::instantiate,
        dao_action_queue::contract::query,
    );
    Box::new(contract)
}

pub(crate) fn vault_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        dao_vault::contract::execute,
        dao_vault::contract::instantiate,
        dao_vault::contract::query,
    );
    Box::new(contract)
}

pub(crate) fn cw20_base_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}
