//! Shared cw-multi-test setup: the bridge plus mock transport and vault contracts.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coin, coins, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Empty, Env,
    MessageInfo, Response, StdError, StdResult, Uint128,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::{Item, Map};

use stream_bridge::msg::{ExecuteMsg, InstantiateMsg, NonceResponse, QueryMsg};

pub const DENOM: &str = "uluna";
pub const INITIAL_BALANCE: u128 = 1_000_000_000_000_000_000_000;

// ============================================================================
// Mock Transport
// ============================================================================

pub mod transport {
    use super::*;
    use common::{MessageFeeResponse, SEQUENCE_ATTRIBUTE};

    #[cw_serde]
    pub struct InstantiateMsg {
        pub fee: Coin,
        /// Reject every publish
        pub offline: bool,
        /// Omit the sequence attribute from publish events
        pub silent: bool,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        PostMessage {
            nonce: u32,
            message: Binary,
            consistency_level: u8,
        },
        SetFee {
            fee: Coin,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        MessageFee {},
        Posted { sequence: u64 },
    }

    #[cw_serde]
    pub struct PostedMessage {
        pub emitter: Addr,
        pub nonce: u32,
        pub payload: Binary,
        pub consistency_level: u8,
        pub fee_paid: Vec<Coin>,
    }

    const SETTINGS: Item<InstantiateMsg> = Item::new("settings");
    const SEQUENCE: Item<u64> = Item::new("sequence");
    const POSTED: Map<u64, PostedMessage> = Map::new("posted");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        SETTINGS.save(deps.storage, &msg)?;
        SEQUENCE.save(deps.storage, &0)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        let mut settings = SETTINGS.load(deps.storage)?;
        match msg {
            ExecuteMsg::PostMessage {
                nonce,
                message,
                consistency_level,
            } => {
                if settings.offline {
                    return Err(StdError::generic_err("transport offline"));
                }
                if !settings.fee.amount.is_zero() && info.funds != vec![settings.fee.clone()] {
                    return Err(StdError::generic_err("fee not paid"));
                }

                let sequence = SEQUENCE.load(deps.storage)?;
                SEQUENCE.save(deps.storage, &(sequence + 1))?;
                POSTED.save(
                    deps.storage,
                    sequence,
                    &PostedMessage {
                        emitter: info.sender.clone(),
                        nonce,
                        payload: message,
                        consistency_level,
                        fee_paid: info.funds,
                    },
                )?;

                let mut response = Response::new()
                    .add_attribute("message.sender", info.sender)
                    .add_attribute("message.nonce", nonce.to_string());
                if !settings.silent {
                    response = response.add_attribute(SEQUENCE_ATTRIBUTE, sequence.to_string());
                }
                Ok(response)
            }
            ExecuteMsg::SetFee { fee } => {
                settings.fee = fee;
                SETTINGS.save(deps.storage, &settings)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::MessageFee {} => to_json_binary(&MessageFeeResponse {
                fee: SETTINGS.load(deps.storage)?.fee,
            }),
            QueryMsg::Posted { sequence } => to_json_binary(&POSTED.load(deps.storage, sequence)?),
        }
    }
}

// ============================================================================
// Mock Vault
// ============================================================================

/// CW20 wrapped-asset vault: native deposits mint shares 1:1, withdrawals burn them.
pub mod vault {
    use super::*;
    use cw20_base::state::{BALANCES, TOKEN_INFO};

    #[cw_serde]
    pub struct InstantiateMsg {
        pub denom: String,
        /// Reject every deposit
        pub frozen: bool,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        Deposit {},
        Withdraw { amount: Uint128 },
    }

    const SETTINGS: Item<InstantiateMsg> = Item::new("vault_settings");

    pub fn instantiate(
        mut deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, cw20_base::ContractError> {
        SETTINGS.save(deps.storage, &msg)?;
        cw20_base::contract::instantiate(
            deps.branch(),
            env,
            info,
            cw20_base::msg::InstantiateMsg {
                name: "Wrapped Luna".to_string(),
                symbol: "wLUNA".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: None,
                marketing: None,
            },
        )
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        let settings = SETTINGS.load(deps.storage)?;
        match msg {
            ExecuteMsg::Deposit {} => {
                if settings.frozen {
                    return Err(StdError::generic_err("vault frozen"));
                }
                let amount = info
                    .funds
                    .iter()
                    .find(|c| c.denom == settings.denom)
                    .map(|c| c.amount)
                    .unwrap_or_default();
                if amount.is_zero() {
                    return Err(StdError::generic_err("nothing deposited"));
                }

                BALANCES.update(deps.storage, &info.sender, |b| -> StdResult<_> {
                    Ok(b.unwrap_or_default() + amount)
                })?;
                TOKEN_INFO.update(deps.storage, |mut t| -> StdResult<_> {
                    t.total_supply += amount;
                    Ok(t)
                })?;
                Ok(Response::new().add_attribute("action", "deposit"))
            }
            ExecuteMsg::Withdraw { amount } => {
                BALANCES.update(deps.storage, &info.sender, |b| -> StdResult<_> {
                    Ok(b.unwrap_or_default().checked_sub(amount)?)
                })?;
                TOKEN_INFO.update(deps.storage, |mut t| -> StdResult<_> {
                    t.total_supply = t.total_supply.checked_sub(amount)?;
                    Ok(t)
                })?;
                Ok(Response::new()
                    .add_message(BankMsg::Send {
                        to_address: info.sender.to_string(),
                        amount: vec![coin(amount.u128(), settings.denom)],
                    })
                    .add_attribute("action", "withdraw"))
            }
        }
    }

    pub fn query(deps: Deps, env: Env, msg: cw20_base::msg::QueryMsg) -> StdResult<Binary> {
        cw20_base::contract::query(deps, env, msg)
    }
}

// ============================================================================
// Suite
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        stream_bridge::contract::execute,
        stream_bridge::contract::instantiate,
        stream_bridge::contract::query,
    )
    .with_reply(stream_bridge::contract::reply);
    Box::new(contract)
}

fn contract_transport() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        transport::execute,
        transport::instantiate,
        transport::query,
    ))
}

fn contract_vault() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        vault::execute,
        vault::instantiate,
        vault::query,
    ))
}

/// Knobs for a test deployment
pub struct SuiteConfig {
    pub native_decimals: u8,
    pub transport_fee: u128,
    pub arbiter_fee: u128,
    pub transport_offline: bool,
    pub transport_silent: bool,
    pub vault_frozen: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            native_decimals: 6,
            transport_fee: 1_000,
            arbiter_fee: 0,
            transport_offline: false,
            transport_silent: false,
            vault_frozen: false,
        }
    }
}

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub transport: Addr,
    pub vault: Addr,
    pub admin: Addr,
    pub user: Addr,
    pub other: Addr,
}

pub fn setup() -> Suite {
    setup_with(SuiteConfig::default())
}

pub fn setup_with(cfg: SuiteConfig) -> Suite {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let other = Addr::unchecked("terra1other");

    app.init_modules(|router, _, storage| {
        for account in [&admin, &user, &other] {
            router
                .bank
                .init_balance(storage, account, coins(INITIAL_BALANCE, DENOM))
                .unwrap();
        }
    });

    let transport_code = app.store_code(contract_transport());
    let vault_code = app.store_code(contract_vault());
    let bridge_code = app.store_code(contract_bridge());

    let transport = app
        .instantiate_contract(
            transport_code,
            admin.clone(),
            &transport::InstantiateMsg {
                fee: coin(cfg.transport_fee, DENOM),
                offline: cfg.transport_offline,
                silent: cfg.transport_silent,
            },
            &[],
            "transport",
            None,
        )
        .unwrap();

    let vault = app
        .instantiate_contract(
            vault_code,
            admin.clone(),
            &vault::InstantiateMsg {
                denom: DENOM.to_string(),
                frozen: cfg.vault_frozen,
            },
            &[],
            "vault",
            None,
        )
        .unwrap();

    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                transport: transport.to_string(),
                vault: vault.to_string(),
                native_denom: DENOM.to_string(),
                native_decimals: cfg.native_decimals,
                arbiter_fee: Uint128::from(cfg.arbiter_fee),
                target_chain: None,
                consistency_level: None,
            },
            &[],
            "stream-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    Suite {
        app,
        bridge,
        transport,
        vault,
        admin,
        user,
        other,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A 32-byte account key filled with `fill`
pub fn key(fill: u8) -> Binary {
    Binary::from(vec![fill; 32])
}

/// Look up the first attribute with `key` across all events
pub fn attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

impl Suite {
    pub fn send(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        attached: u128,
    ) -> anyhow::Result<AppResponse> {
        let funds = if attached == 0 {
            vec![]
        } else {
            coins(attached, DENOM)
        };
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, &funds)
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.bridge.clone(), msg)
            .unwrap()
    }

    pub fn nonce(&self) -> u32 {
        let res: NonceResponse = self.query(&QueryMsg::CurrentNonce {});
        res.nonce
    }

    pub fn balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr.to_string(), DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn vault_shares(&self, addr: &Addr) -> u128 {
        let res: cw20::BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.vault.clone(),
                &cw20::Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn posted(&self, sequence: u64) -> transport::PostedMessage {
        self.app
            .wrap()
            .query_wasm_smart(
                self.transport.clone(),
                &transport::QueryMsg::Posted { sequence },
            )
            .unwrap()
    }
}
