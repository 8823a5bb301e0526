//! Shared deployment for the integration tests.
//!
//! Deploys a debt token, two collateral tokens (WETH with an 8-decimal feed,
//! WBTC with an 18-decimal feed) and an engine listing both. Alice and Bob
//! each start with 100 of every collateral token. The admin deploys
//! everything and remains the caller when `setup` returns.

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;
use usd_engine_contracts::engine::{StableEngine, StableEngineHostRef, StableEngineInitArgs};
use usd_engine_contracts::price_feed::{
    ManualPriceFeed, ManualPriceFeedHostRef, ManualPriceFeedInitArgs,
};
use usd_engine_contracts::stablecoin::{StableToken, StableTokenHostRef, StableTokenInitArgs};

/// Default staleness bound expressed in block-time units
pub const MAX_PRICE_AGE_MILLIS: u64 = 3_600 * 1_000;

/// `n` whole tokens at 18 decimals
pub fn wad(n: u64) -> U256 {
    U256::from(n) * U256::from(1_000_000_000_000_000_000u128)
}

/// `n` dollars at 8 decimals
pub fn usd8(n: u64) -> U256 {
    U256::from(n) * U256::from(100_000_000u64)
}

#[derive(Clone, Copy)]
pub enum Collateral {
    Weth,
    Wbtc,
}

pub struct Fixture {
    pub env: HostEnv,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub charlie: Address,
    pub engine: StableEngineHostRef,
    pub dsc: StableTokenHostRef,
    pub weth: StableTokenHostRef,
    pub wbtc: StableTokenHostRef,
    pub eth_feed: ManualPriceFeedHostRef,
    pub btc_feed: ManualPriceFeedHostRef,
}

impl Fixture {
    pub fn setup() -> Self {
        let env = odra_test::env();
        let admin = env.get_account(0);
        let alice = env.get_account(1);
        let bob = env.get_account(2);
        let charlie = env.get_account(3);
        env.set_caller(admin);

        let eth_feed = ManualPriceFeed::deploy(
            &env,
            ManualPriceFeedInitArgs {
                decimals: 8,
                initial_answer: usd8(2_000),
            },
        );
        let btc_feed = ManualPriceFeed::deploy(
            &env,
            ManualPriceFeedInitArgs {
                decimals: 18,
                initial_answer: wad(30_000),
            },
        );

        let mut dsc = deploy_token(&env, "Decentralized Stable Coin", "DSC");
        let mut weth = deploy_token(&env, "Wrapped Ether", "WETH");
        let mut wbtc = deploy_token(&env, "Wrapped Bitcoin", "WBTC");

        for token in [&mut weth, &mut wbtc] {
            token.add_minter(admin);
            token.mint(alice, wad(100));
            token.mint(bob, wad(100));
        }

        let engine = StableEngine::deploy(
            &env,
            StableEngineInitArgs {
                debt_token: dsc.address().clone(),
                tokens: vec![weth.address().clone(), wbtc.address().clone()],
                price_feeds: vec![eth_feed.address().clone(), btc_feed.address().clone()],
            },
        );
        dsc.add_minter(engine.address().clone());

        Self {
            env,
            admin,
            alice,
            bob,
            charlie,
            engine,
            dsc,
            weth,
            wbtc,
            eth_feed,
            btc_feed,
        }
    }

    /// Approve and deposit `amount` of `collateral` as `user`, then hand the
    /// caller back to the admin.
    pub fn deposit(&mut self, user: Address, collateral: Collateral, amount: U256) {
        let engine = self.engine_address();
        let token = match collateral {
            Collateral::Weth => &mut self.weth,
            Collateral::Wbtc => &mut self.wbtc,
        };
        let token_address = token.address().clone();

        self.env.set_caller(user);
        token.approve(engine, amount);
        self.engine.deposit(token_address, amount);
        self.env.set_caller(self.admin);
    }

    pub fn engine_address(&self) -> Address {
        self.engine.address().clone()
    }

    pub fn dsc_address(&self) -> Address {
        self.dsc.address().clone()
    }

    pub fn weth_address(&self) -> Address {
        self.weth.address().clone()
    }

    pub fn wbtc_address(&self) -> Address {
        self.wbtc.address().clone()
    }

    pub fn eth_feed_address(&self) -> Address {
        self.eth_feed.address().clone()
    }

    pub fn btc_feed_address(&self) -> Address {
        self.btc_feed.address().clone()
    }
}

fn deploy_token(env: &HostEnv, name: &str, symbol: &str) -> StableTokenHostRef {
    StableToken::deploy(
        env,
        StableTokenInitArgs {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 18,
        },
    )
}
