//! Deploy the USD engine to Casper livenet/testnet using Odra livenet environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000
//!
//! Optional:
//!   USD_ENGINE_ETH_PRICE=2000          initial WETH feed answer in whole dollars
//!   USD_ENGINE_BTC_PRICE=30000         initial WBTC feed answer in whole dollars
//!   USD_ENGINE_DEPLOYMENT_FILE=deployment.json

use odra::casper_types::U256;
use odra::host::{Deployer, HostRef};
use odra::prelude::*;
use serde::Serialize;

use usd_engine_contracts::engine::{StableEngine, StableEngineInitArgs};
use usd_engine_contracts::price_feed::{ManualPriceFeed, ManualPriceFeedInitArgs, DEFAULT_FEED_DECIMALS};
use usd_engine_contracts::stablecoin::{StableToken, StableTokenInitArgs};

/// Addresses written out after a successful deployment
#[derive(Serialize)]
struct DeploymentRecord {
    chain_name: String,
    deployer: String,
    debt_token: String,
    engine: String,
    collateral: Vec<CollateralRecord>,
}

#[derive(Serialize)]
struct CollateralRecord {
    symbol: String,
    token: String,
    price_feed: String,
    feed_decimals: u8,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn feed_answer(dollars: u64) -> U256 {
    U256::from(dollars) * U256::from(10u64).pow(U256::from(DEFAULT_FEED_DECIMALS))
}

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== USD Engine Livenet Deployment ===");
    println!();

    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = env_or("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT", 200_000_000_000);
    env.set_gas(payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    let eth_price: u64 = env_or("USD_ENGINE_ETH_PRICE", 2_000);
    let btc_price: u64 = env_or("USD_ENGINE_BTC_PRICE", 30_000);

    // ==================== Phase 1: Tokens ====================
    println!("=== Phase 1: Deploying Tokens ===");
    println!();

    let mut tokens = Vec::new();
    for (name, symbol) in [
        ("Decentralized Stable Coin", "DSC"),
        ("Wrapped Ether", "WETH"),
        ("Wrapped Bitcoin", "WBTC"),
    ] {
        println!("Deploying {}...", symbol);
        let token = StableToken::deploy(
            &env,
            StableTokenInitArgs {
                name: name.to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
            },
        );
        println!("{} deployed at: {:?}", symbol, token.address().clone());
        tokens.push(token);
    }
    let mut debt_token = tokens.remove(0);
    let debt_token_addr = debt_token.address().clone();
    let collateral_tokens: Vec<Address> = tokens.iter().map(|t| t.address().clone()).collect();

    println!();

    // ==================== Phase 2: Price Feeds ====================
    println!("=== Phase 2: Deploying Price Feeds ===");
    println!();

    let mut price_feeds = Vec::new();
    for (symbol, price) in [("WETH", eth_price), ("WBTC", btc_price)] {
        println!("Deploying {}/USD feed at ${}...", symbol, price);
        let feed = ManualPriceFeed::deploy(
            &env,
            ManualPriceFeedInitArgs {
                decimals: DEFAULT_FEED_DECIMALS,
                initial_answer: feed_answer(price),
            },
        );
        println!("{}/USD feed deployed at: {:?}", symbol, feed.address().clone());
        price_feeds.push(feed.address().clone());
    }

    println!();

    // ==================== Phase 3: Engine ====================
    println!("=== Phase 3: Deploying StableEngine ===");
    println!();

    let engine = StableEngine::deploy(
        &env,
        StableEngineInitArgs {
            debt_token: debt_token_addr,
            tokens: collateral_tokens.clone(),
            price_feeds: price_feeds.clone(),
        },
    );
    let engine_addr = engine.address().clone();
    println!("StableEngine deployed at: {:?}", engine_addr);

    println!("Authorizing StableEngine as debt token minter...");
    debt_token.add_minter(engine_addr);
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();

    let record = DeploymentRecord {
        chain_name: std::env::var("ODRA_CASPER_LIVENET_CHAIN_NAME").unwrap_or_default(),
        deployer: format!("{:?}", deployer),
        debt_token: format!("{:?}", debt_token_addr),
        engine: format!("{:?}", engine_addr),
        collateral: ["WETH", "WBTC"]
            .iter()
            .zip(collateral_tokens.iter().zip(price_feeds.iter()))
            .map(|(symbol, (token, feed))| CollateralRecord {
                symbol: symbol.to_string(),
                token: format!("{:?}", token),
                price_feed: format!("{:?}", feed),
                feed_decimals: DEFAULT_FEED_DECIMALS,
            })
            .collect(),
    };

    let path: String = env_or("USD_ENGINE_DEPLOYMENT_FILE", "deployment.json".to_string());
    match serde_json::to_string_pretty(&record) {
        Ok(json) => match std::fs::write(&path, json) {
            Ok(()) => println!("Deployment record written to {}", path),
            Err(e) => eprintln!("Failed to write {}: {}", path, e),
        },
        Err(e) => eprintln!("Failed to serialize deployment record: {}", e),
    }

    println!();
    println!("Contract Addresses:");
    println!("  DebtToken:    {:?}", debt_token_addr);
    println!("  StableEngine: {:?}", engine_addr);
    for (token, feed) in collateral_tokens.iter().zip(price_feeds.iter()) {
        println!("  Collateral:   {:?} (feed {:?})", token, feed);
    }
}
