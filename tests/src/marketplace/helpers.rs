// =============================================================================
// Marketplace Integration Test Helpers
// =============================================================================
// Every test gets a fresh sandbox with both contracts deployed and initialized.
// Call helpers return the raw `ExecutionFinalResult` so tests can assert on
// failures; view helpers deserialize into the structs below.

use anyhow::Result;
use near_workspaces::network::Sandbox;
use near_workspaces::result::ExecutionFinalResult;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, Contract, Worker};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::utils::{deploy_contract, get_wasm_path};

pub use crate::utils::setup_sandbox as create_sandbox;

// =============================================================================
// Constants
// =============================================================================

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Approval storage deposit; the NFT contract refunds the excess.
pub const APPROVAL_DEPOSIT: NearToken = NearToken::from_millinear(10);

pub const PRICE: NearToken = NearToken::from_near(1);

// =============================================================================
// View Structs
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub nft_contract_id: String,
    pub token_id: String,
    pub seller: String,
    pub price: String,
    pub approval_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub token_id: String,
    pub owner_id: String,
    pub approved_account_ids: Option<HashMap<String, u64>>,
}

// =============================================================================
// Deploy & Init
// =============================================================================

pub struct Env {
    pub worker: Worker<Sandbox>,
    pub marketplace: Contract,
    pub nft: Contract,
    pub seller: Account,
    pub buyer: Account,
}

pub async fn setup() -> Result<Env> {
    let worker = create_sandbox().await?;
    let seller = worker.dev_create_account().await?;
    let buyer = worker.dev_create_account().await?;

    let marketplace = deploy_contract(&worker, &get_wasm_path("nft-marketplace")).await?;
    seller
        .call(marketplace.id(), "new")
        .transact()
        .await?
        .into_result()?;

    let nft = deploy_contract(&worker, &get_wasm_path("basic-nft")).await?;
    seller
        .call(nft.id(), "new")
        .args_json(json!({ "owner_id": seller.id() }))
        .transact()
        .await?
        .into_result()?;

    Ok(Env {
        worker,
        marketplace,
        nft,
        seller,
        buyer,
    })
}

/// Mints a token to `owner` and approves the marketplace for it.
pub async fn mint_and_approve(env: &Env, owner: &Account) -> Result<String> {
    let minted = owner
        .call(env.nft.id(), "mint_nft")
        .max_gas()
        .transact()
        .await?
        .into_result()?;
    let token_id = marketplace_scripts::events::minted_token_id(minted.logs())
        .ok_or_else(|| anyhow::anyhow!("nft_mint event missing"))?;

    owner
        .call(env.nft.id(), "nft_approve")
        .args_json(json!({ "token_id": token_id, "account_id": env.marketplace.id() }))
        .deposit(APPROVAL_DEPOSIT)
        .max_gas()
        .transact()
        .await?
        .into_result()?;
    Ok(token_id)
}

/// Seller-side setup shared by most tests: a minted, approved, listed token.
pub async fn listed_token(env: &Env) -> Result<String> {
    let token_id = mint_and_approve(env, &env.seller).await?;
    list_item(env, &env.seller, &token_id, PRICE).await?.into_result()?;
    Ok(token_id)
}

// =============================================================================
// Calls
// =============================================================================

pub async fn list_item(
    env: &Env,
    caller: &Account,
    token_id: &str,
    price: NearToken,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.marketplace.id(), "list_item")
        .args_json(json!({
            "nft_contract_id": env.nft.id(),
            "token_id": token_id,
            "price": price.as_yoctonear().to_string(),
        }))
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

pub async fn buy_item(
    env: &Env,
    caller: &Account,
    token_id: &str,
    payment: NearToken,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.marketplace.id(), "buy_item")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .deposit(payment)
        .max_gas()
        .transact()
        .await?)
}

pub async fn cancel_listing(
    env: &Env,
    caller: &Account,
    token_id: &str,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.marketplace.id(), "cancel_listing")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

pub async fn update_listing(
    env: &Env,
    caller: &Account,
    token_id: &str,
    new_price: u128,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.marketplace.id(), "update_listing")
        .args_json(json!({
            "nft_contract_id": env.nft.id(),
            "token_id": token_id,
            "new_price": new_price.to_string(),
        }))
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

pub async fn withdraw_proceeds(env: &Env, caller: &Account) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.marketplace.id(), "withdraw_proceeds")
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

// =============================================================================
// Views
// =============================================================================

pub async fn get_listing(env: &Env, token_id: &str) -> Result<Option<Listing>> {
    Ok(env
        .marketplace
        .view("get_listing")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .await?
        .json()?)
}

pub async fn get_proceeds(env: &Env, seller: &Account) -> Result<u128> {
    let amount: String = env
        .marketplace
        .view("get_proceeds")
        .args_json(json!({ "seller": seller.id() }))
        .await?
        .json()?;
    Ok(amount.parse()?)
}

pub async fn nft_token(env: &Env, token_id: &str) -> Result<Option<Token>> {
    Ok(env
        .nft
        .view("nft_token")
        .args_json(json!({ "token_id": token_id }))
        .await?
        .json()?)
}

// =============================================================================
// Assertions
// =============================================================================

/// Asserts the transaction failed with an error whose message contains `needle`.
pub fn assert_failure(result: &ExecutionFinalResult, needle: &str) {
    assert!(result.is_failure(), "expected failure containing {needle}");
    let rendered = format!("{:?}", result.failures());
    assert!(
        rendered.contains(needle),
        "expected {needle} in failure, got {rendered}"
    );
}

/// Marketplace events named `event` in the transaction logs.
pub fn marketplace_events(result: &ExecutionFinalResult, event: &str) -> Vec<Value> {
    marketplace_scripts::events::parse_events(result.logs())
        .into_iter()
        .filter(|e| e.standard == "nft_marketplace" && e.event == event)
        .flat_map(|e| e.data)
        .collect()
}
