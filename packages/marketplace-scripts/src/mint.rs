//! Mints a sample token and lists it on the marketplace.

use serde_json::json;

use near_workspaces::types::{Gas, NearToken};
use near_workspaces::{Account, AccountId};
use tracing::info;

use crate::deployments::{DeploymentRegistry, BASIC_NFT, NFT_MARKETPLACE};
use crate::events::minted_token_id;
use crate::Error;

/// Covers the approval's storage; the NFT contract refunds the excess.
pub const APPROVAL_DEPOSIT: NearToken = NearToken::from_millinear(10);
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

#[derive(Debug, Clone, PartialEq)]
pub struct MintedListing {
    pub nft_contract_id: AccountId,
    pub marketplace_id: AccountId,
    pub token_id: String,
    pub price: u128,
}

/// Each step waits for its final outcome; the first failure aborts the flow.
pub async fn mint_and_list(
    seller: &Account,
    registry: &DeploymentRegistry,
    price: u128,
    gas: Gas,
) -> Result<MintedListing, Error> {
    let nft_contract_id = registry.account_id(BASIC_NFT)?;
    let marketplace_id = registry.account_id(NFT_MARKETPLACE)?;

    info!("Minting NFT...");
    let minted = seller
        .call(&nft_contract_id, "mint_nft")
        .gas(gas)
        .transact()
        .await?
        .into_result()?;
    let token_id =
        minted_token_id(minted.logs()).ok_or_else(|| Error::MissingEvent("nft_mint".into()))?;

    info!(%token_id, "Approving NFT...");
    seller
        .call(&nft_contract_id, "nft_approve")
        .args_json(json!({
            "token_id": token_id,
            "account_id": marketplace_id,
        }))
        .deposit(APPROVAL_DEPOSIT)
        .gas(gas)
        .transact()
        .await?
        .into_result()?;

    info!(%token_id, price = %price, "Listing NFT...");
    seller
        .call(&marketplace_id, "list_item")
        .args_json(json!({
            "nft_contract_id": nft_contract_id,
            "token_id": token_id,
            "price": price.to_string(),
        }))
        .deposit(ONE_YOCTO)
        .gas(gas)
        .transact()
        .await?
        .into_result()?;
    info!(%token_id, "NFT Listed!");

    Ok(MintedListing {
        nft_contract_id,
        marketplace_id,
        token_id,
        price,
    })
}
