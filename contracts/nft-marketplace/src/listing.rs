use crate::events;
use crate::external::*;
use crate::guards::*;
use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub nft_contract_id: AccountId,
    pub token_id: String,
    pub seller: AccountId,
    pub price: U128,
    /// Approval id granted to the marketplace at listing time, replayed on transfer.
    pub approval_id: Option<u64>,
}

#[near]
impl Contract {
    /// Lists `token_id` of `nft_contract_id` at `price`. Ownership and approval
    /// are checked against the NFT contract before the listing is stored.
    #[payable]
    #[handle_result]
    pub fn list_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        check_token_id(&token_id)?;
        let listing_id = Contract::make_listing_id(&nft_contract_id, &token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(&nft_contract_id, &token_id));
        }
        if price.0 == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }

        let seller = env::predecessor_account_id();
        let view_gas = Gas::from_tgas(GAS_NFT_VIEW_TGAS);

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(view_gas)
            .nft_is_approved(token_id.clone(), env::current_account_id(), None)
            .and(
                ext_nft_contract::ext(nft_contract_id.clone())
                    .with_static_gas(view_gas)
                    .nft_token(token_id.clone()),
            )
            .then(
                Contract::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_LISTING_CALLBACK_TGAS))
                    .on_listing_verified(nft_contract_id, token_id, price, seller),
            ))
    }

    #[private]
    #[handle_result]
    pub fn on_listing_verified(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        seller: AccountId,
    ) -> Result<(), MarketplaceError> {
        let token = env::promise_result_checked(1, MAX_TOKEN_RESULT_LEN)
            .ok()
            .and_then(|value| near_sdk::serde_json::from_slice::<Option<Token>>(&value).ok())
            .flatten();
        let token = match token {
            Some(token) if token.owner_id == seller => token,
            _ => return Err(MarketplaceError::not_owner("token owner")),
        };

        let is_approved = env::promise_result_checked(0, 16)
            .ok()
            .and_then(|value| near_sdk::serde_json::from_slice::<bool>(&value).ok())
            .unwrap_or(false);
        if !is_approved {
            return Err(MarketplaceError::not_approved(&nft_contract_id, &token_id));
        }

        // Another listing may have landed while the NFT contract was queried.
        let listing_id = Contract::make_listing_id(&nft_contract_id, &token_id);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketplaceError::already_listed(&nft_contract_id, &token_id));
        }

        let approval_id = token
            .approved_account_ids
            .as_ref()
            .and_then(|approvals| approvals.get(&env::current_account_id()).copied());

        let listing = Listing {
            nft_contract_id,
            token_id,
            seller,
            price,
            approval_id,
        };
        events::emit_item_listed(&listing);
        self.listings.insert(listing_id, listing);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let listing_id = self.check_seller(&actor_id, &nft_contract_id, &token_id)?;

        if let Some(listing) = self.listings.remove(&listing_id) {
            events::emit_item_canceled(&listing);
        }
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        new_price: U128,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        let listing_id = self.check_seller(&actor_id, &nft_contract_id, &token_id)?;
        if new_price.0 == 0 {
            return Err(MarketplaceError::PriceNotMet(
                "new price must be above zero".into(),
            ));
        }

        if let Some(listing) = self.listings.get_mut(&listing_id) {
            listing.price = new_price;
            events::emit_item_listed(listing);
        }
        Ok(())
    }
}

impl Contract {
    pub(crate) fn make_listing_id(nft_contract_id: &AccountId, token_id: &str) -> String {
        format!("{}{}{}", nft_contract_id, DELIMITER, token_id)
    }

    /// Returns the listing id when `actor_id` is the seller of an existing listing.
    pub(crate) fn check_seller(
        &self,
        actor_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<String, MarketplaceError> {
        let listing_id = Contract::make_listing_id(nft_contract_id, token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(nft_contract_id, token_id))?;
        if &listing.seller != actor_id {
            return Err(MarketplaceError::not_owner("seller"));
        }
        Ok(listing_id)
    }
}
