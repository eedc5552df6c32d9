use crate::events;
use crate::external::*;
use crate::*;

#[near]
impl Contract {
    /// Buys a listed token. The attached deposit is the payment and must cover
    /// the listed price; the whole payment is credited to the seller.
    #[payable]
    #[handle_result]
    pub fn buy_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        let listing_id = Contract::make_listing_id(&nft_contract_id, &token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::not_listed(&nft_contract_id, &token_id))?;

        let payment = env::attached_deposit().as_yoctonear();
        if payment < listing.price.0 {
            return Err(MarketplaceError::price_not_met(listing.price.0, payment));
        }

        let buyer = env::predecessor_account_id();

        // Security boundary: remove listing before XCC; a failed transfer restores it and refunds the buyer.
        self.listings.remove(&listing_id);

        Ok(ext_nft_contract::ext(nft_contract_id)
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer.clone(),
                token_id,
                listing.approval_id,
                Some("Purchased on NFT Marketplace".to_string()),
            )
            .then(
                Contract::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE_TGAS))
                    .resolve_purchase(buyer, listing, U128(payment)),
            ))
    }

    /// Settles a purchase once the token transfer has resolved. Returns whether
    /// the sale went through.
    #[private]
    pub fn resolve_purchase(&mut self, buyer: AccountId, listing: Listing, payment: U128) -> bool {
        // Must not panic: the buyer's payment is only safe if this callback completes.
        // Only an explicit failure means the token stayed put; any returned value is a transfer.
        let transferred = !matches!(
            env::promise_result_checked(0, MAX_TRANSFER_RESULT_LEN),
            Err(near_sdk::PromiseError::Failed)
        );
        if !transferred {
            let listing_id = Contract::make_listing_id(&listing.nft_contract_id, &listing.token_id);
            if !self.listings.contains_key(&listing_id) {
                self.listings.insert(listing_id, listing.clone());
            }
            if payment.0 > 0 {
                let _ = Promise::new(buyer.clone()).transfer(NearToken::from_yoctonear(payment.0));
            }
            events::emit_purchase_failed(&buyer, &listing, payment.0);
            return false;
        }

        self.credit_proceeds(&listing.seller, payment.0);
        events::emit_item_bought(&buyer, &listing, payment.0);
        true
    }
}
