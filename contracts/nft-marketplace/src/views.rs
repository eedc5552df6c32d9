use crate::*;

#[near]
impl Contract {
    pub fn get_listing(&self, nft_contract_id: AccountId, token_id: String) -> Option<Listing> {
        self.listings
            .get(&Contract::make_listing_id(&nft_contract_id, &token_id))
            .cloned()
    }

    pub fn get_listings(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<Listing> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT);
        self.listings
            .values()
            .skip(from_index.unwrap_or(0) as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    pub fn get_listings_count(&self) -> u32 {
        self.listings.len()
    }

    pub fn get_proceeds(&self, seller: AccountId) -> U128 {
        U128(self.proceeds.get(&seller).copied().unwrap_or(0))
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn version(&self) -> String {
        self.version.clone()
    }
}
