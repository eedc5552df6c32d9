//! NFT Marketplace: fixed-price listings of external NEP-171 tokens, with seller proceeds held until withdrawn.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, LookupMap};
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise};

// --- Modules ---

pub mod constants;
mod errors;
mod events;
mod external;
mod guards;
mod listing;
mod proceeds;
mod purchase;
mod storage;
mod views;


pub use constants::*;
pub use errors::MarketplaceError;
pub use listing::Listing;
pub use storage::StorageKey;

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,
    // Keyed by `"{nft_contract_id}:{token_id}"`; at most one listing per token.
    pub listings: IterableMap<String, Listing>,
    // Absent key reads as zero; zeroed balances are removed.
    pub proceeds: LookupMap<AccountId, u128>,
}

#[near]
impl Contract {
    #[init]
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id: env::predecessor_account_id(),
            listings: IterableMap::new(StorageKey::Listings),
            proceeds: LookupMap::new(StorageKey::Proceeds),
        }
    }
}
