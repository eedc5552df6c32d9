use near_sdk::NearToken;

pub const MAX_TOKEN_ID_LEN: usize = 256;
// Storage key invariant: delimiter cannot appear in NEAR account IDs, preventing listing_id key collisions.
pub const DELIMITER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 100;

// Upper bound on the JSON returned by `nft_token`.
pub const MAX_TOKEN_RESULT_LEN: usize = 16_384;
pub const MAX_TRANSFER_RESULT_LEN: usize = 16;

pub const GAS_NFT_VIEW_TGAS: u64 = 10;
pub const GAS_LISTING_CALLBACK_TGAS: u64 = 20;
pub const GAS_NFT_TRANSFER_TGAS: u64 = 30;
pub const GAS_RESOLVE_PURCHASE_TGAS: u64 = 20;
pub const GAS_WITHDRAW_CALLBACK_TGAS: u64 = 10;
