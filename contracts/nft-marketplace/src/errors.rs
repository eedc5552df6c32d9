//! Typed errors for the marketplace contract.
//!
//! Returned from `#[handle_result]` methods; the SDK panics with the `Display`
//! message, so every message starts with the variant name for callers that
//! match on failure reasons.

use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketplaceError {
    /// A listing already exists for the token.
    AlreadyListed(String),
    /// No listing exists for the token.
    NotListed(String),
    /// Caller does not own the token or the listing.
    NotOwner(String),
    /// The marketplace is not an approved account for the token.
    NotApprovedForMarketplace(String),
    PriceMustBeAboveZero,
    /// Payment below the listed price, or a non-positive updated price.
    PriceNotMet(String),
    /// Caller has nothing to withdraw.
    NotProceeds,
    InvalidInput(String),
    InsufficientDeposit(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyListed(msg) => write!(f, "AlreadyListed: {}", msg),
            Self::NotListed(msg) => write!(f, "NotListed: {}", msg),
            Self::NotOwner(msg) => write!(f, "NotOwner: {}", msg),
            Self::NotApprovedForMarketplace(msg) => {
                write!(f, "NotApprovedForMarketplace: {}", msg)
            }
            Self::PriceMustBeAboveZero => write!(f, "PriceMustBeAboveZero: price must be above zero"),
            Self::PriceNotMet(msg) => write!(f, "PriceNotMet: {}", msg),
            Self::NotProceeds => write!(f, "NotProceeds: no proceeds to withdraw"),
            Self::InvalidInput(msg) => write!(f, "InvalidInput: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "InsufficientDeposit: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn already_listed(nft_contract_id: &AccountId, token_id: &str) -> Self {
        Self::AlreadyListed(format!("token {} on {} is already listed", token_id, nft_contract_id))
    }
    pub fn not_listed(nft_contract_id: &AccountId, token_id: &str) -> Self {
        Self::NotListed(format!("token {} on {} is not listed", token_id, nft_contract_id))
    }
    pub fn not_owner(what: &str) -> Self {
        Self::NotOwner(format!("only the {} can perform this action", what))
    }
    pub fn not_approved(nft_contract_id: &AccountId, token_id: &str) -> Self {
        Self::NotApprovedForMarketplace(format!(
            "marketplace is not approved for token {} on {}",
            token_id, nft_contract_id
        ))
    }
    pub fn price_not_met(required: u128, offered: u128) -> Self {
        Self::PriceNotMet(format!("required {}, got {}", required, offered))
    }
}
