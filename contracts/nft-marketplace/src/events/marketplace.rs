use near_sdk::AccountId;

use super::builder::EventBuilder;
use crate::Listing;

pub fn emit_item_listed(listing: &Listing) {
    EventBuilder::new("item_listed")
        .field("seller", &listing.seller)
        .field("nft_contract_id", &listing.nft_contract_id)
        .field("token_id", &listing.token_id)
        .field("price", listing.price)
        .field_opt("approval_id", listing.approval_id)
        .emit();
}

pub fn emit_item_canceled(listing: &Listing) {
    EventBuilder::new("item_canceled")
        .field("seller", &listing.seller)
        .field("nft_contract_id", &listing.nft_contract_id)
        .field("token_id", &listing.token_id)
        .emit();
}

pub fn emit_item_bought(buyer: &AccountId, listing: &Listing, payment: u128) {
    EventBuilder::new("item_bought")
        .field("buyer", buyer)
        .field("seller", &listing.seller)
        .field("nft_contract_id", &listing.nft_contract_id)
        .field("token_id", &listing.token_id)
        .field("price", payment)
        .emit();
}

pub fn emit_purchase_failed(buyer: &AccountId, listing: &Listing, payment: u128) {
    EventBuilder::new("purchase_failed")
        .field("buyer", buyer)
        .field("seller", &listing.seller)
        .field("nft_contract_id", &listing.nft_contract_id)
        .field("token_id", &listing.token_id)
        .field("refunded", payment)
        .field("reason", "nft_transfer_failed")
        .emit();
}

pub fn emit_proceeds_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new("proceeds_withdrawn")
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}
