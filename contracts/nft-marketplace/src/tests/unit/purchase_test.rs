use crate::tests::test_utils::*;
use crate::*;
use near_sdk::PromiseResult;
use near_sdk::testing_env;

#[test]
fn buy_item_not_listed_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), PRICE).build());

    let err = contract.buy_item(nft(), "1".into()).err().unwrap();
    assert!(matches!(err, MarketplaceError::NotListed(_)));
}

#[test]
fn buy_item_price_not_met_fails() {
    let mut contract = new_contract();
    insert_listing(&mut contract, TOKEN_ID, PRICE);
    testing_env!(context_with_deposit(buyer(), PRICE - 1).build());

    let err = contract.buy_item(nft(), TOKEN_ID.into()).err().unwrap();
    assert!(matches!(err, MarketplaceError::PriceNotMet(_)));
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_some());
}

#[test]
fn buy_item_without_payment_fails() {
    let mut contract = new_contract();
    insert_listing(&mut contract, TOKEN_ID, PRICE);
    testing_env!(context(buyer()).build());

    let err = contract.buy_item(nft(), TOKEN_ID.into()).err().unwrap();
    assert!(matches!(err, MarketplaceError::PriceNotMet(_)));
}

#[test]
fn buy_item_removes_listing_before_transfer() {
    let mut contract = new_contract();
    insert_listing(&mut contract, TOKEN_ID, PRICE);
    testing_env!(context_with_deposit(buyer(), PRICE).build());

    assert!(contract.buy_item(nft(), TOKEN_ID.into()).is_ok());
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
    // Proceeds are only credited once the transfer resolves.
    assert_eq!(contract.get_proceeds(seller()), U128(0));
}

#[test]
fn resolve_purchase_credits_full_payment() {
    let mut contract = new_contract();
    let listing = insert_listing(&mut contract, TOKEN_ID, PRICE);
    contract
        .listings
        .remove(&Contract::make_listing_id(&nft(), TOKEN_ID));
    callback_env(vec![PromiseResult::Successful(vec![])]);

    let overpay = PRICE + 5;
    assert!(contract.resolve_purchase(buyer(), listing, U128(overpay)));

    assert_eq!(contract.get_proceeds(seller()), U128(overpay));
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
    assert!(logged_event("item_bought"));
}

#[test]
fn resolve_purchase_accumulates_proceeds() {
    let mut contract = new_contract();
    let first = insert_listing(&mut contract, "0", PRICE);
    let second = insert_listing(&mut contract, "1", PRICE * 2);
    contract.listings.clear();

    callback_env(vec![PromiseResult::Successful(vec![])]);
    contract.resolve_purchase(buyer(), first, U128(PRICE));
    contract.resolve_purchase(stranger(), second, U128(PRICE * 2));

    assert_eq!(contract.get_proceeds(seller()), U128(PRICE * 3));
}

#[test]
fn resolve_purchase_failure_restores_listing() {
    let mut contract = new_contract();
    let listing = insert_listing(&mut contract, TOKEN_ID, PRICE);
    contract
        .listings
        .remove(&Contract::make_listing_id(&nft(), TOKEN_ID));
    callback_env(vec![PromiseResult::Failed]);

    assert!(!contract.resolve_purchase(buyer(), listing.clone(), U128(PRICE)));

    assert_eq!(contract.get_listing(nft(), TOKEN_ID.into()), Some(listing));
    assert_eq!(contract.get_proceeds(seller()), U128(0));
    assert!(logged_event("purchase_failed"));
}

#[test]
fn resolve_purchase_settles_when_transfer_returns_a_value() {
    let mut contract = new_contract();
    let listing = insert_listing(&mut contract, TOKEN_ID, PRICE);
    contract
        .listings
        .remove(&Contract::make_listing_id(&nft(), TOKEN_ID));
    callback_env(vec![PromiseResult::Successful(b"true".to_vec())]);

    assert!(contract.resolve_purchase(buyer(), listing, U128(PRICE)));

    assert_eq!(contract.get_proceeds(seller()), U128(PRICE));
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_none());
    assert!(!logged_event("purchase_failed"));
}
