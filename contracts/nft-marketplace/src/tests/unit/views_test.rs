use crate::tests::test_utils::*;
use crate::*;

#[test]
fn new_sets_owner_and_version() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), seller());
    assert_eq!(contract.version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn proceeds_default_to_zero() {
    let contract = new_contract();
    assert_eq!(contract.get_proceeds(buyer()), U128(0));
}

#[test]
fn get_listings_paginates() {
    let mut contract = new_contract();
    for i in 0..5 {
        insert_listing(&mut contract, &i.to_string(), PRICE + i as u128);
    }

    assert_eq!(contract.get_listings_count(), 5);
    let page = contract.get_listings(Some(1), Some(2));
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].token_id, "1");
    assert_eq!(page[1].token_id, "2");
    assert_eq!(contract.get_listings(Some(4), None).len(), 1);
}

#[test]
fn listings_are_keyed_per_contract_and_token() {
    let mut contract = new_contract();
    insert_listing(&mut contract, TOKEN_ID, PRICE);

    let other_nft: AccountId = "other-nft.near".parse().unwrap();
    assert!(contract.get_listing(other_nft, TOKEN_ID.into()).is_none());
    assert!(contract.get_listing(nft(), TOKEN_ID.into()).is_some());
}
