use marketplace::{ constants::MAX_PAGE_SIZE, error::ErrorCode };
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address, Env };
use test_case::test_case;

use super::setup::{
    create_token_contract,
    deploy_ledger_contract,
    LedgerTest,
    MAX_DURATION_MINUTES,
    MIN_DURATION_MINUTES,
    ONE,
};
use crate::{ contract::{ AuctionLedger, AuctionLedgerClient }, storage::Config };

#[test]
fn initialize_stores_config() {
    let test = LedgerTest::setup();

    assert_eq!(test.ledger.query_config(), Config {
        admin: test.admin.clone(),
        verification_registry: test.registry.address.clone(),
        bid_token: test.token.address.clone(),
        min_duration_minutes: MIN_DURATION_MINUTES,
        max_duration_minutes: MAX_DURATION_MINUTES,
    });
    assert_eq!(test.ledger.query_admin(), test.admin);
    assert_eq!(test.ledger.auction_counter(), 0);
    assert_eq!(test.ledger.query_escrow_balance(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initializing_twice_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry = Address::generate(&env);
    let (token, _) = create_token_contract(&env, &admin);
    let ledger = deploy_ledger_contract(&env, &admin, &registry, &token.address);

    ledger.initialize(&admin, &registry, &token.address, &1, &60);
}

#[test_case(0, 60 ; "sub minute minimum")]
#[test_case(30, 10 ; "maximum below minimum")]
fn initialize_rejects_invalid_duration_bounds(min_duration_minutes: u64, max_duration_minutes: u64) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let registry = Address::generate(&env);
    let (token, _) = create_token_contract(&env, &admin);
    let ledger = AuctionLedgerClient::new(&env, &env.register(AuctionLedger, ()));

    let result = ledger.try_initialize(
        &admin,
        &registry,
        &token.address,
        &min_duration_minutes,
        &max_duration_minutes
    );

    assert_eq!(result, Err(Ok(ErrorCode::InvalidConfig)));
    assert_eq!(ledger.try_query_config(), Err(Ok(ErrorCode::NotInitialized)));
}

#[test]
fn admin_updates_config() {
    let test = LedgerTest::setup();
    let new_admin = Address::generate(&test.env);

    test.ledger.update_config(&test.admin, &Some(new_admin.clone()), &None, &Some(5), &Some(120));

    let config = test.ledger.query_config();
    assert_eq!(config.admin, new_admin);
    assert_eq!(config.verification_registry, test.registry.address);
    assert_eq!(config.min_duration_minutes, 5);
    assert_eq!(config.max_duration_minutes, 120);

    assert_eq!(
        test.ledger.try_update_config(&test.admin, &None, &None, &Some(1), &None),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

#[test]
fn update_config_validates_bounds() {
    let test = LedgerTest::setup();

    let result = test.ledger.try_update_config(&test.admin, &None, &None, &Some(10), &Some(5));

    assert_eq!(result, Err(Ok(ErrorCode::InvalidConfig)));
    assert_eq!(test.ledger.query_config().min_duration_minutes, MIN_DURATION_MINUTES);
}

#[test]
fn non_admin_cannot_update_config() {
    let test = LedgerTest::setup();
    let stranger = Address::generate(&test.env);

    let result = test.ledger.try_update_config(&stranger, &Some(stranger.clone()), &None, &None, &None);

    assert_eq!(result, Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(test.ledger.query_admin(), test.admin);
}

#[test]
fn tightened_duration_bounds_apply_to_new_auctions() {
    let test = LedgerTest::setup();
    test.ledger.update_config(&test.admin, &None, &None, &Some(10), &None);
    let token_id = test.listable_token();

    let result = test.ledger.try_create_auction(
        &test.creator,
        &test.nft.address,
        &token_id,
        &ONE,
        &5
    );

    assert_eq!(result, Err(Ok(ErrorCode::InvalidDuration)));
}

#[test]
fn query_auctions_pages_by_id() {
    let test = LedgerTest::setup();
    for _ in 0..5 {
        test.open_auction(ONE, 5);
    }

    let page = test.ledger.query_auctions(&0, &2);
    assert_eq!(page.len(), 2);
    assert_eq!(page.get(0).unwrap().id, 1);
    assert_eq!(page.get(1).unwrap().id, 2);

    let page = test.ledger.query_auctions(&4, &10);
    assert_eq!(page.len(), 2);
    assert_eq!(page.get(0).unwrap().id, 4);
    assert_eq!(page.get(1).unwrap().id, 5);

    assert_eq!(test.ledger.query_auctions(&6, &10).len(), 0);
}

#[test]
fn query_auctions_caps_page_size() {
    let test = LedgerTest::setup();
    for _ in 0..MAX_PAGE_SIZE + 1 {
        test.open_auction(ONE, 5);
    }

    assert_eq!(test.ledger.query_auctions(&1, &u32::MAX).len(), MAX_PAGE_SIZE);
}
