use marketplace::error::ErrorCode;
use soroban_sdk::{ testutils::Address as _, Address };

use super::setup::RegistryTest;

#[test]
fn owner_manages_verifier_set() {
    let test = RegistryTest::setup();
    let newcomer = Address::generate(&test.env);

    assert!(test.registry.is_verifier(&test.verifier));
    assert!(!test.registry.is_verifier(&newcomer));

    test.registry.add_verifier(&test.owner, &newcomer);
    assert!(test.registry.is_verifier(&newcomer));

    test.registry.remove_verifier(&test.owner, &newcomer);
    assert!(!test.registry.is_verifier(&newcomer));
}

#[test]
fn verifier_changes_are_idempotent() {
    let test = RegistryTest::setup();
    let stranger = Address::generate(&test.env);

    test.registry.add_verifier(&test.owner, &test.verifier);
    assert!(test.registry.is_verifier(&test.verifier));

    test.registry.remove_verifier(&test.owner, &stranger);
    test.registry.remove_verifier(&test.owner, &stranger);
    assert!(!test.registry.is_verifier(&stranger));
}

#[test]
fn only_owner_manages_verifiers() {
    let test = RegistryTest::setup();
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.registry.try_add_verifier(&stranger, &stranger),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.registry.try_remove_verifier(&test.verifier, &test.verifier),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert!(test.registry.is_verifier(&test.verifier));
}

#[test]
fn removed_verifier_loses_access() {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);
    test.registry.request_verification(&artist, &token_id);

    test.registry.remove_verifier(&test.owner, &test.verifier);

    assert_eq!(
        test.registry.try_verify_nft(&test.verifier, &token_id, &test.reason("ok")),
        Err(Ok(ErrorCode::NotVerifier))
    );
}

#[test]
fn ownership_transfer_hands_over_verifier_management() {
    let test = RegistryTest::setup();
    let successor = Address::generate(&test.env);
    let newcomer = Address::generate(&test.env);

    test.registry.transfer_ownership(&test.owner, &successor);
    assert_eq!(test.registry.query_owner(), successor);

    assert_eq!(
        test.registry.try_add_verifier(&test.owner, &newcomer),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    test.registry.add_verifier(&successor, &newcomer);
    assert!(test.registry.is_verifier(&newcomer));
}

#[test]
fn reports_configured_collection() {
    let test = RegistryTest::setup();

    assert_eq!(test.registry.query_nft_contract(), test.nft.address);
}
