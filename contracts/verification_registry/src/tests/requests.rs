use marketplace::{ error::ErrorCode, types::{ VerificationRecord, VerificationStatus } };
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::{ Address as _, Ledger }, vec, Address, Env };
use test_case::test_case;

use super::setup::{ deploy_nft_contract, deploy_registry_contract, RegistryTest };
use crate::storage::VerificationDecision;

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initializing_twice_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let nft = deploy_nft_contract(&env, &owner);
    let registry = deploy_registry_contract(&env, &owner, &nft.address);

    registry.initialize(&owner, &nft.address);
}

#[test]
fn unknown_token_reports_not_requested() {
    let test = RegistryTest::setup();

    assert_eq!(test.registry.get_verification_request(&9), VerificationRecord::not_requested(&test.env));
    assert!(!test.registry.is_nft_verified(&9));
}

#[test]
fn request_opens_pending_record() {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);

    test.env.ledger().with_mut(|li| {
        li.timestamp = 1_000;
    });
    test.registry.request_verification(&artist, &token_id);

    let record = test.registry.get_verification_request(&token_id);
    assert_eq!(record, VerificationRecord {
        requester: Some(artist),
        status: VerificationStatus::Pending,
        reason: test.reason(""),
        request_time: 1_000,
    });
    assert!(!test.registry.is_nft_verified(&token_id));
}

#[test]
fn reject_then_rerequest_then_verify() {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 5);
    assert_eq!(token_id, 5);

    test.registry.request_verification(&artist, &5);
    assert_eq!(test.registry.get_verification_request(&5).status, VerificationStatus::Pending);

    test.registry.reject_nft(&test.verifier, &5, &test.reason("fake"));
    let record = test.registry.get_verification_request(&5);
    assert_eq!(record.status, VerificationStatus::Rejected);
    assert_eq!(record.reason, test.reason("fake"));

    test.registry.request_verification(&artist, &5);
    assert_eq!(test.registry.get_verification_request(&5).status, VerificationStatus::Pending);

    test.registry.verify_nft(&test.verifier, &5, &test.reason("ok"));
    assert_eq!(test.registry.get_verification_request(&5).status, VerificationStatus::Verified);
    assert!(test.registry.is_nft_verified(&5));

    assert_eq!(
        test.registry.get_verification_history(&5),
        vec![
            &test.env,
            VerificationDecision {
                verifier: test.verifier.clone(),
                status: VerificationStatus::Rejected,
                reason: test.reason("fake"),
                timestamp: 0,
            },
            VerificationDecision {
                verifier: test.verifier.clone(),
                status: VerificationStatus::Verified,
                reason: test.reason("ok"),
                timestamp: 0,
            }
        ]
    );
}

#[test]
fn duplicate_requests_are_rejected() {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);

    test.registry.request_verification(&artist, &token_id);
    assert_eq!(
        test.registry.try_request_verification(&artist, &token_id),
        Err(Ok(ErrorCode::AlreadyPending))
    );

    test.registry.verify_nft(&test.verifier, &token_id, &test.reason("ok"));
    assert_eq!(
        test.registry.try_request_verification(&artist, &token_id),
        Err(Ok(ErrorCode::AlreadyVerified))
    );
}

#[test]
fn only_the_token_owner_can_request() {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let stranger = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);

    assert_eq!(
        test.registry.try_request_verification(&stranger, &token_id),
        Err(Ok(ErrorCode::NotTokenOwner))
    );
    assert_eq!(
        test.registry.try_request_verification(&artist, &(token_id + 1)),
        Err(Ok(ErrorCode::UnknownToken))
    );
}

#[test_case(VerificationStatus::Verified ; "verify")]
#[test_case(VerificationStatus::Rejected ; "reject")]
fn settling_without_pending_request_fails(verdict: VerificationStatus) {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);

    assert_eq!(test.try_settle(&test.verifier, token_id, verdict), Err(ErrorCode::NotPending));

    test.registry.request_verification(&artist, &token_id);
    test.registry.verify_nft(&test.verifier, &token_id, &test.reason("ok"));

    assert_eq!(test.try_settle(&test.verifier, token_id, verdict), Err(ErrorCode::NotPending));
    assert!(test.registry.is_nft_verified(&token_id));
    assert_eq!(test.registry.get_verification_history(&token_id).len(), 1);
}

#[test_case(VerificationStatus::Verified ; "verify")]
#[test_case(VerificationStatus::Rejected ; "reject")]
fn non_verifier_cannot_settle(verdict: VerificationStatus) {
    let test = RegistryTest::setup();
    let artist = Address::generate(&test.env);
    let token_id = test.mint(&artist, 1);
    test.registry.request_verification(&artist, &token_id);

    assert_eq!(test.try_settle(&artist, token_id, verdict), Err(ErrorCode::NotVerifier));
    assert_eq!(test.try_settle(&test.owner, token_id, verdict), Err(ErrorCode::NotVerifier));
    assert_eq!(test.registry.get_verification_request(&token_id).status, VerificationStatus::Pending);

    assert_eq!(test.try_settle(&test.verifier, token_id, verdict), Ok(()));
    assert_eq!(test.registry.get_verification_request(&token_id).status, verdict);
}
