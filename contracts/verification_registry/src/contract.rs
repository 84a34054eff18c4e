use marketplace::{
    error::ErrorCode,
    interfaces::NonFungibleTokenClient,
    types::{ VerificationRecord, VerificationStatus },
    validate,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String, Vec };

use crate::{
    controller,
    events::VerificationEvents,
    registry::VerificationRegistryTrait,
    storage::{
        append_history,
        get_history,
        get_nft_contract,
        get_owner,
        get_request,
        is_initialized,
        is_verifier,
        save_nft_contract,
        save_owner,
        save_request,
        save_verifier,
        VerificationDecision,
    },
};

contractmeta!(
    key = "Description",
    val = "Gatekeeper recording which NFTs have been verified for auction"
);

#[contract]
pub struct VerificationRegistry;

#[contractimpl]
impl VerificationRegistryTrait for VerificationRegistry {
    fn initialize(env: Env, owner: Address, nft_contract: Address) {
        if is_initialized(&env) {
            log!(&env, "Verification Registry: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        save_owner(&env, &owner);
        save_nft_contract(&env, &nft_contract);

        VerificationEvents::initialize(&env, owner, nft_contract);
    }

    fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), ErrorCode> {
        owner.require_auth();
        ensure_owner(&env, &owner)?;

        save_owner(&env, &new_owner);

        VerificationEvents::ownership_transferred(&env, owner, new_owner);
        Ok(())
    }

    fn add_verifier(env: Env, owner: Address, verifier: Address) -> Result<(), ErrorCode> {
        owner.require_auth();
        ensure_owner(&env, &owner)?;

        // adding an existing verifier is a successful no-op
        if save_verifier(&env, &verifier, true) {
            VerificationEvents::verifier_added(&env, verifier);
        }
        Ok(())
    }

    fn remove_verifier(env: Env, owner: Address, verifier: Address) -> Result<(), ErrorCode> {
        owner.require_auth();
        ensure_owner(&env, &owner)?;

        if save_verifier(&env, &verifier, false) {
            VerificationEvents::verifier_removed(&env, verifier);
        }
        Ok(())
    }

    fn verify_nft(
        env: Env,
        verifier: Address,
        token_id: u64,
        reason: String
    ) -> Result<(), ErrorCode> {
        settle(&env, verifier, token_id, VerificationStatus::Verified, reason)
    }

    fn reject_nft(
        env: Env,
        verifier: Address,
        token_id: u64,
        reason: String
    ) -> Result<(), ErrorCode> {
        settle(&env, verifier, token_id, VerificationStatus::Rejected, reason)
    }

    fn request_verification(env: Env, requester: Address, token_id: u64) -> Result<(), ErrorCode> {
        requester.require_auth();

        let nft = NonFungibleTokenClient::new(&env, &get_nft_contract(&env)?);
        validate!(
            &env,
            nft.exists(&token_id),
            ErrorCode::UnknownToken,
            "Verification Registry: Request: token {} does not exist",
            token_id
        )?;
        validate!(
            &env,
            nft.owner_of(&token_id) == requester,
            ErrorCode::NotTokenOwner,
            "Verification Registry: Request: only the token owner can request verification"
        )?;

        let now = env.ledger().timestamp();
        let mut record = get_request(&env, token_id);
        controller::open_request(&env, &mut record, &requester, now)?;
        save_request(&env, token_id, &record);

        VerificationEvents::verification_requested(&env, requester, token_id, now);
        Ok(())
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn is_nft_verified(env: Env, token_id: u64) -> bool {
        get_request(&env, token_id).is_verified()
    }

    fn get_verification_request(env: Env, token_id: u64) -> VerificationRecord {
        get_request(&env, token_id)
    }

    fn get_verification_history(env: Env, token_id: u64) -> Vec<VerificationDecision> {
        get_history(&env, token_id)
    }

    fn is_verifier(env: Env, address: Address) -> bool {
        is_verifier(&env, &address)
    }

    fn query_owner(env: Env) -> Result<Address, ErrorCode> {
        get_owner(&env)
    }

    fn query_nft_contract(env: Env) -> Result<Address, ErrorCode> {
        get_nft_contract(&env)
    }
}

fn ensure_owner(env: &Env, sender: &Address) -> Result<(), ErrorCode> {
    validate!(
        env,
        &get_owner(env)? == sender,
        ErrorCode::NotAuthorized,
        "Verification Registry: You are not authorized!"
    )
}

fn settle(
    env: &Env,
    verifier: Address,
    token_id: u64,
    verdict: VerificationStatus,
    reason: String
) -> Result<(), ErrorCode> {
    verifier.require_auth();
    validate!(
        env,
        is_verifier(env, &verifier),
        ErrorCode::NotVerifier,
        "Verification Registry: Settle: caller is not an authorized verifier"
    )?;

    let mut record = get_request(env, token_id);
    controller::settle_request(env, &mut record, verdict, reason.clone())?;
    save_request(env, token_id, &record);

    append_history(env, token_id, VerificationDecision {
        verifier: verifier.clone(),
        status: verdict,
        reason: reason.clone(),
        timestamp: env.ledger().timestamp(),
    });

    VerificationEvents::decision(env, verifier, token_id, verdict, reason);
    Ok(())
}
