use marketplace::{ error::ErrorCode, types::VerificationRecord };
use soroban_sdk::{ Address, Env, String, Vec };

use crate::storage::VerificationDecision;

pub trait VerificationRegistryTrait {
    fn initialize(env: Env, owner: Address, nft_contract: Address);

    fn transfer_ownership(env: Env, owner: Address, new_owner: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             VERIFIERS
    // ################################################################

    fn add_verifier(env: Env, owner: Address, verifier: Address) -> Result<(), ErrorCode>;

    fn remove_verifier(env: Env, owner: Address, verifier: Address) -> Result<(), ErrorCode>;

    fn verify_nft(
        env: Env,
        verifier: Address,
        token_id: u64,
        reason: String
    ) -> Result<(), ErrorCode>;

    fn reject_nft(
        env: Env,
        verifier: Address,
        token_id: u64,
        reason: String
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             OWNERS
    // ################################################################

    fn request_verification(env: Env, requester: Address, token_id: u64) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn is_nft_verified(env: Env, token_id: u64) -> bool;

    fn get_verification_request(env: Env, token_id: u64) -> VerificationRecord;

    fn get_verification_history(env: Env, token_id: u64) -> Vec<VerificationDecision>;

    fn is_verifier(env: Env, address: Address) -> bool;

    fn query_owner(env: Env) -> Result<Address, ErrorCode>;

    fn query_nft_contract(env: Env) -> Result<Address, ErrorCode>;
}
