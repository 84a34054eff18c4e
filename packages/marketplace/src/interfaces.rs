use soroban_sdk::{contractclient, Address, Env};

/// The subset of the NFT collection the marketplace contracts call into.
#[contractclient(name = "NonFungibleTokenClient")]
pub trait NonFungibleTokenInterface {
    fn exists(env: Env, token_id: u64) -> bool;

    fn owner_of(env: Env, token_id: u64) -> Address;

    fn get_approved(env: Env, token_id: u64) -> Option<Address>;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

/// The subset of the Verification Registry the Auction Ledger calls into.
#[contractclient(name = "VerificationRegistryClient")]
pub trait VerificationRegistryInterface {
    fn is_nft_verified(env: Env, token_id: u64) -> bool;

    fn query_nft_contract(env: Env) -> Address;
}
