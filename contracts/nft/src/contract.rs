use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String };

use crate::{
    errors::NftError,
    events::NftEvents,
    nft::NonFungibleTokenTrait,
    storage::{
        get_admin,
        get_name,
        get_owner,
        get_symbol,
        get_token_counter,
        is_initialized,
        read_approved,
        read_balance,
        read_operator,
        read_owner,
        read_token_uri,
        next_token_id,
        receive_token,
        save_metadata,
        spend_token,
        write_approved,
        write_operator,
        write_owner,
        write_token_uri,
    },
};

contractmeta!(key = "Description", val = "Minimal non-fungible token collection for auction listings");

#[contract]
pub struct Nft;

#[contractimpl]
impl NonFungibleTokenTrait for Nft {
    fn initialize(env: Env, admin: Address, name: String, symbol: String) {
        if is_initialized(&env) {
            log!(&env, "NFT: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, NftError::AlreadyInitialized);
        }

        save_metadata(&env, &admin, &name, &symbol);

        NftEvents::initialize(&env, admin, name, symbol);
    }

    fn mint(env: Env, to: Address, token_uri: String) -> u64 {
        to.require_auth();

        let token_id = next_token_id(&env).unwrap_or_else(|error_code| {
            panic_with_error!(&env, error_code)
        });

        write_owner(&env, token_id, &to);
        write_token_uri(&env, token_id, &token_uri);
        receive_token(&env, &to);

        NftEvents::mint(&env, to, token_id, token_uri);

        token_id
    }

    fn approve(env: Env, owner: Address, approved: Option<Address>, token_id: u64) {
        owner.require_auth();

        if get_owner(&env, token_id) != owner {
            log!(&env, "NFT: Approve: only the owner can approve token {}", token_id);
            panic_with_error!(&env, NftError::NotOwner);
        }
        if approved.as_ref() == Some(&owner) {
            panic_with_error!(&env, NftError::SelfApproval);
        }

        write_approved(&env, token_id, &approved);

        NftEvents::approve(&env, owner, token_id, approved);
    }

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();

        if operator == owner {
            panic_with_error!(&env, NftError::SelfApproval);
        }

        write_operator(&env, &owner, &operator, approved);

        NftEvents::approval_for_all(&env, owner, operator, approved);
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        move_token(&env, &from, &to, token_id);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64) {
        spender.require_auth();

        let owner = get_owner(&env, token_id);
        let allowed =
            spender == owner ||
            read_approved(&env, token_id).as_ref() == Some(&spender) ||
            read_operator(&env, &owner, &spender);

        if !allowed {
            log!(&env, "NFT: Transfer from: spender is not approved for token {}", token_id);
            panic_with_error!(&env, NftError::NotApproved);
        }

        move_token(&env, &from, &to, token_id);
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn admin(env: Env) -> Address {
        get_admin(&env)
    }

    fn name(env: Env) -> String {
        get_name(&env)
    }

    fn symbol(env: Env) -> String {
        get_symbol(&env)
    }

    fn total_supply(env: Env) -> u64 {
        get_token_counter(&env)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        read_owner(&env, token_id).is_some()
    }

    fn owner_of(env: Env, token_id: u64) -> Address {
        get_owner(&env, token_id)
    }

    fn balance_of(env: Env, owner: Address) -> u64 {
        read_balance(&env, &owner)
    }

    fn token_uri(env: Env, token_id: u64) -> String {
        read_token_uri(&env, token_id).unwrap_or_else(|| {
            panic_with_error!(&env, NftError::TokenNotFound)
        })
    }

    fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        read_approved(&env, token_id)
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        read_operator(&env, &owner, &operator)
    }
}

fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) {
    if &get_owner(env, token_id) != from {
        log!(env, "NFT: Transfer: sender does not own token {}", token_id);
        panic_with_error!(env, NftError::NotOwner);
    }

    write_owner(env, token_id, to);
    write_approved(env, token_id, &None);
    spend_token(env, from);
    receive_token(env, to);

    NftEvents::transfer(env, from.clone(), to.clone(), token_id);
}
