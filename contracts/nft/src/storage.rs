use marketplace::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::MarketplaceResult,
    safe_increment,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env, String };

use crate::errors::NftError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Admin,
    Name,
    Symbol,
    TokenCounter,
    Owner(u64),
    TokenUri(u64),
    Balance(Address),
    Approved(u64),
    Operator(Address, Address),
}

// ################################################################
//                           Collection
// ################################################################

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn save_metadata(env: &Env, admin: &Address, name: &String, symbol: &String) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Name, name);
    env.storage().instance().set(&DataKey::Symbol, symbol);
    env.storage().instance().set(&DataKey::TokenCounter, &0u64);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| {
            log!(env, "NFT: Collection is not initialized");
            panic_with_error!(env, NftError::NotInitialized)
        })
}

pub fn get_name(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Name)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn get_symbol(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Symbol)
        .unwrap_or_else(|| String::from_str(env, ""))
}

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::TokenCounter).unwrap_or(0)
}

/// Allocates the next 1-based token id.
pub fn next_token_id(env: &Env) -> MarketplaceResult<u64> {
    let mut token_id = get_token_counter(env);
    safe_increment!(env, token_id, 1);
    env.storage().instance().set(&DataKey::TokenCounter, &token_id);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    Ok(token_id)
}

// ################################################################
//                             Tokens
// ################################################################

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn read_owner(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Owner(token_id);
    let owner = env.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        bump(env, &key);
    }
    owner
}

pub fn get_owner(env: &Env, token_id: u64) -> Address {
    read_owner(env, token_id).unwrap_or_else(|| {
        log!(env, "NFT: Token {} does not exist", token_id);
        panic_with_error!(env, NftError::TokenNotFound)
    })
}

pub fn write_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    bump(env, &key);
}

pub fn read_token_uri(env: &Env, token_id: u64) -> Option<String> {
    let key = DataKey::TokenUri(token_id);
    let uri = env.storage().persistent().get::<_, String>(&key);
    if uri.is_some() {
        bump(env, &key);
    }
    uri
}

pub fn write_token_uri(env: &Env, token_id: u64, uri: &String) {
    let key = DataKey::TokenUri(token_id);
    env.storage().persistent().set(&key, uri);
    bump(env, &key);
}

pub fn read_balance(env: &Env, owner: &Address) -> u64 {
    let key = DataKey::Balance(owner.clone());
    match env.storage().persistent().get::<_, u64>(&key) {
        Some(balance) => {
            bump(env, &key);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, owner: &Address, balance: u64) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &balance);
    bump(env, &key);
}

pub fn receive_token(env: &Env, owner: &Address) {
    write_balance(env, owner, read_balance(env, owner) + 1);
}

pub fn spend_token(env: &Env, owner: &Address) {
    let balance = read_balance(env, owner);
    write_balance(env, owner, balance.saturating_sub(1));
}

// ################################################################
//                            Approvals
// ################################################################

pub fn read_approved(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn write_approved(env: &Env, token_id: u64, approved: &Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(spender) => {
            env.storage().persistent().set(&key, spender);
            bump(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}

pub fn read_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn write_operator(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        env.storage().persistent().set(&key, &true);
        bump(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}
