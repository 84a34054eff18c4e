use marketplace::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, MarketplaceResult },
    types::{ VerificationRecord, VerificationStatus },
};
use soroban_sdk::{ contracttype, log, Address, Env, String, Vec };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    NftContract,
    Verifier(Address),
    Request(u64),
    History(u64),
}

// ################################################################
//                             Config
// ################################################################

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn save_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_owner(env: &Env) -> MarketplaceResult<Address> {
    let owner = env.storage().instance().get(&DataKey::Owner).ok_or_else(|| {
        log!(env, "Verification Registry: Owner not set");
        ErrorCode::NotInitialized
    })?;
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    Ok(owner)
}

pub fn save_nft_contract(env: &Env, nft_contract: &Address) {
    env.storage().instance().set(&DataKey::NftContract, nft_contract);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_nft_contract(env: &Env) -> MarketplaceResult<Address> {
    env.storage().instance().get(&DataKey::NftContract).ok_or(ErrorCode::NotInitialized)
}

// ################################################################
//                            Verifiers
// ################################################################

pub fn is_verifier(env: &Env, address: &Address) -> bool {
    let key = DataKey::Verifier(address.clone());
    let member = env.storage().persistent().get(&key).unwrap_or(false);
    if member {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    member
}

/// Returns whether the set changed.
pub fn save_verifier(env: &Env, address: &Address, member: bool) -> bool {
    if is_verifier(env, address) == member {
        return false;
    }

    let key = DataKey::Verifier(address.clone());
    if member {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
    true
}

// ################################################################
//                            Requests
// ################################################################

/// One verifier decision, kept for auditing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationDecision {
    pub verifier: Address,
    pub status: VerificationStatus,
    pub reason: String,
    pub timestamp: u64,
}

pub fn get_request(env: &Env, token_id: u64) -> VerificationRecord {
    let key = DataKey::Request(token_id);
    match env.storage().persistent().get::<_, VerificationRecord>(&key) {
        Some(record) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
            record
        }
        None => VerificationRecord::not_requested(env),
    }
}

pub fn save_request(env: &Env, token_id: u64, record: &VerificationRecord) {
    let key = DataKey::Request(token_id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_history(env: &Env, token_id: u64) -> Vec<VerificationDecision> {
    env.storage()
        .persistent()
        .get(&DataKey::History(token_id))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn append_history(env: &Env, token_id: u64, decision: VerificationDecision) {
    let key = DataKey::History(token_id);
    let mut history = get_history(env, token_id);
    history.push_back(decision);

    env.storage().persistent().set(&key, &history);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
