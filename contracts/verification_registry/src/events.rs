use marketplace::types::VerificationStatus;
use soroban_sdk::{ Address, Env, String, Symbol };

pub struct VerificationEvents {}

impl VerificationEvents {
    /// Emitted when the registry is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `nft_contract: Address`
    pub fn initialize(env: &Env, owner: Address, nft_contract: Address) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(topics, nft_contract);
    }

    /// Emitted when a token owner asks for verification
    ///
    /// - topics - `["verification_requested", requester: Address]`
    /// - data - `[token_id: u64, request_time: u64]`
    pub fn verification_requested(env: &Env, requester: Address, token_id: u64, request_time: u64) {
        let topics = (Symbol::new(env, "verification_requested"), requester);
        env.events().publish(topics, (token_id, request_time));
    }

    /// Emitted when a verifier settles a pending request
    ///
    /// - topics - `["nft_verified" | "nft_rejected", verifier: Address]`
    /// - data - `[token_id: u64, reason: String]`
    pub fn decision(
        env: &Env,
        verifier: Address,
        token_id: u64,
        status: VerificationStatus,
        reason: String
    ) {
        let name = match status {
            VerificationStatus::Verified => "nft_verified",
            VerificationStatus::Rejected => "nft_rejected",
            VerificationStatus::NotRequested | VerificationStatus::Pending => {
                return;
            }
        };
        let topics = (Symbol::new(env, name), verifier);
        env.events().publish(topics, (token_id, reason));
    }

    /// - topics - `["verifier_added", verifier: Address]`
    /// - data - ()
    pub fn verifier_added(env: &Env, verifier: Address) {
        let topics = (Symbol::new(env, "verifier_added"), verifier);
        env.events().publish(topics, ());
    }

    /// - topics - `["verifier_removed", verifier: Address]`
    /// - data - ()
    pub fn verifier_removed(env: &Env, verifier: Address) {
        let topics = (Symbol::new(env, "verifier_removed"), verifier);
        env.events().publish(topics, ());
    }

    /// - topics - `["ownership_transferred", previous_owner: Address]`
    /// - data - `new_owner: Address`
    pub fn ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
        let topics = (Symbol::new(env, "ownership_transferred"), previous_owner);
        env.events().publish(topics, new_owner);
    }
}
