use soroban_sdk::{Address, Env, String, Symbol};

pub struct NftEvents {}

impl NftEvents {
    /// Emitted when the collection is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[name: String, symbol: String]`
    pub fn initialize(env: &Env, admin: Address, name: String, symbol: String) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (name, symbol));
    }

    /// Emitted when a token is minted
    ///
    /// - topics - `["mint", to: Address]`
    /// - data - `[token_id: u64, token_uri: String]`
    pub fn mint(env: &Env, to: Address, token_id: u64, token_uri: String) {
        let topics = (Symbol::new(env, "mint"), to);
        env.events().publish(topics, (token_id, token_uri));
    }

    /// Emitted when a token changes hands
    ///
    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `token_id: u64`
    pub fn transfer(env: &Env, from: Address, to: Address, token_id: u64) {
        let topics = (Symbol::new(env, "transfer"), from, to);
        env.events().publish(topics, token_id);
    }

    /// Emitted when the single-token approval is set or cleared
    ///
    /// - topics - `["approve", owner: Address]`
    /// - data - `[token_id: u64, approved: Option<Address>]`
    pub fn approve(env: &Env, owner: Address, token_id: u64, approved: Option<Address>) {
        let topics = (Symbol::new(env, "approve"), owner);
        env.events().publish(topics, (token_id, approved));
    }

    /// Emitted when an operator is granted or denied control of all tokens of an owner
    ///
    /// - topics - `["approval_for_all", owner: Address, operator: Address]`
    /// - data - `approved: bool`
    pub fn approval_for_all(env: &Env, owner: Address, operator: Address, approved: bool) {
        let topics = (Symbol::new(env, "approval_for_all"), owner, operator);
        env.events().publish(topics, approved);
    }
}
