use soroban_sdk::{ Address, Env, String };

pub trait NonFungibleTokenTrait {
    fn initialize(env: Env, admin: Address, name: String, symbol: String);

    fn mint(env: Env, to: Address, token_uri: String) -> u64;

    fn approve(env: Env, owner: Address, approved: Option<Address>, token_id: u64);

    fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool);

    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn admin(env: Env) -> Address;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn total_supply(env: Env) -> u64;

    fn exists(env: Env, token_id: u64) -> bool;

    fn owner_of(env: Env, token_id: u64) -> Address;

    fn balance_of(env: Env, owner: Address) -> u64;

    fn token_uri(env: Env, token_id: u64) -> String;

    fn get_approved(env: Env, token_id: u64) -> Option<Address>;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
}
