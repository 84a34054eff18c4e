use marketplace::error::ErrorCode;
use soroban_sdk::{ Address, Env, Vec };

use crate::storage::{ Auction, Config };

pub trait AuctionLedgerTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        verification_registry: Address,
        bid_token: Address,
        min_duration_minutes: u64,
        max_duration_minutes: u64
    ) -> Result<(), ErrorCode>;

    // Allows the admin set during initialization to change some parameters of the
    // configuration. The bid token is fixed for the lifetime of the ledger.
    fn update_config(
        env: Env,
        admin: Address,
        new_admin: Option<Address>,
        verification_registry: Option<Address>,
        min_duration_minutes: Option<u64>,
        max_duration_minutes: Option<u64>
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             SELLERS
    // ################################################################

    fn create_auction(
        env: Env,
        creator: Address,
        nft_contract: Address,
        token_id: u64,
        start_price: i128,
        duration_minutes: u64
    ) -> Result<u64, ErrorCode>;

    fn cancel_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), ErrorCode>;

    // ################################################################
    //                             BIDDERS
    // ################################################################

    fn bid(env: Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), ErrorCode>;

    fn finalize_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn auction_counter(env: Env) -> u64;

    fn get_auction(env: Env, auction_id: u64) -> Result<Auction, ErrorCode>;

    fn query_auctions(env: Env, start_id: u64, limit: u32) -> Vec<Auction>;

    fn query_active_auction(env: Env, nft_contract: Address, token_id: u64) -> Option<u64>;

    fn query_escrow_balance(env: Env) -> i128;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;
}
