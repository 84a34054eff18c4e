use soroban_sdk::{ Address, Env, Symbol };

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the Auction Ledger is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[verification_registry: Address, bid_token: Address]`
    pub fn initialize(env: &Env, admin: Address, verification_registry: Address, bid_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (verification_registry, bid_token));
    }

    /// - topics - `["config_updated", admin: Address]`
    /// - data - `[min_duration_minutes: u64, max_duration_minutes: u64]`
    pub fn config_updated(env: &Env, admin: Address, min_duration_minutes: u64, max_duration_minutes: u64) {
        let topics = (Symbol::new(env, "config_updated"), admin);
        env.events().publish(topics, (min_duration_minutes, max_duration_minutes));
    }

    /// Emitted when an asset is escrowed and its auction opens
    ///
    /// - topics - `["auction_created", creator: Address]`
    /// - data - `[auction_id: u64, nft_contract: Address, token_id: u64, start_price: i128, end_time: u64]`
    pub fn auction_created(
        env: &Env,
        creator: Address,
        auction_id: u64,
        nft_contract: Address,
        token_id: u64,
        start_price: i128,
        end_time: u64
    ) {
        let topics = (Symbol::new(env, "auction_created"), creator);
        env.events().publish(topics, (auction_id, nft_contract, token_id, start_price, end_time));
    }

    /// Emitted when a bid becomes the highest bid
    ///
    /// - topics - `["bid_placed", bidder: Address]`
    /// - data - `[auction_id: u64, amount: i128]`
    pub fn bid_placed(env: &Env, bidder: Address, auction_id: u64, amount: i128) {
        let topics = (Symbol::new(env, "bid_placed"), bidder);
        env.events().publish(topics, (auction_id, amount));
    }

    /// Emitted when an outbid bidder gets their escrowed bid back
    ///
    /// - topics - `["bid_refunded", bidder: Address]`
    /// - data - `[auction_id: u64, amount: i128]`
    pub fn bid_refunded(env: &Env, bidder: Address, auction_id: u64, amount: i128) {
        let topics = (Symbol::new(env, "bid_refunded"), bidder);
        env.events().publish(topics, (auction_id, amount));
    }

    /// Emitted when an auction past its end time is settled
    ///
    /// - topics - `["auction_finalized", auction_id: u64]`
    /// - data - `[winner: Option<Address>, amount: i128]`
    pub fn auction_finalized(env: &Env, auction_id: u64, winner: Option<Address>, amount: i128) {
        let topics = (Symbol::new(env, "auction_finalized"), auction_id);
        env.events().publish(topics, (winner, amount));
    }

    /// - topics - `["auction_cancelled", creator: Address]`
    /// - data - `auction_id: u64`
    pub fn auction_cancelled(env: &Env, creator: Address, auction_id: u64) {
        let topics = (Symbol::new(env, "auction_cancelled"), creator);
        env.events().publish(topics, auction_id);
    }
}
