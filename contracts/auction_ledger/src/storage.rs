use marketplace::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        MIN_AUCTION_DURATION_MINUTES,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, MarketplaceResult },
    safe_increment,
    validate,
};
use soroban_sdk::{ contracttype, log, Address, Env };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    AuctionCounter,
    EscrowBalance,
    Auction(u64),
    /// Open auction holding an asset, keyed by (nft_contract, token_id)
    ActiveAuction(Address, u64),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Registry gating which tokens may be listed
    pub verification_registry: Address,
    /// Token bids are escrowed and paid out in
    pub bid_token: Address,
    pub min_duration_minutes: u64,
    pub max_duration_minutes: u64,
}

impl Config {
    pub fn validate(&self, env: &Env) -> MarketplaceResult {
        validate!(
            env,
            self.min_duration_minutes >= MIN_AUCTION_DURATION_MINUTES &&
                self.max_duration_minutes >= self.min_duration_minutes,
            ErrorCode::InvalidConfig,
            "Auction Ledger: Config: duration bounds {} to {} minutes are invalid",
            self.min_duration_minutes,
            self.max_duration_minutes
        )
    }

    pub fn accepts_duration(&self, duration_minutes: u64) -> bool {
        (self.min_duration_minutes..=self.max_duration_minutes).contains(&duration_minutes)
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> MarketplaceResult<Config> {
    let config = env.storage().instance().get(&DataKey::Config).ok_or_else(|| {
        log!(env, "Auction Ledger: Config not set");
        ErrorCode::NotInitialized
    })?;
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    Ok(config)
}

// ################################################################
//                             Auction
// ################################################################

/// How an auction left the open state.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionOutcome {
    Open = 0,
    /// Finalized with a winner; asset went to the highest bidder
    Sold = 1,
    /// Finalized without bids; asset returned to the creator
    Unsold = 2,
    /// Withdrawn by the creator before any bid
    Cancelled = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub creator: Address,
    pub nft_contract: Address,
    pub token_id: u64,
    pub start_price: i128,
    pub start_time: u64,
    pub end_time: u64,
    /// 0 until the first accepted bid
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub ended: bool,
    pub outcome: AuctionOutcome,
}

impl Auction {
    pub fn is_open(&self, now: u64) -> bool {
        !self.ended && now < self.end_time
    }

    pub fn has_bids(&self) -> bool {
        self.highest_bidder.is_some()
    }

    pub fn validate_bid(
        &self,
        env: &Env,
        bidder: &Address,
        amount: i128,
        now: u64
    ) -> MarketplaceResult {
        validate!(
            env,
            self.is_open(now),
            ErrorCode::AuctionEnded,
            "Auction Ledger: Bid: auction {} is no longer open",
            self.id
        )?;
        validate!(
            env,
            bidder != &self.creator,
            ErrorCode::CreatorCannotBid,
            "Auction Ledger: Bid: creator cannot bid on auction {}",
            self.id
        )?;

        let minimum_met = if self.has_bids() {
            amount > self.highest_bid
        } else {
            amount >= self.start_price
        };
        validate!(
            env,
            minimum_met,
            ErrorCode::BidTooLow,
            "Auction Ledger: Bid: {} does not beat start price {} or highest bid {}",
            amount,
            self.start_price,
            self.highest_bid
        )
    }

    /// Records a new highest bid, returning the displaced bid that must be refunded.
    #[must_use]
    pub fn place_bid(&mut self, bidder: Address, amount: i128) -> Option<(Address, i128)> {
        let previous = self.highest_bidder.replace(bidder).map(|account| (account, self.highest_bid));
        self.highest_bid = amount;
        previous
    }

    pub fn validate_finalize(&self, env: &Env, now: u64) -> MarketplaceResult {
        validate!(
            env,
            !self.ended,
            ErrorCode::AlreadyFinalized,
            "Auction Ledger: Finalize: auction {} is already settled",
            self.id
        )?;
        validate!(
            env,
            now >= self.end_time,
            ErrorCode::AuctionStillOpen,
            "Auction Ledger: Finalize: auction {} ends at {}",
            self.id,
            self.end_time
        )
    }

    pub fn validate_cancel(&self, env: &Env, caller: &Address) -> MarketplaceResult {
        validate!(
            env,
            !self.ended,
            ErrorCode::AuctionEnded,
            "Auction Ledger: Cancel: auction {} has already ended",
            self.id
        )?;
        validate!(
            env,
            caller == &self.creator,
            ErrorCode::NotCreator,
            "Auction Ledger: Cancel: only the creator can cancel auction {}",
            self.id
        )?;
        validate!(
            env,
            !self.has_bids(),
            ErrorCode::AlreadyHasBids,
            "Auction Ledger: Cancel: auction {} already has bids",
            self.id
        )
    }

    pub fn close(&mut self, outcome: AuctionOutcome) {
        self.ended = true;
        self.outcome = outcome;
    }
}

pub fn get_auction(env: &Env, auction_id: u64) -> MarketplaceResult<Auction> {
    let key = DataKey::Auction(auction_id);
    let auction = match env.storage().persistent().get::<_, Auction>(&key) {
        Some(auction) => auction,
        None => {
            log!(env, "Auction Ledger: auction {} does not exist", auction_id);
            return Err(ErrorCode::AuctionNotFound);
        }
    };
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(auction)
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::AuctionCounter).unwrap_or(0)
}

/// Allocates the next 1-based auction id.
pub fn next_auction_id(env: &Env) -> MarketplaceResult<u64> {
    let mut id = get_auction_counter(env);
    safe_increment!(env, id, 1);
    env.storage().instance().set(&DataKey::AuctionCounter, &id);
    Ok(id)
}

pub fn get_active_auction(env: &Env, nft_contract: &Address, token_id: u64) -> Option<u64> {
    let key = DataKey::ActiveAuction(nft_contract.clone(), token_id);
    let auction_id = env.storage().persistent().get::<_, u64>(&key);
    if auction_id.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    auction_id
}

pub fn save_active_auction(env: &Env, auction: &Auction) {
    let key = DataKey::ActiveAuction(auction.nft_contract.clone(), auction.token_id);
    env.storage().persistent().set(&key, &auction.id);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn remove_active_auction(env: &Env, auction: &Auction) {
    env.storage()
        .persistent()
        .remove(&DataKey::ActiveAuction(auction.nft_contract.clone(), auction.token_id));
}

// ################################################################
//                             Escrow
// ################################################################

pub fn get_escrow_balance(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::EscrowBalance).unwrap_or(0)
}

pub fn save_escrow_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::EscrowBalance, &balance);
}
