use marketplace::{
    constants::SECONDS_PER_MINUTE,
    error::{ ErrorCode, MarketplaceResult },
    interfaces::{ NonFungibleTokenClient, VerificationRegistryClient },
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::storage::{
    get_active_auction,
    next_auction_id,
    save_active_auction,
    save_auction,
    Auction,
    AuctionOutcome,
    Config,
};

/// Validates a new listing, moves the asset into escrow and stores the auction.
pub fn open_auction(
    env: &Env,
    config: &Config,
    creator: Address,
    nft_contract: Address,
    token_id: u64,
    start_price: i128,
    duration_minutes: u64
) -> MarketplaceResult<Auction> {
    validate!(
        env,
        start_price > 0,
        ErrorCode::InvalidPrice,
        "Auction Ledger: Create: start price must be positive"
    )?;
    validate!(
        env,
        config.accepts_duration(duration_minutes),
        ErrorCode::InvalidDuration,
        "Auction Ledger: Create: duration must be between {} and {} minutes",
        config.min_duration_minutes,
        config.max_duration_minutes
    )?;

    let registry = VerificationRegistryClient::new(env, &config.verification_registry);
    let nft = NonFungibleTokenClient::new(env, &nft_contract);
    validate!(
        env,
        registry.query_nft_contract() == nft_contract && nft.exists(&token_id),
        ErrorCode::InvalidAsset,
        "Auction Ledger: Create: token {} is not part of the verified collection",
        token_id
    )?;
    validate!(
        env,
        get_active_auction(env, &nft_contract, token_id).is_none(),
        ErrorCode::AssetAlreadyListed,
        "Auction Ledger: Create: token {} is already on auction",
        token_id
    )?;
    validate!(
        env,
        nft.owner_of(&token_id) == creator,
        ErrorCode::InvalidAsset,
        "Auction Ledger: Create: creator does not own token {}",
        token_id
    )?;
    validate!(
        env,
        registry.is_nft_verified(&token_id),
        ErrorCode::NotVerified,
        "Auction Ledger: Create: token {} is not verified",
        token_id
    )?;

    let ledger = env.current_contract_address();
    let approved =
        nft.get_approved(&token_id) == Some(ledger.clone()) ||
        nft.is_approved_for_all(&creator, &ledger);
    validate!(
        env,
        approved,
        ErrorCode::AssetNotApproved,
        "Auction Ledger: Create: ledger is not approved to escrow token {}",
        token_id
    )?;

    let now = env.ledger().timestamp();
    let end_time = now.safe_add(duration_minutes.safe_mul(SECONDS_PER_MINUTE, env)?, env)?;

    let auction = Auction {
        id: next_auction_id(env)?,
        creator: creator.clone(),
        nft_contract,
        token_id,
        start_price,
        start_time: now,
        end_time,
        highest_bid: 0,
        highest_bidder: None,
        ended: false,
        outcome: AuctionOutcome::Open,
    };

    nft.transfer_from(&ledger, &creator, &ledger, &token_id);

    save_auction(env, &auction);
    save_active_auction(env, &auction);

    Ok(auction)
}
