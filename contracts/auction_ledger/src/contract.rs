use marketplace::{ constants::MAX_PAGE_SIZE, error::ErrorCode, validate };
use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Vec };

use crate::{
    controller::{ bid, listing, settlement },
    events::AuctionEvents,
    ledger::AuctionLedgerTrait,
    storage::{
        get_active_auction,
        get_auction,
        get_auction_counter,
        get_config,
        get_escrow_balance,
        is_initialized,
        save_config,
        Auction,
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "English auctions for verified NFTs with escrowed bids and refunds"
);

#[contract]
pub struct AuctionLedger;

#[contractimpl]
impl AuctionLedgerTrait for AuctionLedger {
    fn initialize(
        env: Env,
        admin: Address,
        verification_registry: Address,
        bid_token: Address,
        min_duration_minutes: u64,
        max_duration_minutes: u64
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Auction Ledger: Initialize: initializing contract twice is not allowed");
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        let config = Config {
            admin: admin.clone(),
            verification_registry: verification_registry.clone(),
            bid_token: bid_token.clone(),
            min_duration_minutes,
            max_duration_minutes,
        };
        config.validate(&env)?;
        save_config(&env, &config);

        AuctionEvents::initialize(&env, admin, verification_registry, bid_token);
        Ok(())
    }

    fn update_config(
        env: Env,
        admin: Address,
        new_admin: Option<Address>,
        verification_registry: Option<Address>,
        min_duration_minutes: Option<u64>,
        max_duration_minutes: Option<u64>
    ) -> Result<(), ErrorCode> {
        admin.require_auth();

        let mut config = get_config(&env)?;
        validate!(
            &env,
            config.admin == admin,
            ErrorCode::NotAuthorized,
            "Auction Ledger: You are not authorized!"
        )?;

        if let Some(new_admin) = new_admin {
            config.admin = new_admin;
        }
        if let Some(verification_registry) = verification_registry {
            config.verification_registry = verification_registry;
        }
        if let Some(min_duration_minutes) = min_duration_minutes {
            config.min_duration_minutes = min_duration_minutes;
        }
        if let Some(max_duration_minutes) = max_duration_minutes {
            config.max_duration_minutes = max_duration_minutes;
        }
        config.validate(&env)?;

        save_config(&env, &config);

        AuctionEvents::config_updated(
            &env,
            config.admin,
            config.min_duration_minutes,
            config.max_duration_minutes
        );
        Ok(())
    }

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
    ) -> Result<u64, ErrorCode> {
        creator.require_auth();

        let config = get_config(&env)?;
        let auction = listing::open_auction(
            &env,
            &config,
            creator,
            nft_contract,
            token_id,
            start_price,
            duration_minutes
        )?;

        AuctionEvents::auction_created(
            &env,
            auction.creator,
            auction.id,
            auction.nft_contract,
            auction.token_id,
            auction.start_price,
            auction.end_time
        );
        Ok(auction.id)
    }

    fn cancel_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), ErrorCode> {
        caller.require_auth();

        let mut auction = get_auction(&env, auction_id)?;
        settlement::cancel(&env, &mut auction, &caller)?;

        AuctionEvents::auction_cancelled(&env, auction.creator, auction_id);
        Ok(())
    }

    // ################################################################
    //                             BIDDERS
    // ################################################################

    fn bid(env: Env, bidder: Address, auction_id: u64, amount: i128) -> Result<(), ErrorCode> {
        bidder.require_auth();

        let config = get_config(&env)?;
        let mut auction = get_auction(&env, auction_id)?;
        let displaced = bid::place_bid(&env, &config, &mut auction, bidder.clone(), amount)?;

        if let Some((previous_bidder, previous_amount)) = displaced {
            AuctionEvents::bid_refunded(&env, previous_bidder, auction_id, previous_amount);
        }
        AuctionEvents::bid_placed(&env, bidder, auction_id, amount);
        Ok(())
    }

    fn finalize_auction(env: Env, caller: Address, auction_id: u64) -> Result<(), ErrorCode> {
        // anyone may settle an expired auction
        caller.require_auth();

        let config = get_config(&env)?;
        let mut auction = get_auction(&env, auction_id)?;
        settlement::finalize(&env, &config, &mut auction)?;

        AuctionEvents::auction_finalized(
            &env,
            auction_id,
            auction.highest_bidder,
            auction.highest_bid
        );
        Ok(())
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn auction_counter(env: Env) -> u64 {
        get_auction_counter(&env)
    }

    fn get_auction(env: Env, auction_id: u64) -> Result<Auction, ErrorCode> {
        get_auction(&env, auction_id)
    }

    fn query_auctions(env: Env, start_id: u64, limit: u32) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        let counter = get_auction_counter(&env);
        let mut id = start_id.max(1);

        while id <= counter && auctions.len() < limit.min(MAX_PAGE_SIZE) {
            if let Ok(auction) = get_auction(&env, id) {
                auctions.push_back(auction);
            }
            id += 1;
        }

        auctions
    }

    fn query_active_auction(env: Env, nft_contract: Address, token_id: u64) -> Option<u64> {
        get_active_auction(&env, &nft_contract, token_id)
    }

    fn query_escrow_balance(env: Env) -> i128 {
        get_escrow_balance(&env)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        get_config(&env)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        Ok(get_config(&env)?.admin)
    }
}
