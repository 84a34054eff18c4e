use marketplace::{
    error::MarketplaceResult,
    interfaces::NonFungibleTokenClient,
    math::safe_math::SafeMath,
};
use soroban_sdk::{ log, token, Address, Env };

use crate::storage::{
    get_escrow_balance,
    remove_active_auction,
    save_auction,
    save_escrow_balance,
    Auction,
    AuctionOutcome,
    Config,
};

/// Settles an auction past its end time.
///
/// With a winner the asset goes to the highest bidder and the escrowed bid to
/// the creator; without bids the asset goes back to the creator.
pub fn finalize(env: &Env, config: &Config, auction: &mut Auction) -> MarketplaceResult {
    auction.validate_finalize(env, env.ledger().timestamp())?;

    let ledger = env.current_contract_address();
    let nft = NonFungibleTokenClient::new(env, &auction.nft_contract);

    match auction.highest_bidder.clone() {
        Some(winner) => {
            let escrow = get_escrow_balance(env).safe_sub(auction.highest_bid, env)?;

            nft.transfer(&ledger, &winner, &auction.token_id);
            token::Client
                ::new(env, &config.bid_token)
                .transfer(&ledger, &auction.creator, &auction.highest_bid);

            save_escrow_balance(env, escrow);
            auction.close(AuctionOutcome::Sold);
        }
        None => {
            log!(env, "Auction Ledger: Finalize: auction {} closed without bids", auction.id);
            nft.transfer(&ledger, &auction.creator, &auction.token_id);
            auction.close(AuctionOutcome::Unsold);
        }
    }

    save_auction(env, auction);
    remove_active_auction(env, auction);

    Ok(())
}

/// Withdraws an auction that has not received any bid.
pub fn cancel(env: &Env, auction: &mut Auction, caller: &Address) -> MarketplaceResult {
    auction.validate_cancel(env, caller)?;

    NonFungibleTokenClient::new(env, &auction.nft_contract).transfer(
        &env.current_contract_address(),
        &auction.creator,
        &auction.token_id
    );
    auction.close(AuctionOutcome::Cancelled);

    save_auction(env, auction);
    remove_active_auction(env, auction);

    Ok(())
}
