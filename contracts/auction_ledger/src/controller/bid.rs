use marketplace::{ error::MarketplaceResult, math::safe_math::SafeMath };
use soroban_sdk::{ token, Address, Env };

use crate::storage::{ get_escrow_balance, save_auction, save_escrow_balance, Auction, Config };

/// Escrows `amount` from `bidder` and refunds the bid it displaces.
///
/// Both transfers and the record update happen in the same invocation, so a
/// failed transfer leaves neither the new bid nor the refund applied.
pub fn place_bid(
    env: &Env,
    config: &Config,
    auction: &mut Auction,
    bidder: Address,
    amount: i128
) -> MarketplaceResult<Option<(Address, i128)>> {
    let now = env.ledger().timestamp();
    auction.validate_bid(env, &bidder, amount, now)?;

    let ledger = env.current_contract_address();
    let bid_token = token::Client::new(env, &config.bid_token);

    let mut escrow = get_escrow_balance(env).safe_add(amount, env)?;
    bid_token.transfer(&bidder, &ledger, &amount);

    let displaced = auction.place_bid(bidder, amount);
    if let Some((previous_bidder, previous_amount)) = &displaced {
        escrow = escrow.safe_sub(*previous_amount, env)?;
        bid_token.transfer(&ledger, previous_bidder, previous_amount);
    }

    save_escrow_balance(env, escrow);
    save_auction(env, auction);

    Ok(displaced)
}
