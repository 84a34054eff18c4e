#![no_std]

mod contract;
mod controller;
mod events;
mod ledger;
mod storage;

pub use crate::contract::{AuctionLedger, AuctionLedgerClient};
pub use crate::storage::{Auction, AuctionOutcome, Config};
