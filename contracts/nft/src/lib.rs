#![no_std]

mod contract;
pub mod errors;
mod events;
mod nft;
mod storage;

pub use crate::contract::{Nft, NftClient};
