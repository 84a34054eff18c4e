#![no_std]

mod contract;
mod controller;
mod events;
mod registry;
mod storage;

pub use crate::contract::{VerificationRegistry, VerificationRegistryClient};
pub use crate::storage::VerificationDecision;
