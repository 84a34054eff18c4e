pub mod bid;
pub mod listing;
pub mod settlement;
