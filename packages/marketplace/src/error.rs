use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,

    // Verification Registry
    AlreadyPending = 10,
    AlreadyVerified = 11,
    NotPending = 12,
    NotVerifier = 13,
    NotTokenOwner = 14,
    UnknownToken = 15,

    // Auction Ledger: creation
    InvalidAsset = 20,
    NotVerified = 21,
    InvalidDuration = 22,
    InvalidPrice = 23,
    AssetNotApproved = 24,
    AssetAlreadyListed = 25,

    // Auction Ledger: bidding and settlement
    AuctionNotFound = 30,
    AuctionEnded = 31,
    CreatorCannotBid = 32,
    BidTooLow = 33,
    AuctionStillOpen = 34,
    AlreadyFinalized = 35,
    AlreadyHasBids = 36,
    NotCreator = 37,

    MathError = 40,
    InvalidConfig = 41,
}

/// The class of failure a client renders for an [`ErrorCode`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The request was malformed regardless of ledger state.
    Validation,
    /// The request was well formed but the current state rejects it.
    Precondition,
    /// The caller is not allowed to perform the action.
    Authorization,
    /// The referenced auction or token does not exist.
    NotFound,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::InvalidAsset
            | ErrorCode::InvalidDuration
            | ErrorCode::InvalidPrice
            | ErrorCode::MathError
            | ErrorCode::InvalidConfig => ErrorKind::Validation,

            ErrorCode::AlreadyInitialized
            | ErrorCode::NotInitialized
            | ErrorCode::AlreadyPending
            | ErrorCode::AlreadyVerified
            | ErrorCode::NotPending
            | ErrorCode::NotVerified
            | ErrorCode::AssetNotApproved
            | ErrorCode::AssetAlreadyListed
            | ErrorCode::AuctionEnded
            | ErrorCode::CreatorCannotBid
            | ErrorCode::BidTooLow
            | ErrorCode::AuctionStillOpen
            | ErrorCode::AlreadyFinalized
            | ErrorCode::AlreadyHasBids => ErrorKind::Precondition,

            ErrorCode::NotAuthorized
            | ErrorCode::NotVerifier
            | ErrorCode::NotTokenOwner
            | ErrorCode::NotCreator => ErrorKind::Authorization,

            ErrorCode::UnknownToken | ErrorCode::AuctionNotFound => ErrorKind::NotFound,
        }
    }

    /// A second finalization is reported as an error, but the auction is settled.
    pub fn is_already_done(&self) -> bool {
        matches!(self, ErrorCode::AlreadyFinalized)
    }
}

pub type MarketplaceResult<T = ()> = core::result::Result<T, ErrorCode>;
