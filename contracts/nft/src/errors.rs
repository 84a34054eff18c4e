use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    NotOwner = 3,
    NotApproved = 4,
    SelfApproval = 5,
    NotInitialized = 6,
}
