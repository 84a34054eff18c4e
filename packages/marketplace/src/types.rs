pub mod verification;

pub use verification::{VerificationRecord, VerificationStatus};
