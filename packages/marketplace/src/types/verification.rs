use soroban_sdk::{contracttype, Address, Env, String};

/// Verification lifecycle of a single token.
///
/// `NotRequested --request--> Pending --verify--> Verified`
/// `Pending --reject--> Rejected --request--> Pending`
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VerificationStatus {
    NotRequested = 0,
    Pending = 1,
    Verified = 2,
    Rejected = 3,
}

impl VerificationStatus {
    /// Whether a new verification request may be opened from this status.
    pub fn accepts_request(&self) -> bool {
        match self {
            VerificationStatus::NotRequested | VerificationStatus::Rejected => true,
            VerificationStatus::Pending | VerificationStatus::Verified => false,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationRecord {
    /// Account that opened the latest request, `None` if never requested
    pub requester: Option<Address>,
    pub status: VerificationStatus,
    /// Verifier's note, set when the request is verified or rejected
    pub reason: String,
    pub request_time: u64,
}

impl VerificationRecord {
    pub fn not_requested(env: &Env) -> Self {
        VerificationRecord {
            requester: None,
            status: VerificationStatus::NotRequested,
            reason: String::from_str(env, ""),
            request_time: 0,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_fresh_or_rejected_records_accept_requests() {
        assert!(VerificationStatus::NotRequested.accepts_request());
        assert!(VerificationStatus::Rejected.accepts_request());
        assert!(!VerificationStatus::Pending.accepts_request());
        assert!(!VerificationStatus::Verified.accepts_request());
    }

    #[test]
    fn default_record_is_not_requested() {
        let env = Env::default();
        let record = VerificationRecord::not_requested(&env);

        assert_eq!(record.status, VerificationStatus::NotRequested);
        assert_eq!(record.requester, None);
        assert!(!record.is_verified());
    }
}
