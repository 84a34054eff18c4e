use marketplace::{
    error::{ ErrorCode, MarketplaceResult },
    types::{ VerificationRecord, VerificationStatus },
    validate,
};
use soroban_sdk::{ log, Address, Env, String };

/// Moves a record into `Pending` for a new request.
pub fn open_request(
    env: &Env,
    record: &mut VerificationRecord,
    requester: &Address,
    now: u64
) -> MarketplaceResult {
    if !record.status.accepts_request() {
        let error_code = if record.is_verified() {
            ErrorCode::AlreadyVerified
        } else {
            ErrorCode::AlreadyPending
        };
        log!(
            env,
            "Verification Registry: Request: status {} does not accept a new request",
            record.status as u32
        );
        return Err(error_code);
    }

    record.requester = Some(requester.clone());
    record.status = VerificationStatus::Pending;
    record.reason = String::from_str(env, "");
    record.request_time = now;

    Ok(())
}

/// Settles a pending record with a verifier's verdict.
pub fn settle_request(
    env: &Env,
    record: &mut VerificationRecord,
    verdict: VerificationStatus,
    reason: String
) -> MarketplaceResult {
    validate!(
        env,
        record.status == VerificationStatus::Pending,
        ErrorCode::NotPending,
        "Verification Registry: Settle: no pending request"
    )?;

    record.status = match verdict {
        VerificationStatus::Verified | VerificationStatus::Rejected => verdict,
        VerificationStatus::NotRequested | VerificationStatus::Pending => {
            return Err(ErrorCode::InvalidConfig);
        }
    };
    record.reason = reason;

    Ok(())
}
