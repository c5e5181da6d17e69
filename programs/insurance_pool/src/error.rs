use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Contribution is below the pool minimum")]
    InsufficientContribution,
    #[msg("Account is already a member of this pool")]
    AlreadyMember,
    #[msg("Pool is full")]
    PoolFull,
    #[msg("Account is not a member of this pool")]
    NotAMember,
    #[msg("Invalid refund request id")]
    InvalidRequestId,
    #[msg("Member already approved this request")]
    AlreadyApproved,
    #[msg("Refund request already settled")]
    AlreadySettled,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Authority already confirmed this request")]
    AlreadyConfirmed,
    #[msg("Refund request is not eligible for settlement")]
    NotEligible,
    #[msg("Pool authority cannot join as a member")]
    AuthorityCannotJoin,
    #[msg("Invalid pool label")]
    InvalidLabel,
    #[msg("Invalid max participants")]
    InvalidMaxParticipants,
    #[msg("Invalid approval percent")]
    InvalidApprovalPercent,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid authority")]
    InvalidAuthority,
    #[msg("Encoded request data is too long")]
    EncodedDataTooLong,
    #[msg("Telemetry payload is too long")]
    TelemetryPayloadTooLong,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Registry assigned an unexpected pool id")]
    PoolIdMismatch,
    #[msg("Math overflow")]
    MathOverflow,
}
