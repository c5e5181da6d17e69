use anchor_lang::prelude::*;

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub pool_id: u64,
    pub authority: Pubkey,
    pub min_contribution: u64,
    pub refund_amount: u64,
    pub max_participants: u16,
    pub min_approval_percent: u8,
}

#[event]
pub struct MemberJoined {
    pub pool: Pubkey,
    pub member: Pubkey,
    pub amount: u64,
    pub joined_at: u64,
}

#[event]
pub struct TelemetryPushed {
    pub pool: Pubkey,
    pub member: Pubkey,
    pub seq: u64,
    pub data_id: u64,
}

#[event]
pub struct RefundRequested {
    pub pool: Pubkey,
    pub request_id: u64,
    pub creator: Pubkey,
}

#[event]
pub struct RequestApproved {
    pub pool: Pubkey,
    pub request_id: u64,
    pub approver: Pubkey,
    pub approver_count: u64,
}

#[event]
pub struct AuthorityConfirmed {
    pub pool: Pubkey,
    pub request_id: u64,
}

#[event]
pub struct RefundSettled {
    pub pool: Pubkey,
    pub request_id: u64,
    pub recipient: Pubkey,
    pub amount: u64,
}
