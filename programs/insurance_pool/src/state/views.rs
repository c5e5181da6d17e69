use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct PoolDetails {
    pub pool_id: u64,
    pub label: String,
    pub authority: Pubkey,
    pub contribution_mint: Pubkey,
    pub min_contribution: u64,
    pub refund_amount: u64,
    pub max_participants: u16,
    pub min_approval_percent: u8,
    pub member_count: u16,
    pub request_count: u64,
    pub telemetry_count: u64,
    pub balance: u64,
    pub total_contributed: u64,
    pub total_paid_out: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct RefundRequestDetails {
    pub request_id: u64,
    pub encoded_data: String,
    pub creator: Pubkey,
    pub approver_count: u64,
    pub authority_confirmed: bool,
    pub paid: bool,
}
