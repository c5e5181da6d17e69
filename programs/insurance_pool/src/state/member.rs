use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct MemberEntry {
    pub account: Pubkey,
    pub contributed_amount: u64,
    /// Join sequence number within the pool.
    pub joined_at: u64,
    pub telemetry_count: u64,
}
