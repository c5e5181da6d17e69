use anchor_lang::prelude::*;

#[event]
pub struct PoolRegistered {
    pub pool: Pubkey,
    pub pool_id: u64,
}

#[event]
pub struct MembershipRegistered {
    pub account: Pubkey,
    pub pool: Pubkey,
}
