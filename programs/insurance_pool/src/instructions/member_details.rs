use anchor_lang::prelude::*;

use crate::{
    constants::POOL_SEED,
    state::{MemberEntry, Pool},
};

pub fn handler(ctx: Context<GetMemberDetails>, account: Pubkey) -> Result<MemberEntry> {
    ctx.accounts.pool.require_member(&account).copied()
}

#[derive(Accounts)]
pub struct GetMemberDetails<'info> {
    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}
