use anchor_lang::prelude::*;

use crate::{constants::MEMBER_POOLS_SEED, helpers::read_member_pools};

pub fn handler(ctx: Context<MyPools>, account: Pubkey) -> Result<Vec<Pubkey>> {
    read_member_pools(&ctx.accounts.member_pools.to_account_info(), &account)
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct MyPools<'info> {
    /// CHECK: may be uninitialized for accounts that never joined a pool.
    #[account(
        seeds = [MEMBER_POOLS_SEED, account.as_ref()],
        bump,
    )]
    pub member_pools: UncheckedAccount<'info>,
}
