use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::POOL_SEED,
    state::{Pool, PoolDetails},
};

pub fn handler(ctx: Context<GetPoolDetails>) -> Result<PoolDetails> {
    Ok(ctx.accounts.pool.details(ctx.accounts.vault.amount))
}

#[derive(Accounts)]
pub struct GetPoolDetails<'info> {
    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(address = pool.vault)]
    pub vault: Account<'info, TokenAccount>,
}
