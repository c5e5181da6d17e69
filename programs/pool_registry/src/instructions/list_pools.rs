use anchor_lang::prelude::*;

use crate::{constants::REGISTRY_SEED, state::Registry};

pub fn handler(ctx: Context<ListPools>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.registry.pools.clone())
}

#[derive(Accounts)]
pub struct ListPools<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}
