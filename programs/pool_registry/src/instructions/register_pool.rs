use anchor_lang::prelude::*;

use crate::{
    constants::REGISTRY_SEED, events::PoolRegistered, helpers::require_pool_signer,
    state::Registry,
};

pub fn handler(ctx: Context<RegisterPool>, pool: Pubkey) -> Result<u64> {
    require_pool_signer(&ctx.accounts.pool_signer, &ctx.accounts.registry)?;

    let registry = &mut ctx.accounts.registry;
    let pool_id = registry.append_pool(pool)?;
    registry.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(PoolRegistered { pool, pool_id });

    Ok(pool_id)
}

#[derive(Accounts)]
pub struct RegisterPool<'info> {
    pub pool_signer: Signer<'info>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}
