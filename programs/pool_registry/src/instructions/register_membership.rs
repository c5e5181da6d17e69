use anchor_lang::prelude::*;

use crate::{
    constants::{MEMBER_POOLS_SEED, REGISTRY_SEED},
    events::MembershipRegistered,
    helpers::require_pool_signer,
    state::{MemberPools, Registry},
};

pub fn handler(ctx: Context<RegisterMembership>, account: Pubkey, pool: Pubkey) -> Result<()> {
    require_pool_signer(&ctx.accounts.pool_signer, &ctx.accounts.registry)?;

    let member_pools = &mut ctx.accounts.member_pools;
    member_pools.bind(account, ctx.bumps.member_pools)?;

    if member_pools.record(pool)? {
        emit!(MembershipRegistered { account, pool });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct RegisterMembership<'info> {
    pub pool_signer: Signer<'info>,
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [MEMBER_POOLS_SEED, account.as_ref()],
        bump,
        space = 8 + MemberPools::INIT_SPACE,
    )]
    pub member_pools: Account<'info, MemberPools>,
    pub system_program: Program<'info, System>,
}
