use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_POOLS, POOL_SIGNER_SEED, REGISTRY_SEED},
    error::ErrorCode,
    state::Registry,
};

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    require!(
        ctx.accounts.pool_program.executable,
        ErrorCode::InvalidProgramAccount
    );

    let (expected_pool_signer, _) =
        Pubkey::find_program_address(&[POOL_SIGNER_SEED], &ctx.accounts.pool_program.key());
    require_keys_eq!(
        expected_pool_signer,
        ctx.accounts.pool_signer.key(),
        ErrorCode::InvalidPoolSigner
    );

    let now = Clock::get()?.unix_timestamp;
    let registry = &mut ctx.accounts.registry;
    registry.admin = ctx.accounts.admin.key();
    registry.pool_program = ctx.accounts.pool_program.key();
    registry.pool_signer = ctx.accounts.pool_signer.key();
    registry.pools = Vec::with_capacity(MAX_POOLS);
    registry.created_at = now;
    registry.last_updated_at = now;
    registry.bump = ctx.bumps.registry;

    msg!("Registry initialized for pool program {}", registry.pool_program);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    /// CHECK: external program id pinned into registry config.
    pub pool_program: UncheckedAccount<'info>,
    /// CHECK: PDA owned by the pool program used as CPI signer.
    pub pool_signer: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [REGISTRY_SEED],
        bump,
        space = 8 + Registry::INIT_SPACE,
    )]
    pub registry: Account<'info, Registry>,
    pub system_program: Program<'info, System>,
}
