use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use pool_registry::{program::PoolRegistry, POOL_SIGNER_SEED, REGISTRY_SEED};

use crate::{
    constants::{POOL_SEED, VAULT_AUTH_SEED, VAULT_SEED},
    error::ErrorCode,
    events::PoolCreated,
    state::{Pool, PoolConfigParams},
};

pub fn handler(ctx: Context<CreatePool>, params: PoolConfigParams) -> Result<u64> {
    let expected_pool_id = ctx.accounts.registry.pools.len() as u64;

    let pool = &mut ctx.accounts.pool;
    pool.configure(&params)?;
    pool.pool_id = expected_pool_id;
    pool.creator = ctx.accounts.creator.key();
    pool.contribution_mint = ctx.accounts.contribution_mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.created_at = Clock::get()?.unix_timestamp;
    pool.bump = ctx.bumps.pool;
    pool.vault_auth_bump = ctx.bumps.vault_auth;

    let signer_seed_group: &[&[u8]] = &[POOL_SIGNER_SEED, &[ctx.bumps.registry_signer]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = pool_registry::cpi::accounts::RegisterPool {
        pool_signer: ctx.accounts.registry_signer.to_account_info(),
        registry: ctx.accounts.registry.to_account_info(),
    };
    let pool_id = pool_registry::cpi::register_pool(
        CpiContext::new_with_signer(
            ctx.accounts.registry_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        ctx.accounts.pool.key(),
    )?
    .get();
    require!(pool_id == expected_pool_id, ErrorCode::PoolIdMismatch);

    let pool = &ctx.accounts.pool;
    emit!(PoolCreated {
        pool: pool.key(),
        pool_id,
        authority: pool.authority,
        min_contribution: pool.min_contribution,
        refund_amount: pool.refund_amount,
        max_participants: pool.max_participants,
        min_approval_percent: pool.min_approval_percent,
    });
    msg!("Pool {} created with id {}", params.label, pool_id);

    Ok(pool_id)
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    pub contribution_mint: Account<'info, Mint>,
    pub registry_program: Program<'info, PoolRegistry>,
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        seeds::program = registry_program.key(),
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, pool_registry::Registry>>,
    /// CHECK: PDA signer for registry writes.
    #[account(seeds = [POOL_SIGNER_SEED], bump)]
    pub registry_signer: UncheckedAccount<'info>,
    #[account(
        init,
        payer = creator,
        seeds = [POOL_SEED, &(registry.pools.len() as u64).to_le_bytes()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Box<Account<'info, Pool>>,
    /// CHECK: PDA authority for vault transfer signing.
    #[account(seeds = [VAULT_AUTH_SEED, pool.key().as_ref()], bump)]
    pub vault_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = creator,
        seeds = [VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = contribution_mint,
        token::authority = vault_auth,
    )]
    pub vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
