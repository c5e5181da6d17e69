use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use pool_registry::{program::PoolRegistry, POOL_SIGNER_SEED, REGISTRY_SEED};

use crate::{constants::POOL_SEED, error::ErrorCode, events::MemberJoined, state::Pool};

pub fn handler(ctx: Context<EnterPool>, amount: u64) -> Result<()> {
    let member = ctx.accounts.member.key();
    let pool_key = ctx.accounts.pool.key();

    let joined_at = ctx.accounts.pool.admit(member, amount)?;

    token::transfer(ctx.accounts.contribution_ctx(), amount)?;

    // Registry failure reverts the admission together with the transfer.
    let signer_seed_group: &[&[u8]] = &[POOL_SIGNER_SEED, &[ctx.bumps.registry_signer]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = pool_registry::cpi::accounts::RegisterMembership {
        pool_signer: ctx.accounts.registry_signer.to_account_info(),
        registry: ctx.accounts.registry.to_account_info(),
        payer: ctx.accounts.member.to_account_info(),
        member_pools: ctx.accounts.member_pools.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    pool_registry::cpi::register_membership(
        CpiContext::new_with_signer(
            ctx.accounts.registry_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        member,
        pool_key,
    )?;

    emit!(MemberJoined {
        pool: pool_key,
        member,
        amount,
        joined_at,
    });
    msg!(
        "Member {} joined pool {} ({}/{})",
        member,
        ctx.accounts.pool.pool_id,
        ctx.accounts.pool.member_count(),
        ctx.accounts.pool.max_participants
    );

    Ok(())
}

#[derive(Accounts)]
pub struct EnterPool<'info> {
    #[account(mut)]
    pub member: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(
        mut,
        constraint = member_token_account.mint == pool.contribution_mint @ ErrorCode::InvalidTokenAccount,
        constraint = member_token_account.owner == member.key() @ ErrorCode::Unauthorized,
    )]
    pub member_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.vault)]
    pub vault: Account<'info, TokenAccount>,
    pub registry_program: Program<'info, PoolRegistry>,
    #[account(
        seeds = [REGISTRY_SEED],
        seeds::program = registry_program.key(),
        bump = registry.bump,
    )]
    pub registry: Box<Account<'info, pool_registry::Registry>>,
    /// CHECK: PDA signer for registry writes.
    #[account(seeds = [POOL_SIGNER_SEED], bump)]
    pub registry_signer: UncheckedAccount<'info>,
    /// CHECK: created and validated by the registry program.
    #[account(mut)]
    pub member_pools: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> EnterPool<'info> {
    fn contribution_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.member_token_account.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.member.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
