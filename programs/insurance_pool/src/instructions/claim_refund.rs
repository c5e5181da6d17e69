use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{POOL_SEED, REFUND_REQUEST_SEED, VAULT_AUTH_SEED},
    error::ErrorCode,
    helpers::{claim_payout, execute_payout},
    state::{Pool, RefundRequest},
};

pub fn handler(ctx: Context<ClaimRefund>, request_id: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let payout = claim_payout(
        &ctx.accounts.pool,
        &pool_key,
        &ctx.accounts.request,
        request_id,
        &ctx.accounts.creator.key(),
        ctx.accounts.vault.amount,
    )?;

    execute_payout(
        &mut ctx.accounts.pool,
        &mut ctx.accounts.request,
        &ctx.accounts.vault,
        &ctx.accounts.creator_token_account,
        &ctx.accounts.vault_auth,
        &ctx.accounts.token_program,
        &payout,
        Clock::get()?.unix_timestamp,
    )
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct ClaimRefund<'info> {
    pub creator: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(
        mut,
        seeds = [REFUND_REQUEST_SEED, pool.key().as_ref(), &request_id.to_le_bytes()],
        bump = request.bump,
    )]
    pub request: Box<Account<'info, RefundRequest>>,
    /// CHECK: vault auth PDA.
    #[account(seeds = [VAULT_AUTH_SEED, pool.key().as_ref()], bump = pool.vault_auth_bump)]
    pub vault_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.vault)]
    pub vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = creator_token_account.mint == pool.contribution_mint @ ErrorCode::InvalidTokenAccount,
        constraint = creator_token_account.owner == creator.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
