use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::{POOL_SEED, REFUND_REQUEST_SEED, VAULT_AUTH_SEED},
    error::ErrorCode,
    events::RequestApproved,
    helpers::{approve_and_evaluate, execute_payout},
    state::{Pool, RefundRequest},
};

pub fn handler(ctx: Context<ApproveRequest>, request_id: u64) -> Result<()> {
    let approver = ctx.accounts.member.key();
    let pool_key = ctx.accounts.pool.key();
    let balance = ctx.accounts.vault.amount;

    let payout = approve_and_evaluate(
        &ctx.accounts.pool,
        &pool_key,
        &mut ctx.accounts.request,
        request_id,
        approver,
        balance,
    )?;

    emit!(RequestApproved {
        pool: pool_key,
        request_id,
        approver,
        approver_count: ctx.accounts.request.approver_count(),
    });

    if let Some(payout) = payout {
        execute_payout(
            &mut ctx.accounts.pool,
            &mut ctx.accounts.request,
            &ctx.accounts.vault,
            &ctx.accounts.creator_token_account,
            &ctx.accounts.vault_auth,
            &ctx.accounts.token_program,
            &payout,
            Clock::get()?.unix_timestamp,
        )?;
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct ApproveRequest<'info> {
    pub member: Signer<'info>,
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
        constraint = creator_token_account.owner == request.creator @ ErrorCode::InvalidTokenAccount,
    )]
    pub creator_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
