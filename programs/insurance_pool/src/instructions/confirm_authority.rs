use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, REFUND_REQUEST_SEED},
    events::AuthorityConfirmed,
    helpers::confirm_request,
    state::{Pool, RefundRequest},
};

pub fn handler(ctx: Context<ConfirmAuthority>, request_id: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    confirm_request(
        &ctx.accounts.pool,
        &pool_key,
        &mut ctx.accounts.request,
        request_id,
        &ctx.accounts.authority.key(),
    )?;

    emit!(AuthorityConfirmed {
        pool: pool_key,
        request_id,
    });
    msg!("Authority confirmed refund request {}", request_id);

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct ConfirmAuthority<'info> {
    pub authority: Signer<'info>,
    #[account(
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
}
