use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, REFUND_REQUEST_SEED},
    state::{Pool, RefundRequest, RefundRequestDetails},
};

pub fn handler(ctx: Context<GetRequestDetails>, request_id: u64) -> Result<RefundRequestDetails> {
    let pool = &ctx.accounts.pool;
    pool.check_request(&pool.key(), &ctx.accounts.request, request_id)?;
    Ok(ctx.accounts.request.details())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct GetRequestDetails<'info> {
    #[account(
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(
        seeds = [REFUND_REQUEST_SEED, pool.key().as_ref(), &request_id.to_le_bytes()],
        bump = request.bump,
    )]
    pub request: Box<Account<'info, RefundRequest>>,
}
