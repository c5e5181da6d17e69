use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, REFUND_REQUEST_SEED},
    events::RefundRequested,
    state::{Pool, RefundRequest},
};

pub fn handler(ctx: Context<CreateRequest>, encoded_data: String) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let pool_key = ctx.accounts.pool.key();
    let request_id = ctx.accounts.pool.open_request(&creator)?;

    let request = &mut ctx.accounts.request;
    request.open(
        pool_key,
        request_id,
        creator,
        encoded_data,
        Clock::get()?.unix_timestamp,
    )?;
    request.bump = ctx.bumps.request;

    emit!(RefundRequested {
        pool: pool_key,
        request_id,
        creator,
    });
    msg!("Refund request {} opened by {}", request_id, creator);

    Ok(request_id)
}

#[derive(Accounts)]
pub struct CreateRequest<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(
        init,
        payer = creator,
        seeds = [REFUND_REQUEST_SEED, pool.key().as_ref(), &pool.request_count.to_le_bytes()],
        bump,
        space = 8 + RefundRequest::INIT_SPACE,
    )]
    pub request: Account<'info, RefundRequest>,
    pub system_program: Program<'info, System>,
}
