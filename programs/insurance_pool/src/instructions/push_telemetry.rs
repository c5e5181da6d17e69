use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, TELEMETRY_SEED},
    events::TelemetryPushed,
    state::{Pool, TelemetryEntry},
};

pub fn handler(ctx: Context<PushTelemetry>, data_id: u64, payload: String) -> Result<()> {
    let member = ctx.accounts.member.key();
    let pool_key = ctx.accounts.pool.key();
    let (_, seq) = ctx.accounts.pool.next_telemetry_slot(&member)?;

    let entry = &mut ctx.accounts.telemetry_entry;
    entry.record(
        pool_key,
        member,
        seq,
        data_id,
        payload,
        Clock::get()?.unix_timestamp,
    )?;
    entry.bump = ctx.bumps.telemetry_entry;

    emit!(TelemetryPushed {
        pool: pool_key,
        member,
        seq,
        data_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PushTelemetry<'info> {
    #[account(mut)]
    pub member: Signer<'info>,
    #[account(
        mut,
        seeds = [POOL_SEED, &pool.pool_id.to_le_bytes()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
    #[account(
        init,
        payer = member,
        seeds = [TELEMETRY_SEED, pool.key().as_ref(), &pool.telemetry_count.to_le_bytes()],
        bump,
        space = 8 + TelemetryEntry::INIT_SPACE,
    )]
    pub telemetry_entry: Account<'info, TelemetryEntry>,
    pub system_program: Program<'info, System>,
}
