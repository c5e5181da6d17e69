use anchor_lang::prelude::*;

use crate::{constants::MAX_TELEMETRY_PAYLOAD_LEN, error::ErrorCode};

#[account]
#[derive(InitSpace)]
pub struct TelemetryEntry {
    pub pool: Pubkey,
    pub owner: Pubkey,
    /// Position in the owner's own log.
    pub seq: u64,
    pub data_id: u64,
    #[max_len(MAX_TELEMETRY_PAYLOAD_LEN)]
    pub payload: String,
    pub recorded_at: i64,
    pub bump: u8,
}

impl TelemetryEntry {
    pub fn record(
        &mut self,
        pool: Pubkey,
        owner: Pubkey,
        seq: u64,
        data_id: u64,
        payload: String,
        now: i64,
    ) -> Result<()> {
        require!(
            payload.len() <= MAX_TELEMETRY_PAYLOAD_LEN,
            ErrorCode::TelemetryPayloadTooLong
        );

        self.pool = pool;
        self.owner = owner;
        self.seq = seq;
        self.data_id = data_id;
        self.payload = payload;
        self.recorded_at = now;
        Ok(())
    }
}
