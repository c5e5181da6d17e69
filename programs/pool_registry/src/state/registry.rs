use anchor_lang::prelude::*;

use crate::{constants::MAX_POOLS, error::ErrorCode};

#[account]
#[derive(InitSpace)]
pub struct Registry {
    pub admin: Pubkey,
    pub pool_program: Pubkey,
    pub pool_signer: Pubkey,
    #[max_len(MAX_POOLS)]
    pub pools: Vec<Pubkey>,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}

impl Registry {
    /// Appends `pool` and returns its index, which doubles as the pool id.
    pub fn append_pool(&mut self, pool: Pubkey) -> Result<u64> {
        require!(self.pools.len() < MAX_POOLS, ErrorCode::RegistryFull);
        require!(
            !self.pools.contains(&pool),
            ErrorCode::PoolAlreadyRegistered
        );

        let pool_id = self.pools.len() as u64;
        self.pools.push(pool);
        Ok(pool_id)
    }
}
