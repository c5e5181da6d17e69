use anchor_lang::prelude::*;

use crate::{constants::MAX_POOLS_PER_ACCOUNT, error::ErrorCode};

/// Ordered, distinct list of the pools one account has joined.
#[account]
#[derive(InitSpace)]
pub struct MemberPools {
    pub owner: Pubkey,
    #[max_len(MAX_POOLS_PER_ACCOUNT)]
    pub pools: Vec<Pubkey>,
    pub bump: u8,
}

impl MemberPools {
    /// Claims a freshly created record for `account`. An existing record must
    /// already belong to it.
    pub fn bind(&mut self, account: Pubkey, bump: u8) -> Result<()> {
        if self.owner == Pubkey::default() {
            self.owner = account;
            self.bump = bump;
        }
        require_keys_eq!(self.owner, account, ErrorCode::InvalidMemberPools);
        Ok(())
    }

    /// Returns `false` when the pool was already recorded.
    pub fn record(&mut self, pool: Pubkey) -> Result<bool> {
        if self.pools.contains(&pool) {
            return Ok(false);
        }
        require!(
            self.pools.len() < MAX_POOLS_PER_ACCOUNT,
            ErrorCode::MemberPoolsFull
        );

        self.pools.push(pool);
        Ok(true)
    }
}
