use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{MemberPools, Registry},
};

pub fn require_pool_signer(pool_signer: &Signer<'_>, registry: &Account<Registry>) -> Result<()> {
    check_pool_signer(&pool_signer.key(), registry)
}

pub fn check_pool_signer(signer: &Pubkey, registry: &Registry) -> Result<()> {
    require_keys_eq!(
        *signer,
        registry.pool_signer,
        ErrorCode::UnauthorizedPoolSigner
    );
    Ok(())
}

/// Reads the pool list stored at `info` for `account`. An account that never
/// joined a pool has no record yet and yields an empty list.
pub fn read_member_pools(info: &AccountInfo<'_>, account: &Pubkey) -> Result<Vec<Pubkey>> {
    if info.data_is_empty() {
        return Ok(Vec::new());
    }
    require_keys_eq!(*info.owner, crate::ID, ErrorCode::InvalidMemberPools);

    let data = info.try_borrow_data()?;
    let member_pools = MemberPools::try_deserialize(&mut &data[..])?;
    require_keys_eq!(member_pools.owner, *account, ErrorCode::InvalidMemberPools);

    Ok(member_pools.pools)
}
