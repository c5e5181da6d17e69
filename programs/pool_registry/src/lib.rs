use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("Edr1GEyi4dNco7FqgemRDVmjJTNfmHtk8U68R1MHJTVw");

#[program]
pub mod pool_registry {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    pub fn register_pool(ctx: Context<RegisterPool>, pool: Pubkey) -> Result<u64> {
        instructions::register_pool::handler(ctx, pool)
    }

    pub fn register_membership(
        ctx: Context<RegisterMembership>,
        account: Pubkey,
        pool: Pubkey,
    ) -> Result<()> {
        instructions::register_membership::handler(ctx, account, pool)
    }

    pub fn list_pools(ctx: Context<ListPools>) -> Result<Vec<Pubkey>> {
        instructions::list_pools::handler(ctx)
    }

    pub fn my_pools(ctx: Context<MyPools>, account: Pubkey) -> Result<Vec<Pubkey>> {
        instructions::my_pools::handler(ctx, account)
    }
}
