pub mod initialize_registry;
pub mod list_pools;
pub mod my_pools;
pub mod register_membership;
pub mod register_pool;

pub use initialize_registry::*;
pub use list_pools::*;
pub use my_pools::*;
pub use register_membership::*;
pub use register_pool::*;
