pub mod member_pools;
pub mod registry;

pub use member_pools::*;
pub use registry::*;
