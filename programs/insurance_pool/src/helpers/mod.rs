pub mod access;
pub mod settlement;
pub mod vault;

pub use access::*;
pub use settlement::*;
pub use vault::*;
