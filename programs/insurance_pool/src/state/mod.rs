pub mod member;
pub mod pool;
pub mod pool_config_params;
pub mod refund_request;
pub mod telemetry_entry;
pub mod views;

pub use member::*;
pub use pool::*;
pub use pool_config_params::*;
pub use refund_request::*;
pub use telemetry_entry::*;
pub use views::*;
