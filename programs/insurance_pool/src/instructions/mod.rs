pub mod approve_request;
pub mod claim_refund;
pub mod confirm_authority;
pub mod create_pool;
pub mod create_request;
pub mod enter_pool;
pub mod member_details;
pub mod pool_details;
pub mod push_telemetry;
pub mod request_details;

pub use approve_request::*;
pub use claim_refund::*;
pub use confirm_authority::*;
pub use create_pool::*;
pub use create_request::*;
pub use enter_pool::*;
pub use member_details::*;
pub use pool_details::*;
pub use push_telemetry::*;
pub use request_details::*;
