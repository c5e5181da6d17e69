pub const POOL_SEED: &[u8] = b"pool";
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTH_SEED: &[u8] = b"vault-auth";
pub const REFUND_REQUEST_SEED: &[u8] = b"refund-request";
pub const TELEMETRY_SEED: &[u8] = b"telemetry";

pub const PERCENT_DENOM: u64 = 100;
pub const LABEL_LEN: usize = 32;
pub const MAX_PARTICIPANTS: usize = 32;
pub const MAX_ENCODED_DATA_LEN: usize = 256;
pub const MAX_TELEMETRY_PAYLOAD_LEN: usize = 200;
