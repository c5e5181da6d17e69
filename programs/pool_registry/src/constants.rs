pub const REGISTRY_SEED: &[u8] = b"registry";
pub const MEMBER_POOLS_SEED: &[u8] = b"member-pools";
/// Seed of the insurance pool program's PDA that signs registry writes.
pub const POOL_SIGNER_SEED: &[u8] = b"registry-signer";

pub const MAX_POOLS: usize = 128;
pub const MAX_POOLS_PER_ACCOUNT: usize = 32;
