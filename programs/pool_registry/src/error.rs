use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Invalid pool signer PDA")]
    InvalidPoolSigner,
    #[msg("Unauthorized pool signer")]
    UnauthorizedPoolSigner,
    #[msg("Registry is full")]
    RegistryFull,
    #[msg("Pool already registered")]
    PoolAlreadyRegistered,
    #[msg("Member pool list is full")]
    MemberPoolsFull,
    #[msg("Invalid member pools account")]
    InvalidMemberPools,
}
