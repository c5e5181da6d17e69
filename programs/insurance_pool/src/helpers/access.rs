use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::RefundRequest};

pub fn require_creator(caller: &Pubkey, request: &RefundRequest) -> Result<()> {
    require_keys_eq!(*caller, request.creator, ErrorCode::Unauthorized);
    Ok(())
}
