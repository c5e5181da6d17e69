use anchor_lang::prelude::*;

use crate::{
    constants::{LABEL_LEN, MAX_PARTICIPANTS, PERCENT_DENOM},
    error::ErrorCode,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolConfigParams {
    pub label: String,
    pub min_contribution: u64,
    pub refund_amount: u64,
    pub max_participants: u16,
    pub min_approval_percent: u8,
    pub authority: Pubkey,
}

impl PoolConfigParams {
    pub fn validate(&self) -> Result<()> {
        to_fixed_label(&self.label)?;
        require!(
            self.max_participants >= 1 && self.max_participants as usize <= MAX_PARTICIPANTS,
            ErrorCode::InvalidMaxParticipants
        );
        require!(
            self.min_approval_percent as u64 <= PERCENT_DENOM,
            ErrorCode::InvalidApprovalPercent
        );
        require!(self.refund_amount > 0, ErrorCode::InvalidAmount);
        require_keys_neq!(
            self.authority,
            Pubkey::default(),
            ErrorCode::InvalidAuthority
        );
        Ok(())
    }
}

pub fn to_fixed_label(label: &str) -> Result<[u8; LABEL_LEN]> {
    let bytes = label.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= LABEL_LEN,
        ErrorCode::InvalidLabel
    );

    let mut out = [0u8; LABEL_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

pub fn label_to_string(label: &[u8; LABEL_LEN]) -> String {
    let end = label.iter().position(|b| *b == 0).unwrap_or(LABEL_LEN);
    String::from_utf8_lossy(&label[..end]).into_owned()
}
