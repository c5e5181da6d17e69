use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_ENCODED_DATA_LEN, MAX_PARTICIPANTS},
    error::ErrorCode,
    state::RefundRequestDetails,
};

#[account]
#[derive(InitSpace)]
pub struct RefundRequest {
    pub pool: Pubkey,
    pub id: u64,
    pub creator: Pubkey,
    #[max_len(MAX_ENCODED_DATA_LEN)]
    pub encoded_data: String,
    #[max_len(MAX_PARTICIPANTS)]
    pub approvers: Vec<Pubkey>,
    pub authority_confirmed: bool,
    pub paid: bool,
    pub created_at: i64,
    pub settled_at: i64,
    pub bump: u8,
}

impl RefundRequest {
    pub fn open(
        &mut self,
        pool: Pubkey,
        id: u64,
        creator: Pubkey,
        encoded_data: String,
        now: i64,
    ) -> Result<()> {
        require!(
            encoded_data.len() <= MAX_ENCODED_DATA_LEN,
            ErrorCode::EncodedDataTooLong
        );

        self.pool = pool;
        self.id = id;
        self.creator = creator;
        self.encoded_data = encoded_data;
        self.approvers = Vec::new();
        self.authority_confirmed = false;
        self.paid = false;
        self.created_at = now;
        self.settled_at = 0;
        Ok(())
    }

    pub fn approver_count(&self) -> u64 {
        self.approvers.len() as u64
    }

    pub fn has_approved(&self, account: &Pubkey) -> bool {
        self.approvers.contains(account)
    }

    pub fn approve(&mut self, approver: Pubkey) -> Result<()> {
        require!(!self.has_approved(&approver), ErrorCode::AlreadyApproved);
        require!(!self.paid, ErrorCode::AlreadySettled);

        self.approvers.push(approver);
        Ok(())
    }

    pub fn confirm_authority(&mut self, caller: &Pubkey, authority: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, *authority, ErrorCode::Unauthorized);
        require!(!self.authority_confirmed, ErrorCode::AlreadyConfirmed);

        self.authority_confirmed = true;
        Ok(())
    }

    pub fn mark_paid(&mut self, now: i64) -> Result<()> {
        require!(!self.paid, ErrorCode::AlreadySettled);

        self.paid = true;
        self.settled_at = now;
        Ok(())
    }

    pub fn details(&self) -> RefundRequestDetails {
        RefundRequestDetails {
            request_id: self.id,
            encoded_data: self.encoded_data.clone(),
            creator: self.creator,
            approver_count: self.approver_count(),
            authority_confirmed: self.authority_confirmed,
            paid: self.paid,
        }
    }
}
