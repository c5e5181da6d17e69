use anchor_lang::prelude::*;

use crate::{
    constants::{LABEL_LEN, MAX_PARTICIPANTS, PERCENT_DENOM},
    error::ErrorCode,
    state::{
        label_to_string, to_fixed_label, MemberEntry, PoolConfigParams, PoolDetails, RefundRequest,
    },
};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub pool_id: u64,
    pub label: [u8; LABEL_LEN],
    pub creator: Pubkey,
    pub authority: Pubkey,
    pub contribution_mint: Pubkey,
    pub vault: Pubkey,
    pub min_contribution: u64,
    pub refund_amount: u64,
    pub max_participants: u16,
    pub min_approval_percent: u8,
    #[max_len(MAX_PARTICIPANTS)]
    pub members: Vec<MemberEntry>,
    pub next_join_seq: u64,
    pub request_count: u64,
    pub telemetry_count: u64,
    pub total_contributed: u64,
    pub total_paid_out: u64,
    pub created_at: i64,
    pub bump: u8,
    pub vault_auth_bump: u8,
}

impl Pool {
    pub fn configure(&mut self, params: &PoolConfigParams) -> Result<()> {
        params.validate()?;
        self.label = to_fixed_label(&params.label)?;
        self.authority = params.authority;
        self.min_contribution = params.min_contribution;
        self.refund_amount = params.refund_amount;
        self.max_participants = params.max_participants;
        self.min_approval_percent = params.min_approval_percent;
        self.members = Vec::with_capacity(params.max_participants as usize);
        self.next_join_seq = 0;
        self.request_count = 0;
        self.telemetry_count = 0;
        self.total_contributed = 0;
        self.total_paid_out = 0;
        Ok(())
    }

    pub fn member_count(&self) -> u16 {
        self.members.len() as u16
    }

    pub fn find_member(&self, account: &Pubkey) -> Option<&MemberEntry> {
        self.members.iter().find(|m| m.account == *account)
    }

    pub fn require_member(&self, account: &Pubkey) -> Result<&MemberEntry> {
        self.find_member(account)
            .ok_or_else(|| error!(ErrorCode::NotAMember))
    }

    /// Admits `account` with `amount` already destined for the vault.
    /// Returns the new member's join sequence number.
    pub fn admit(&mut self, account: Pubkey, amount: u64) -> Result<u64> {
        require!(
            amount >= self.min_contribution,
            ErrorCode::InsufficientContribution
        );
        require!(
            self.find_member(&account).is_none(),
            ErrorCode::AlreadyMember
        );
        require!(
            self.members.len() < self.max_participants as usize,
            ErrorCode::PoolFull
        );
        require_keys_neq!(account, self.authority, ErrorCode::AuthorityCannotJoin);

        let joined_at = self.next_join_seq;
        self.next_join_seq = joined_at
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.total_contributed = self
            .total_contributed
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        self.members.push(MemberEntry {
            account,
            contributed_amount: amount,
            joined_at,
            telemetry_count: 0,
        });

        Ok(joined_at)
    }

    /// Reserves the next telemetry slot for `account`.
    /// Returns `(pool_seq, member_seq)`.
    pub fn next_telemetry_slot(&mut self, account: &Pubkey) -> Result<(u64, u64)> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.account == *account)
            .ok_or_else(|| error!(ErrorCode::NotAMember))?;

        let member_seq = member.telemetry_count;
        member.telemetry_count = member_seq
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        let pool_seq = self.telemetry_count;
        self.telemetry_count = pool_seq
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        Ok((pool_seq, member_seq))
    }

    /// Allocates the id for a new refund request opened by `creator`.
    pub fn open_request(&mut self, creator: &Pubkey) -> Result<u64> {
        self.require_member(creator)?;

        let request_id = self.request_count;
        self.request_count = request_id
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(request_id)
    }

    pub fn check_request(
        &self,
        pool_key: &Pubkey,
        request: &RefundRequest,
        request_id: u64,
    ) -> Result<()> {
        require!(
            request_id < self.request_count,
            ErrorCode::InvalidRequestId
        );
        require_keys_eq!(request.pool, *pool_key, ErrorCode::InvalidRequestId);
        require!(request.id == request_id, ErrorCode::InvalidRequestId);
        Ok(())
    }

    /// Integer percentage of the current membership that `approvals` represents.
    pub fn approval_percent(&self, approvals: u64) -> u64 {
        let members = self.members.len() as u64;
        if members == 0 {
            return 0;
        }
        approvals.saturating_mul(PERCENT_DENOM) / members
    }

    pub fn quorum_reached(&self, approvals: u64) -> bool {
        self.member_count() > 0
            && self.approval_percent(approvals) >= self.min_approval_percent as u64
    }

    pub fn record_payout(&mut self, amount: u64) -> Result<()> {
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn details(&self, balance: u64) -> PoolDetails {
        PoolDetails {
            pool_id: self.pool_id,
            label: label_to_string(&self.label),
            authority: self.authority,
            contribution_mint: self.contribution_mint,
            min_contribution: self.min_contribution,
            refund_amount: self.refund_amount,
            max_participants: self.max_participants,
            min_approval_percent: self.min_approval_percent,
            member_count: self.member_count(),
            request_count: self.request_count,
            telemetry_count: self.telemetry_count,
            balance,
            total_contributed: self.total_contributed,
            total_paid_out: self.total_paid_out,
        }
    }
}
