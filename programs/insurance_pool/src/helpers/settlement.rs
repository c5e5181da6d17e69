use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::RefundSettled,
    helpers::{require_creator, transfer_from_vault},
    state::{Pool, RefundRequest},
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Payout {
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Single source of truth for whether `request` can be paid right now.
///
/// Quorum is measured against the pool's current membership, so members who
/// join after the request was opened dilute its approval percentage.
pub fn evaluate_settlement(pool: &Pool, request: &RefundRequest, balance: u64) -> Option<Payout> {
    if request.paid || !request.authority_confirmed {
        return None;
    }
    if !pool.quorum_reached(request.approver_count()) {
        return None;
    }
    if balance < pool.refund_amount {
        return None;
    }

    Some(Payout {
        recipient: request.creator,
        amount: pool.refund_amount,
    })
}

/// Records `approver` on the request, then reports whether the approval
/// completes the settlement conditions.
pub fn approve_and_evaluate(
    pool: &Pool,
    pool_key: &Pubkey,
    request: &mut RefundRequest,
    request_id: u64,
    approver: Pubkey,
    balance: u64,
) -> Result<Option<Payout>> {
    pool.check_request(pool_key, request, request_id)?;
    pool.require_member(&approver)?;
    request.approve(approver)?;

    Ok(evaluate_settlement(pool, request, balance))
}

pub fn confirm_request(
    pool: &Pool,
    pool_key: &Pubkey,
    request: &mut RefundRequest,
    request_id: u64,
    caller: &Pubkey,
) -> Result<()> {
    pool.check_request(pool_key, request, request_id)?;
    request.confirm_authority(caller, &pool.authority)
}

/// Explicit pull path: re-evaluates from current state and fails with
/// `NotEligible` instead of returning `None`.
pub fn claim_payout(
    pool: &Pool,
    pool_key: &Pubkey,
    request: &RefundRequest,
    request_id: u64,
    caller: &Pubkey,
    balance: u64,
) -> Result<Payout> {
    pool.check_request(pool_key, request, request_id)?;
    require_creator(caller, request)?;
    require!(!request.paid, ErrorCode::AlreadySettled);

    evaluate_settlement(pool, request, balance).ok_or_else(|| error!(ErrorCode::NotEligible))
}

/// Applies the bookkeeping side of a payout. The caller moves the tokens in
/// the same instruction.
pub fn apply_settlement(
    pool: &mut Pool,
    request: &mut RefundRequest,
    payout: &Payout,
    now: i64,
) -> Result<()> {
    require_keys_eq!(
        payout.recipient,
        request.creator,
        ErrorCode::InvalidTokenAccount
    );
    request.mark_paid(now)?;
    pool.record_payout(payout.amount)
}

/// Marks the request paid and moves `payout.amount` out of the vault.
#[allow(clippy::too_many_arguments)]
pub fn execute_payout<'info>(
    pool: &mut Account<'info, Pool>,
    request: &mut Account<'info, RefundRequest>,
    vault: &Account<'info, TokenAccount>,
    recipient_token_account: &Account<'info, TokenAccount>,
    vault_auth: &UncheckedAccount<'info>,
    token_program: &Program<'info, Token>,
    payout: &Payout,
    now: i64,
) -> Result<()> {
    let pool_key = pool.key();
    apply_settlement(pool, request, payout, now)?;

    transfer_from_vault(
        token_program,
        vault,
        recipient_token_account,
        vault_auth,
        &pool_key,
        pool.vault_auth_bump,
        payout.amount,
    )?;

    emit!(RefundSettled {
        pool: pool_key,
        request_id: request.id,
        recipient: payout.recipient,
        amount: payout.amount,
    });
    msg!(
        "Refund request {} settled: {} paid to {}",
        request.id,
        payout.amount,
        payout.recipient
    );

    Ok(())
}
