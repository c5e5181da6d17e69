use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_AUTH_SEED;

pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    vault_auth: &UncheckedAccount<'info>,
    pool_key: &Pubkey,
    vault_auth_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[VAULT_AUTH_SEED, pool_key.as_ref(), &[vault_auth_bump]];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: vault_auth.to_account_info(),
    };

    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
    )
}
