use anchor_lang::prelude::*;

use crate::{
    constants::{BALANCE_SEED, DISCRIMINATOR_LENGTH, GAME_SEED, VAULT_SEED},
    errors::GameError,
    events::FundsWithdrawn,
    state::{Balance, Game, Vault},
};

/// Contextual accounts required to withdraw an address's share of the treasury.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [VAULT_SEED, game.key().as_ref()],
        bump = game.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The caller's balance record. Created empty for callers that never had
    /// one; the resulting `NothingToWithdraw` rolls the creation back.
    #[account(
        init_if_needed,
        payer = recipient,
        space = DISCRIMINATOR_LENGTH + Balance::INIT_SPACE,
        seeds = [BALANCE_SEED, game.key().as_ref(), recipient.key().as_ref()],
        bump,
    )]
    pub balance: Account<'info, Balance>,

    #[account(mut)]
    pub recipient: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles the logic for withdrawing funds.
///
/// Pays out the caller's balance, plus the accrued administrator reserve when
/// the caller is the current administrator. Allowed while the game is halted.
/// Records are zeroed before any lamports move; if the vault cannot cover the
/// payout the instruction fails and every change is discarded.
pub fn withdraw_handler(ctx: Context<Withdraw>) -> Result<()> {
    let recipient = ctx.accounts.recipient.key();

    let balance = &mut ctx.accounts.balance;
    balance.bind(recipient, ctx.bumps.balance);
    let amount = ctx.accounts.game.settle_withdrawal(&recipient, balance)?;

    let vault_info = ctx.accounts.vault.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(vault_info.data_len());
    let vault_remaining = Vault::remaining_after(vault_info.lamports(), rent_floor, amount)?;

    let recipient_info = ctx.accounts.recipient.to_account_info();
    let recipient_total = recipient_info
        .lamports()
        .checked_add(amount)
        .ok_or(GameError::TransferFailed)?;

    **vault_info.try_borrow_mut_lamports()? = vault_remaining;
    **recipient_info.try_borrow_mut_lamports()? = recipient_total;

    emit!(FundsWithdrawn {
        recipient,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Withdrawn {} lamports to {}, {} lamports still owed",
        amount,
        recipient,
        ctx.accounts.game.outstanding()
    );

    Ok(())
}
