use crate::{
    constants::{BALANCE_SEED, DISCRIMINATOR_LENGTH, GAME_SEED},
    events::ControlTransferred,
    state::{Balance, Game},
};
use anchor_lang::prelude::*;

/// Contextual accounts required to hand administrative control to another key.
#[derive(Accounts)]
pub struct TransferControl<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    /// Balance record of the outgoing administrator. Receives the fees they
    /// accrued while in control.
    #[account(
        init_if_needed,
        payer = admin,
        space = DISCRIMINATOR_LENGTH + Balance::INIT_SPACE,
        seeds = [BALANCE_SEED, game.key().as_ref(), admin.key().as_ref()],
        bump,
    )]
    pub admin_balance: Account<'info, Balance>,

    /// The current administrator.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles the logic for transferring administrative control.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `new_admin` - The key that receives control. Takes effect immediately.
pub fn transfer_control_handler(ctx: Context<TransferControl>, new_admin: Pubkey) -> Result<()> {
    let previous_admin = ctx.accounts.admin.key();
    let settled_reserve = ctx.accounts.game.transfer_control(&previous_admin, new_admin)?;

    let admin_balance = &mut ctx.accounts.admin_balance;
    admin_balance.bind(previous_admin, ctx.bumps.admin_balance);
    admin_balance.credit(settled_reserve)?;

    emit!(ControlTransferred {
        previous_admin,
        new_admin,
        settled_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Control transferred from {} to {}", previous_admin, new_admin);

    Ok(())
}
