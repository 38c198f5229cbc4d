use crate::{
    constants::GAME_SEED,
    events::{GamePaused, GameUnpaused},
    state::Game,
};
use anchor_lang::prelude::*;

/// Contextual accounts required to halt or resume the game.
#[derive(Accounts)]
pub struct TogglePause<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    /// Must be the current administrator; checked in the handler.
    pub admin: Signer<'info>,
}

/// Halts ticket registration. Withdrawals keep working.
pub fn pause_handler(ctx: Context<TogglePause>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.game.pause(&admin)?;

    emit!(GamePaused {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Game paused by {}", admin);

    Ok(())
}

/// Resumes ticket registration.
pub fn unpause_handler(ctx: Context<TogglePause>) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.game.unpause(&admin)?;

    emit!(GameUnpaused {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Game unpaused by {}", admin);

    Ok(())
}
