use crate::{
    constants::GAME_SEED,
    events::PayoutPolicyUpdated,
    state::{Game, PayoutPolicy},
};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdatePayoutPolicy<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    pub admin: Signer<'info>,
}

/// Replaces the payout policy for future registrations. Existing balances are untouched.
pub fn update_payout_policy_handler(
    ctx: Context<UpdatePayoutPolicy>,
    payout_policy: PayoutPolicy,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.game.set_payout_policy(&admin, payout_policy)?;

    emit!(PayoutPolicyUpdated {
        admin,
        payout_policy,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Payout policy updated by {}", admin);

    Ok(())
}
