use crate::{
    constants::{DISCRIMINATOR_LENGTH, GAME_SEED, MIN_TICKET_PRICE, VAULT_SEED},
    events::GameInitialized,
    state::{Game, OperationalState, PayoutPolicy, Vault},
};
use anchor_lang::prelude::*;

/// Contextual accounts required to set up the game.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The singleton game account. Its fixed seeds make initialization one-shot.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LENGTH + Game::INIT_SPACE,
        seeds = [GAME_SEED],
        bump,
    )]
    pub game: Account<'info, Game>,

    /// The vault that will hold every ticket payment.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LENGTH,
        seeds = [VAULT_SEED, game.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The deployer, who becomes the first administrator.
    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles the logic for initializing the game.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `payout_policy` - How registration fees are divided between admin and players.
pub fn initialize_handler(ctx: Context<Initialize>, payout_policy: PayoutPolicy) -> Result<()> {
    payout_policy.validate()?;

    let game = &mut ctx.accounts.game;
    game.admin = ctx.accounts.admin.key();
    game.state = OperationalState::Active;
    game.payout_policy = payout_policy;
    game.min_ticket_price = MIN_TICKET_PRICE;
    game.admin_reserve = 0;
    game.total_collected = 0;
    game.total_withdrawn = 0;
    game.tickets_issued = 0;
    game.bump = ctx.bumps.game;
    game.vault_bump = ctx.bumps.vault;

    emit!(GameInitialized {
        admin: game.admin,
        min_ticket_price: game.min_ticket_price,
        payout_policy,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Game initialized, admin: {}", game.admin);

    Ok(())
}
