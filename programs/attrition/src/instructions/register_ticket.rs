use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{BALANCE_SEED, DISCRIMINATOR_LENGTH, GAME_SEED, TICKET_SEED, VAULT_SEED},
    errors::GameError,
    events::TicketRegistered,
    state::{Balance, Game, Ticket, Vault},
};

/// Contextual accounts required to buy the single ticket an address may hold.
#[derive(Accounts)]
pub struct RegisterTicket<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    /// The vault receiving the ticket payment.
    #[account(
        mut,
        seeds = [VAULT_SEED, game.key().as_ref()],
        bump = game.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The buyer's ticket. One PDA per buyer, so a second purchase finds it
    /// already marked as existing.
    #[account(
        init_if_needed,
        payer = buyer,
        space = DISCRIMINATOR_LENGTH + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, game.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// The buyer's withdrawable balance.
    #[account(
        init_if_needed,
        payer = buyer,
        space = DISCRIMINATOR_LENGTH + Balance::INIT_SPACE,
        seeds = [BALANCE_SEED, game.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub balance: Account<'info, Balance>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Handles the logic for registering a ticket.
///
/// Checks run in order: game active, no ticket yet, payment at least the
/// minimum price, buyer can afford it. Bookkeeping is committed before the
/// payment is moved into the vault.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `amount` - Lamports paid for the ticket.
pub fn register_ticket_handler(ctx: Context<RegisterTicket>, amount: u64) -> Result<()> {
    let game = &mut ctx.accounts.game;
    game.ensure_active()?;

    let buyer = ctx.accounts.buyer.key();
    let clock = Clock::get()?;
    ctx.accounts.ticket.issue(
        buyer,
        amount,
        game.min_ticket_price,
        clock.unix_timestamp,
        ctx.bumps.ticket,
    )?;

    require!(
        ctx.accounts.buyer.lamports() >= amount,
        GameError::InsufficientFunds
    );

    let (admin_share, participant_share) = game.record_registration(amount)?;

    let balance = &mut ctx.accounts.balance;
    balance.bind(buyer, ctx.bumps.balance);
    balance.credit(participant_share)?;

    // Payment Transfer
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TicketRegistered {
        owner: buyer,
        amount,
        admin_share,
        participant_share,
        timestamp: clock.unix_timestamp,
    });

    msg!("Ticket registered for {}: {} lamports", buyer, amount);

    Ok(())
}
