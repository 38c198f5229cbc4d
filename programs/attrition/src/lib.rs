pub mod constants;
pub mod errors;
pub mod events;
mod instructions;
pub mod state;

use anchor_lang::prelude::*;

use instructions::*;
use state::PayoutPolicy;

declare_id!("DYEfYEZQNNubzmyzZWkaHNw3vT2zPXwoZPYRA2rSkbo4");

#[program]
pub mod attrition {
    use super::*;

    /// Creates the game.
    ///
    /// This instruction initializes the singleton `Game` account and the `Vault`
    /// that collects ticket payments. The signer becomes the administrator and
    /// the game starts active.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `payout_policy` - How each ticket fee is divided between the administrator and the player.
    pub fn initialize(ctx: Context<Initialize>, payout_policy: PayoutPolicy) -> Result<()> {
        initialize_handler(ctx, payout_policy)
    }

    /// Halts ticket registration. Administrator only.
    pub fn pause(ctx: Context<TogglePause>) -> Result<()> {
        pause_handler(ctx)
    }

    /// Resumes ticket registration. Administrator only.
    pub fn unpause(ctx: Context<TogglePause>) -> Result<()> {
        unpause_handler(ctx)
    }

    /// Hands administrative control to `new_admin`.
    ///
    /// The previous administrator loses every administrative right in the same
    /// transaction; fees they accrued are moved to their own balance.
    pub fn transfer_control(ctx: Context<TransferControl>, new_admin: Pubkey) -> Result<()> {
        transfer_control_handler(ctx, new_admin)
    }

    /// Buys the caller's ticket.
    ///
    /// Each address may hold one ticket. The payment must be at least the
    /// minimum ticket price and is moved into the vault.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `amount` - The payment in lamports.
    pub fn register_ticket(ctx: Context<RegisterTicket>, amount: u64) -> Result<()> {
        register_ticket_handler(ctx, amount)
    }

    /// Withdraws everything the caller is owed from the vault.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw_handler(ctx)
    }

    /// Replaces the fee division used for later registrations. Administrator only.
    pub fn update_payout_policy(
        ctx: Context<UpdatePayoutPolicy>,
        payout_policy: PayoutPolicy,
    ) -> Result<()> {
        update_payout_policy_handler(ctx, payout_policy)
    }
}
