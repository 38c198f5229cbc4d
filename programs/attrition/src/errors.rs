use anchor_lang::prelude::*;
#[error_code]
pub enum GameError {
    #[msg("Caller is not the game administrator")]
    Unauthorized,
    #[msg("Operation is not allowed in the current operational state")]
    InvalidState,
    #[msg("Game is halted")]
    ContractHalted,

    #[msg("Payment is below the minimum ticket price")]
    InsufficientPayment,
    #[msg("Address already holds a ticket")]
    DuplicateTicket,
    #[msg("Insufficient funds to buy ticket")]
    InsufficientFunds,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,
    #[msg("Vault cannot cover the payout")]
    TransferFailed,

    #[msg("New administrator must be a non-default key different from the current one")]
    InvalidNewAdmin,
    #[msg("Administrator share cannot exceed 10000 basis points")]
    InvalidPayoutPolicy,

    #[msg("Numeric overflow")]
    NumericOverflow,
}
