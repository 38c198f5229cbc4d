use anchor_lang::constant;

pub const DISCRIMINATOR_LENGTH: usize = 8;

/// Smallest accepted entry fee: 0.10 SOL.
#[constant]
pub const MIN_TICKET_PRICE: u64 = 100_000_000;

#[constant]
pub const BPS_DENOMINATOR: u64 = 10_000;

#[constant]
pub const GAME_SEED: &[u8] = "game".as_bytes();

#[constant]
pub const VAULT_SEED: &[u8] = "vault".as_bytes();

#[constant]
pub const TICKET_SEED: &[u8] = "ticket".as_bytes();

#[constant]
pub const BALANCE_SEED: &[u8] = "balance".as_bytes();
