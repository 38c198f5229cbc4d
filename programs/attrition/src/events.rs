use anchor_lang::prelude::*;

use crate::state::PayoutPolicy;

#[event]
pub struct GameInitialized {
    pub admin: Pubkey,
    pub min_ticket_price: u64,
    pub payout_policy: PayoutPolicy,
    pub timestamp: i64,
}

#[event]
pub struct GamePaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct GameUnpaused {
    pub admin: Pubkey,
    pub timestamp: i64,
}

/// Administrative control moved to a new key.
#[event]
pub struct ControlTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    /// Accrued administrator fees handed to `previous_admin`'s balance.
    pub settled_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct TicketRegistered {
    pub owner: Pubkey,
    pub amount: u64,
    pub admin_share: u64,
    pub participant_share: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsWithdrawn {
    pub recipient: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PayoutPolicyUpdated {
    pub admin: Pubkey,
    pub payout_policy: PayoutPolicy,
    pub timestamp: i64,
}
