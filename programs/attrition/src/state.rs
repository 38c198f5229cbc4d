use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOMINATOR, errors::GameError};

/// Whether participants may currently register.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum OperationalState {
    #[default]
    Active,
    Halted,
}

/// How a registration fee is divided between the administrator and the participant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum PayoutPolicy {
    /// The whole fee accrues to the administrator reserve.
    AdminTakesAll,
    /// The whole fee stays withdrawable by the participant who paid it.
    FullRefund,
    /// `admin_bps` basis points of the fee go to the administrator, the rest to the participant.
    Split { admin_bps: u16 },
}

impl PayoutPolicy {
    pub fn validate(&self) -> Result<()> {
        if let PayoutPolicy::Split { admin_bps } = self {
            require!(
                u64::from(*admin_bps) <= BPS_DENOMINATOR,
                GameError::InvalidPayoutPolicy
            );
        }
        Ok(())
    }

    /// Returns `(admin_share, participant_share)`. The shares always add up to `amount`;
    /// rounding favours the participant.
    pub fn divide(&self, amount: u64) -> Result<(u64, u64)> {
        self.validate()?;
        let admin_share = match *self {
            PayoutPolicy::AdminTakesAll => amount,
            PayoutPolicy::FullRefund => 0,
            PayoutPolicy::Split { admin_bps } => {
                let share =
                    u128::from(amount) * u128::from(admin_bps) / u128::from(BPS_DENOMINATOR);
                u64::try_from(share).map_err(|_| GameError::NumericOverflow)?
            }
        };
        let participant_share = amount
            .checked_sub(admin_share)
            .ok_or(GameError::NumericOverflow)?;
        Ok((admin_share, participant_share))
    }
}

/// Singleton game state: access control, pause gate and treasury bookkeeping.
#[account]
#[derive(InitSpace)]
pub struct Game {
    pub admin: Pubkey,
    pub state: OperationalState,
    pub payout_policy: PayoutPolicy,
    pub min_ticket_price: u64,
    /// Fees accrued to whoever currently holds `admin`.
    pub admin_reserve: u64,
    pub total_collected: u64,
    pub total_withdrawn: u64,
    pub tickets_issued: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Game {
    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *caller, GameError::Unauthorized);
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(
            self.state == OperationalState::Active,
            GameError::ContractHalted
        );
        Ok(())
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_admin(caller)?;
        require!(
            self.state == OperationalState::Active,
            GameError::InvalidState
        );
        self.state = OperationalState::Halted;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_admin(caller)?;
        require!(
            self.state == OperationalState::Halted,
            GameError::InvalidState
        );
        self.state = OperationalState::Active;
        Ok(())
    }

    /// Hands control to `new_admin` and returns the reserve the outgoing
    /// administrator had accrued, which the caller must credit to their balance.
    pub fn transfer_control(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<u64> {
        self.ensure_admin(caller)?;
        require!(
            new_admin != Pubkey::default() && new_admin != self.admin,
            GameError::InvalidNewAdmin
        );
        let settled = std::mem::take(&mut self.admin_reserve);
        self.admin = new_admin;
        Ok(settled)
    }

    pub fn set_payout_policy(&mut self, caller: &Pubkey, policy: PayoutPolicy) -> Result<()> {
        self.ensure_admin(caller)?;
        policy.validate()?;
        self.payout_policy = policy;
        Ok(())
    }

    /// Books a ticket fee into the treasury. Returns `(admin_share, participant_share)`;
    /// the admin share is already added to the reserve.
    pub fn record_registration(&mut self, amount: u64) -> Result<(u64, u64)> {
        let (admin_share, participant_share) = self.payout_policy.divide(amount)?;
        self.admin_reserve = self
            .admin_reserve
            .checked_add(admin_share)
            .ok_or(GameError::NumericOverflow)?;
        self.total_collected = self
            .total_collected
            .checked_add(amount)
            .ok_or(GameError::NumericOverflow)?;
        self.tickets_issued = self
            .tickets_issued
            .checked_add(1)
            .ok_or(GameError::NumericOverflow)?;
        Ok((admin_share, participant_share))
    }

    /// Zeroes everything `caller` may withdraw and returns the amount to pay out.
    /// Must run before any lamports leave the vault.
    pub fn settle_withdrawal(&mut self, caller: &Pubkey, balance: &mut Balance) -> Result<u64> {
        let reserve = if self.admin == *caller {
            self.admin_reserve
        } else {
            0
        };
        let payout = balance
            .withdrawable
            .checked_add(reserve)
            .ok_or(GameError::NumericOverflow)?;
        require!(payout > 0, GameError::NothingToWithdraw);

        let total_withdrawn = self
            .total_withdrawn
            .checked_add(payout)
            .ok_or(GameError::NumericOverflow)?;
        require!(
            total_withdrawn <= self.total_collected,
            GameError::TransferFailed
        );

        balance.withdrawable = 0;
        if reserve > 0 {
            self.admin_reserve = 0;
        }
        self.total_withdrawn = total_withdrawn;
        Ok(payout)
    }

    /// Lamports collected and not yet paid out.
    pub fn outstanding(&self) -> u64 {
        self.total_collected.saturating_sub(self.total_withdrawn)
    }
}

/// Lamport holder for all collected fees. Carries no data of its own.
#[account]
pub struct Vault {}

impl Vault {
    /// Vault lamports left after paying `amount`, refusing to dip below `rent_floor`.
    pub fn remaining_after(lamports: u64, rent_floor: u64, amount: u64) -> Result<u64> {
        let remaining = lamports
            .checked_sub(amount)
            .ok_or(GameError::TransferFailed)?;
        require!(remaining >= rent_floor, GameError::TransferFailed);
        Ok(remaining)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub owner: Pubkey,
    pub paid: u64,
    pub exists: bool,
    pub registered_at: i64,
    pub bump: u8,
}

impl Ticket {
    pub fn issue(
        &mut self,
        owner: Pubkey,
        paid: u64,
        min_price: u64,
        registered_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.exists, GameError::DuplicateTicket);
        require!(paid >= min_price, GameError::InsufficientPayment);

        self.owner = owner;
        self.paid = paid;
        self.exists = true;
        self.registered_at = registered_at;
        self.bump = bump;
        Ok(())
    }
}

/// Withdrawable lamports owed to one address.
#[account]
#[derive(InitSpace)]
pub struct Balance {
    pub owner: Pubkey,
    pub withdrawable: u64,
    pub bump: u8,
}

impl Balance {
    /// Stamps owner and bump on a freshly created record; no-op afterwards.
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.withdrawable = self
            .withdrawable
            .checked_add(amount)
            .ok_or(GameError::NumericOverflow)?;
        Ok(())
    }
}
