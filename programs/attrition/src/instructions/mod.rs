pub mod initialize;
pub mod register_ticket;
pub mod toggle_pause;
pub mod transfer_control;
pub mod update_payout_policy;
pub mod withdraw;

pub use initialize::*;
pub use register_ticket::*;
pub use toggle_pause::*;
pub use transfer_control::*;
pub use update_payout_policy::*;
pub use withdraw::*;
