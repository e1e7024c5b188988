//! Domain types for TradePlan

pub mod direction;
pub mod inputs;
pub mod ticket;

pub use direction::TradeDirection;
pub use inputs::{RiskBudget, TradeInputs};
pub use ticket::{
    EntryOrderKind, OrderTicket, ProfitTargetKind, TrailingStopKind, LINKAGE_POLICY,
};
