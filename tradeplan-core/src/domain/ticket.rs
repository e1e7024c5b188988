//! Order ticket — the broker-agnostic bracket derived from a plan.
//!
//! Three legs: a stop-limit entry, a limit profit target, and a trailing
//! stop, linked so the entry arms a one-cancels-other pair of exits. Every
//! kind field is fully determined by trade direction; there is no
//! independent degree of freedom.

use serde::{Deserialize, Serialize};

use super::direction::TradeDirection;

/// Fixed linkage between the three legs. The builder never varies this.
pub const LINKAGE_POLICY: &str =
    "entry triggers one-cancels-other bracket of target and trailing stop";

/// Kind of the entry leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOrderKind {
    BuyStopLimit,
    SellStopLimit,
}

impl EntryOrderKind {
    pub fn for_direction(direction: TradeDirection) -> Self {
        match direction {
            TradeDirection::Long => EntryOrderKind::BuyStopLimit,
            TradeDirection::Short => EntryOrderKind::SellStopLimit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryOrderKind::BuyStopLimit => "buy-stop-limit",
            EntryOrderKind::SellStopLimit => "sell-stop-limit",
        }
    }
}

/// Kind of the profit-target leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitTargetKind {
    SellLimit,
    BuyLimit,
}

impl ProfitTargetKind {
    pub fn for_direction(direction: TradeDirection) -> Self {
        match direction {
            TradeDirection::Long => ProfitTargetKind::SellLimit,
            TradeDirection::Short => ProfitTargetKind::BuyLimit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfitTargetKind::SellLimit => "sell-limit",
            ProfitTargetKind::BuyLimit => "buy-limit",
        }
    }
}

/// Kind of the trailing-stop leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingStopKind {
    SellTrailingStop,
    BuyTrailingStop,
}

impl TrailingStopKind {
    pub fn for_direction(direction: TradeDirection) -> Self {
        match direction {
            TradeDirection::Long => TrailingStopKind::SellTrailingStop,
            TradeDirection::Short => TrailingStopKind::BuyTrailingStop,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrailingStopKind::SellTrailingStop => "sell-trailing-stop",
            TrailingStopKind::BuyTrailingStop => "buy-trailing-stop",
        }
    }
}

/// A three-legged bracket ready to key into a broker ticket.
///
/// Omitted entirely, never zero-filled, when the position size is zero:
/// an unactionable plan produces no ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub entry_order_kind: EntryOrderKind,
    /// Trigger price for the entry stop-limit.
    pub entry_stop_price: f64,
    /// Limit price on the worse side of the trigger, so the entry still
    /// fills once armed.
    pub entry_limit_price: f64,
    /// Whole units; always positive in a present ticket.
    pub quantity: u32,
    pub profit_target_kind: ProfitTargetKind,
    pub profit_target_price: f64,
    pub trailing_stop_kind: TrailingStopKind,
    /// Signed offset: negative for a long (the stop trails below the
    /// running high), positive for a short.
    pub trailing_stop_amount: f64,
    /// Always [`LINKAGE_POLICY`].
    pub linkage_policy: String,
}
