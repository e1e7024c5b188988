//! Risk-based position sizing — whole units, floored against the budget.
//!
//! Classic fixed-fractional risk management: the budget is a dollar amount
//! (percent of account or fixed), the risk per unit is the entry-to-stop
//! distance, and the size is the floor of their ratio. Floor, never round:
//! the realized risk must not exceed the budget.

use serde::{Deserialize, Serialize};

use crate::domain::RiskBudget;

/// Position size and the dollar figures that follow from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSizing {
    /// The dollar budget the size was floored against.
    pub max_dollar_risk: f64,
    /// Whole units. Zero when the risk distance is zero (risk undefined,
    /// skip the trade) or when one unit already risks more than the budget.
    pub position_size: u32,
    /// `position_size * entry_price`.
    pub total_cost: f64,
    /// Realized risk at the floored size; at most `max_dollar_risk`.
    pub dollar_risk: f64,
}

/// Size a position against the risk budget.
pub fn size_position(budget: RiskBudget, entry_price: f64, risk_per_unit: f64) -> PositionSizing {
    let max_dollar_risk = budget.dollar_amount();

    // Zero risk distance means risk is undefined: skip the trade rather
    // than divide by zero.
    let position_size = if risk_per_unit > 0.0 {
        (max_dollar_risk / risk_per_unit).floor() as u32
    } else {
        0
    };

    PositionSizing {
        max_dollar_risk,
        position_size,
        total_cost: position_size as f64 * entry_price,
        dollar_risk: position_size as f64 * risk_per_unit,
    }
}
