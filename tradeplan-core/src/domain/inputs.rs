//! Trade inputs — the immutable record one calculation consumes.

use serde::{Deserialize, Serialize};

use super::direction::TradeDirection;

/// How the per-trade risk budget is expressed.
///
/// Exactly one basis is active at a time; "both set" and "neither set"
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RiskBudget {
    /// Risk a percentage of the account on this trade.
    PercentOfAccount { account_size: f64, percent: f64 },
    /// Risk a fixed dollar amount on this trade.
    FixedDollar { amount: f64 },
}

impl RiskBudget {
    /// The dollar amount this budget resolves to.
    pub fn dollar_amount(&self) -> f64 {
        match *self {
            RiskBudget::PercentOfAccount {
                account_size,
                percent,
            } => account_size * percent / 100.0,
            RiskBudget::FixedDollar { amount } => amount,
        }
    }
}

/// Manually observed price levels and risk parameters for one planned trade.
///
/// All fields are plain values; the record is cheap to clone and is never
/// mutated by the engine. Logical consistency is the validator's job, not
/// the constructor's, so a host can build one from raw form fields and get
/// every problem reported in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub direction: TradeDirection,
    /// Intended entry price.
    pub entry_price: f64,
    /// Per-bar volatility measure (e.g., a 14-bar ATR) that scales stop,
    /// target, and trailing distances.
    pub volatility_unit: f64,
    pub risk_budget: RiskBudget,
    /// Stop sits `stop_multiple * volatility_unit` on the adverse side.
    pub stop_multiple: f64,
    /// Target distance as a multiple of risk per unit.
    pub target_r_multiple: f64,
    /// Trailing-stop magnitude as a multiple of the volatility unit.
    pub trailing_multiple: f64,
    /// Worse-price buffer between the entry trigger and its limit.
    pub entry_buffer: f64,
}

impl TradeInputs {
    /// Every numeric field, in input order. Used by the validator's
    /// finiteness check.
    pub(crate) fn numeric_fields(&self) -> [f64; 8] {
        let (budget_a, budget_b) = match self.risk_budget {
            RiskBudget::PercentOfAccount {
                account_size,
                percent,
            } => (account_size, percent),
            RiskBudget::FixedDollar { amount } => (amount, 0.0),
        };
        [
            self.entry_price,
            self.volatility_unit,
            budget_a,
            budget_b,
            self.stop_multiple,
            self.target_r_multiple,
            self.trailing_multiple,
            self.entry_buffer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_budget_resolves() {
        let budget = RiskBudget::PercentOfAccount {
            account_size: 10_000.0,
            percent: 1.0,
        };
        assert_eq!(budget.dollar_amount(), 100.0);
    }

    #[test]
    fn fixed_budget_resolves() {
        let budget = RiskBudget::FixedDollar { amount: 250.0 };
        assert_eq!(budget.dollar_amount(), 250.0);
    }

    #[test]
    fn inputs_serialization_roundtrip() {
        let inputs = TradeInputs {
            direction: TradeDirection::Long,
            entry_price: 50.0,
            volatility_unit: 1.5,
            risk_budget: RiskBudget::PercentOfAccount {
                account_size: 10_000.0,
                percent: 1.0,
            },
            stop_multiple: 2.0,
            target_r_multiple: 2.0,
            trailing_multiple: 1.0,
            entry_buffer: 0.05,
        };
        let json = serde_json::to_string(&inputs).unwrap();
        let deser: TradeInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, deser);
    }
}
