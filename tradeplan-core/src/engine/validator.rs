//! Checklist validation — every problem reported in one pass.
//!
//! Errors block the calculation; warnings are advisory. The two lists
//! accumulate independently with no short-circuiting, so a user fixing a
//! form sees the whole checklist result at once rather than one problem
//! per attempt.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{RiskBudget, TradeInputs};

/// A blocking input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("all inputs must be finite numbers")]
    NonFiniteInput,
    #[error("account size must be greater than zero")]
    AccountSizeNotPositive,
    #[error("risk percent must be greater than zero")]
    RiskPercentNotPositive,
    #[error("risk amount must be greater than zero")]
    RiskAmountNotPositive,
    #[error("entry price must be greater than zero")]
    EntryPriceNotPositive,
    #[error("volatility unit must be greater than zero")]
    VolatilityUnitNotPositive,
    #[error("stop multiple cannot be negative")]
    StopMultipleNegative,
    #[error("target R multiple must be greater than zero")]
    TargetRMultipleNotPositive,
    #[error("trailing multiple cannot be negative")]
    TrailingMultipleNegative,
    #[error("entry buffer cannot be negative")]
    EntryBufferNegative,
}

/// An advisory that does not block the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarning {
    /// Percent-basis risk above 5% of the account.
    RiskExceedsFivePercent,
    /// Percent-basis risk above 2% of the account.
    RiskExceedsTwoPercent,
    /// Target R multiple below 1: the reward is smaller than the risk.
    RewardLessThanRisk,
    /// Target R multiple in [1, 2): a thin edge.
    ConsiderBetterSetups,
    /// Risk per unit exceeds the whole budget; the size floors to zero.
    PositionRoundsToZero,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::RiskExceedsFivePercent => write!(f, "risk exceeds 5%"),
            ValidationWarning::RiskExceedsTwoPercent => write!(f, "risk exceeds 2%"),
            ValidationWarning::RewardLessThanRisk => write!(f, "reward less than risk"),
            ValidationWarning::ConsiderBetterSetups => write!(f, "consider better setups"),
            ValidationWarning::PositionRoundsToZero => {
                write!(f, "position size rounds to zero, risk per unit too large")
            }
        }
    }
}

/// Outcome of the input checklist.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run the checklist over one input record.
///
/// Total: never panics, never returns early. Non-finite numerics are
/// caught here so downstream arithmetic only ever sees finite values.
pub fn validate(inputs: &TradeInputs) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if inputs.numeric_fields().iter().any(|v| !v.is_finite()) {
        errors.push(ValidationError::NonFiniteInput);
    }

    match inputs.risk_budget {
        RiskBudget::PercentOfAccount {
            account_size,
            percent,
        } => {
            if account_size <= 0.0 {
                errors.push(ValidationError::AccountSizeNotPositive);
            }
            if percent <= 0.0 {
                errors.push(ValidationError::RiskPercentNotPositive);
            } else if percent > 5.0 {
                warnings.push(ValidationWarning::RiskExceedsFivePercent);
            } else if percent > 2.0 {
                warnings.push(ValidationWarning::RiskExceedsTwoPercent);
            }
        }
        RiskBudget::FixedDollar { amount } => {
            if amount <= 0.0 {
                errors.push(ValidationError::RiskAmountNotPositive);
            }
        }
    }

    if inputs.entry_price <= 0.0 {
        errors.push(ValidationError::EntryPriceNotPositive);
    }
    if inputs.volatility_unit <= 0.0 {
        errors.push(ValidationError::VolatilityUnitNotPositive);
    }

    // Zero stop multiple is permitted: it degenerates into a zero risk
    // distance and surfaces later as a zero-position warning.
    if inputs.stop_multiple < 0.0 {
        errors.push(ValidationError::StopMultipleNegative);
    }

    if inputs.target_r_multiple <= 0.0 {
        errors.push(ValidationError::TargetRMultipleNotPositive);
    } else if inputs.target_r_multiple < 1.0 {
        warnings.push(ValidationWarning::RewardLessThanRisk);
    } else if inputs.target_r_multiple < 2.0 {
        warnings.push(ValidationWarning::ConsiderBetterSetups);
    }

    if inputs.trailing_multiple < 0.0 {
        errors.push(ValidationError::TrailingMultipleNegative);
    }
    if inputs.entry_buffer < 0.0 {
        errors.push(ValidationError::EntryBufferNegative);
    }

    ValidationResult { errors, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TradeDirection;

    fn base_inputs() -> TradeInputs {
        TradeInputs {
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
        }
    }

    #[test]
    fn clean_inputs_pass() {
        let result = validate(&base_inputs());
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn zero_risk_percent_is_error() {
        let mut inputs = base_inputs();
        inputs.risk_budget = RiskBudget::PercentOfAccount {
            account_size: 10_000.0,
            percent: 0.0,
        };
        let result = validate(&inputs);
        assert!(!result.is_valid());
        assert!(result.errors.contains(&ValidationError::RiskPercentNotPositive));
        assert_eq!(
            ValidationError::RiskPercentNotPositive.to_string(),
            "risk percent must be greater than zero"
        );
    }

    #[test]
    fn risk_above_two_percent_warns() {
        let mut inputs = base_inputs();
        inputs.risk_budget = RiskBudget::PercentOfAccount {
            account_size: 10_000.0,
            percent: 3.0,
        };
        let result = validate(&inputs);
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::RiskExceedsTwoPercent]
        );
    }

    #[test]
    fn risk_above_five_percent_warns_once() {
        let mut inputs = base_inputs();
        inputs.risk_budget = RiskBudget::PercentOfAccount {
            account_size: 10_000.0,
            percent: 7.5,
        };
        let result = validate(&inputs);
        assert!(result.is_valid());
        // Only the stronger warning fires.
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::RiskExceedsFivePercent]
        );
    }

    #[test]
    fn exactly_two_percent_is_quiet() {
        let mut inputs = base_inputs();
        inputs.risk_budget = RiskBudget::PercentOfAccount {
            account_size: 10_000.0,
            percent: 2.0,
        };
        assert!(validate(&inputs).warnings.is_empty());
    }

    #[test]
    fn negative_fixed_amount_is_error() {
        let mut inputs = base_inputs();
        inputs.risk_budget = RiskBudget::FixedDollar { amount: -5.0 };
        let result = validate(&inputs);
        assert!(result.errors.contains(&ValidationError::RiskAmountNotPositive));
    }

    #[test]
    fn non_positive_prices_are_errors() {
        let mut inputs = base_inputs();
        inputs.entry_price = 0.0;
        inputs.volatility_unit = -1.0;
        let result = validate(&inputs);
        assert!(result.errors.contains(&ValidationError::EntryPriceNotPositive));
        assert!(result
            .errors
            .contains(&ValidationError::VolatilityUnitNotPositive));
    }

    #[test]
    fn zero_stop_multiple_is_allowed() {
        let mut inputs = base_inputs();
        inputs.stop_multiple = 0.0;
        assert!(validate(&inputs).is_valid());
    }

    #[test]
    fn negative_stop_multiple_is_error() {
        let mut inputs = base_inputs();
        inputs.stop_multiple = -0.5;
        let result = validate(&inputs);
        assert!(result.errors.contains(&ValidationError::StopMultipleNegative));
    }

    #[test]
    fn sub_one_target_warns_reward_less_than_risk() {
        let mut inputs = base_inputs();
        inputs.target_r_multiple = 0.5;
        let result = validate(&inputs);
        assert!(result.is_valid());
        assert_eq!(result.warnings, vec![ValidationWarning::RewardLessThanRisk]);
    }

    #[test]
    fn thin_target_warns_consider_better_setups() {
        let mut inputs = base_inputs();
        inputs.target_r_multiple = 1.5;
        let result = validate(&inputs);
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec![ValidationWarning::ConsiderBetterSetups]
        );
    }

    #[test]
    fn negative_buffer_and_trailing_are_errors() {
        let mut inputs = base_inputs();
        inputs.trailing_multiple = -1.0;
        inputs.entry_buffer = -0.01;
        let result = validate(&inputs);
        assert!(result
            .errors
            .contains(&ValidationError::TrailingMultipleNegative));
        assert!(result.errors.contains(&ValidationError::EntryBufferNegative));
    }

    #[test]
    fn nan_input_is_error_not_panic() {
        let mut inputs = base_inputs();
        inputs.entry_price = f64::NAN;
        let result = validate(&inputs);
        assert!(!result.is_valid());
        assert!(result.errors.contains(&ValidationError::NonFiniteInput));
    }

    #[test]
    fn errors_accumulate_without_short_circuit() {
        let mut inputs = base_inputs();
        inputs.entry_price = -1.0;
        inputs.volatility_unit = 0.0;
        inputs.target_r_multiple = 0.0;
        inputs.risk_budget = RiskBudget::FixedDollar { amount: 0.0 };
        let result = validate(&inputs);
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn errors_and_warnings_are_independent() {
        let mut inputs = base_inputs();
        inputs.entry_price = 0.0; // error
        inputs.target_r_multiple = 0.5; // warning
        let result = validate(&inputs);
        assert!(!result.is_valid());
        assert_eq!(result.warnings, vec![ValidationWarning::RewardLessThanRisk]);
    }
}
