//! The planning pipeline — validate, derive, size, ticket, aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::{OrderTicket, TradeDirection, TradeInputs};
use crate::engine::prices::derive_prices;
use crate::engine::sizing::size_position;
use crate::engine::ticket_builder::build_order_ticket;
use crate::engine::validator::{validate, ValidationError, ValidationResult, ValidationWarning};

/// Full result of one planning request.
///
/// Constructed fresh per request and never mutated afterward. When the
/// inputs are invalid every derived numeric is zero, `r_multiple` is
/// absent, and there is no ticket; the errors list describes why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeCalculation {
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub stop_price: f64,
    pub target_price: f64,
    pub stop_distance: f64,
    pub risk_per_unit: f64,
    pub target_distance: f64,
    pub trailing_amount: f64,
    pub max_dollar_risk: f64,
    pub position_size: u32,
    pub total_cost: f64,
    pub dollar_risk: f64,
    /// Reward-to-risk ratio. Absent, not zero, when no risk distance
    /// exists to divide by.
    pub r_multiple: Option<f64>,
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    /// Present iff `position_size > 0`.
    pub order_ticket: Option<OrderTicket>,
}

/// Run the full pipeline for one input record.
///
/// Total and synchronous; the single entry point hosts consume. Calling
/// twice with identical inputs yields identical results.
pub fn calculate_trade(inputs: &TradeInputs) -> TradeCalculation {
    let report = validate(inputs);
    if !report.is_valid() {
        return rejected(inputs, report);
    }

    let prices = derive_prices(inputs);
    let sizing = size_position(inputs.risk_budget, inputs.entry_price, prices.risk_per_unit);

    let mut warnings = report.warnings;
    if sizing.position_size == 0 {
        warnings.push(ValidationWarning::PositionRoundsToZero);
    }

    let order_ticket = build_order_ticket(
        inputs.direction,
        &prices,
        sizing.position_size,
        inputs.entry_buffer,
    );

    let r_multiple = if prices.risk_per_unit > 0.0 {
        Some(prices.target_distance / prices.risk_per_unit)
    } else {
        None
    };

    TradeCalculation {
        direction: inputs.direction,
        entry_price: inputs.entry_price,
        stop_price: prices.stop_price,
        target_price: prices.target_price,
        stop_distance: prices.stop_distance,
        risk_per_unit: prices.risk_per_unit,
        target_distance: prices.target_distance,
        trailing_amount: prices.trailing_amount,
        max_dollar_risk: sizing.max_dollar_risk,
        position_size: sizing.position_size,
        total_cost: sizing.total_cost,
        dollar_risk: sizing.dollar_risk,
        r_multiple,
        is_valid: true,
        errors: Vec::new(),
        warnings,
        order_ticket,
    }
}

/// Invalid-input result: derived fields zeroed, no ticket.
fn rejected(inputs: &TradeInputs, report: ValidationResult) -> TradeCalculation {
    TradeCalculation {
        direction: inputs.direction,
        entry_price: inputs.entry_price,
        stop_price: 0.0,
        target_price: 0.0,
        stop_distance: 0.0,
        risk_per_unit: 0.0,
        target_distance: 0.0,
        trailing_amount: 0.0,
        max_dollar_risk: 0.0,
        position_size: 0,
        total_cost: 0.0,
        dollar_risk: 0.0,
        r_multiple: None,
        is_valid: false,
        errors: report.errors,
        warnings: report.warnings,
        order_ticket: None,
    }
}
