//! Text rendering for plan results — formatting policy lives here, never
//! in the engine.

use tradeplan_core::engine::TradeCalculation;

/// Format a dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = format!("{:.2}", value.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Render the full calculation as aligned text.
pub fn render_calculation(calc: &TradeCalculation) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "[{}] entry {}\n",
        calc.direction.label(),
        format_currency(calc.entry_price)
    ));

    if !calc.is_valid {
        out.push_str("\nblocking errors:\n");
        for error in &calc.errors {
            out.push_str(&format!("  error: {error}\n"));
        }
        return out;
    }

    out.push_str("\nlevels\n");
    out.push_str(&format!(
        "  stop            {:>12}  (distance {})\n",
        format_currency(calc.stop_price),
        format_currency(calc.stop_distance)
    ));
    out.push_str(&format!(
        "  target          {:>12}  (distance {})\n",
        format_currency(calc.target_price),
        format_currency(calc.target_distance)
    ));
    out.push_str(&format!(
        "  trailing amount {:>12}\n",
        format_currency(calc.trailing_amount)
    ));

    out.push_str("\nsizing\n");
    out.push_str(&format!(
        "  risk per unit   {:>12}\n",
        format_currency(calc.risk_per_unit)
    ));
    out.push_str(&format!(
        "  max risk        {:>12}\n",
        format_currency(calc.max_dollar_risk)
    ));
    out.push_str(&format!("  position size   {:>12}\n", calc.position_size));
    out.push_str(&format!(
        "  total cost      {:>12}\n",
        format_currency(calc.total_cost)
    ));
    out.push_str(&format!(
        "  dollar risk     {:>12}\n",
        format_currency(calc.dollar_risk)
    ));
    match calc.r_multiple {
        Some(r) => out.push_str(&format!("  r multiple      {r:>12.2}\n")),
        None => out.push_str("  r multiple      not computed\n"),
    }

    match &calc.order_ticket {
        Some(ticket) => {
            out.push_str("\norder ticket\n");
            out.push_str(&format!(
                "  entry    {} {} @ stop {} limit {}\n",
                ticket.entry_order_kind.label(),
                ticket.quantity,
                format_currency(ticket.entry_stop_price),
                format_currency(ticket.entry_limit_price)
            ));
            out.push_str(&format!(
                "  target   {} {} @ {}\n",
                ticket.profit_target_kind.label(),
                ticket.quantity,
                format_currency(ticket.profit_target_price)
            ));
            out.push_str(&format!(
                "  trailing {} {} @ offset {}\n",
                ticket.trailing_stop_kind.label(),
                ticket.quantity,
                format_currency(ticket.trailing_stop_amount)
            ));
            out.push_str(&format!("  linkage  {}\n", ticket.linkage_policy));
        }
        None => out.push_str("\nno order ticket (position size is zero)\n"),
    }

    if !calc.warnings.is_empty() {
        out.push('\n');
        for warning in &calc.warnings {
            out.push_str(&format!("warning: {warning}\n"));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeplan_core::domain::{RiskBudget, TradeDirection, TradeInputs};
    use tradeplan_core::engine::calculate_trade;

    fn sample_calc() -> TradeCalculation {
        calculate_trade(&TradeInputs {
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
        })
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(47.05), "$47.05");
        assert_eq!(format_currency(1_650.0), "$1,650.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1.5), "-$1.50");
    }

    #[test]
    fn renders_badge_levels_and_ticket() {
        let text = render_calculation(&sample_calc());
        assert!(text.contains("[LONG]"));
        assert!(text.contains("$47.00"));
        assert!(text.contains("$56.00"));
        assert!(text.contains("buy-stop-limit"));
        assert!(text.contains("one-cancels-other"));
    }

    #[test]
    fn renders_errors_for_invalid_plan() {
        let mut calc = sample_calc();
        calc.is_valid = false;
        calc.errors = vec![
            tradeplan_core::engine::ValidationError::RiskPercentNotPositive,
        ];
        let text = render_calculation(&calc);
        assert!(text.contains("risk percent must be greater than zero"));
        assert!(!text.contains("order ticket"));
    }

    #[test]
    fn renders_zero_size_note() {
        let mut calc = sample_calc();
        calc.position_size = 0;
        calc.order_ticket = None;
        let text = render_calculation(&calc);
        assert!(text.contains("no order ticket"));
    }
}
