//! Result column — derived levels, sizing, warnings, and the order ticket.
//!
//! All formatting policy (currency text, badges, color thresholds) lives
//! here; the engine only supplies the structured record.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Compact currency text, e.g. `$1650.00`.
pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Plan ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let calc = &app.calc;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("[{}] ", calc.direction.label()),
            theme::badge_style(calc.direction),
        ),
        Span::raw(format!("entry {}", money(calc.entry_price))),
    ]));
    lines.push(Line::raw(""));

    if !calc.is_valid {
        for error in &calc.errors {
            lines.push(Line::styled(
                format!("error: {error}"),
                theme::error_style(),
            ));
        }
        f.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), theme::label_style()),
            Span::styled(value, Style::default().fg(theme::TEXT)),
        ])
    };

    lines.push(row("stop", money(calc.stop_price)));
    lines.push(row("target", money(calc.target_price)));
    lines.push(row("trailing amt", money(calc.trailing_amount)));
    lines.push(row("risk per unit", money(calc.risk_per_unit)));
    lines.push(row("max risk", money(calc.max_dollar_risk)));
    lines.push(row("position size", calc.position_size.to_string()));
    lines.push(row("total cost", money(calc.total_cost)));
    lines.push(row("dollar risk", money(calc.dollar_risk)));
    lines.push(row(
        "r multiple",
        match calc.r_multiple {
            Some(r) => format!("{r:.2}"),
            None => "not computed".to_string(),
        },
    ));

    lines.push(Line::raw(""));
    match &calc.order_ticket {
        Some(ticket) => {
            lines.push(Line::styled("order ticket", theme::label_style()));
            lines.push(Line::raw(format!(
                "  entry    {} {} @ stop {} limit {}",
                ticket.entry_order_kind.label(),
                ticket.quantity,
                money(ticket.entry_stop_price),
                money(ticket.entry_limit_price),
            )));
            lines.push(Line::raw(format!(
                "  target   {} {} @ {}",
                ticket.profit_target_kind.label(),
                ticket.quantity,
                money(ticket.profit_target_price),
            )));
            lines.push(Line::raw(format!(
                "  trailing {} {} @ offset {}",
                ticket.trailing_stop_kind.label(),
                ticket.quantity,
                money(ticket.trailing_stop_amount),
            )));
            lines.push(Line::raw(format!("  linkage  {}", ticket.linkage_policy)));
        }
        None => {
            lines.push(Line::styled(
                "no order ticket (position size is zero)",
                theme::warning_style(),
            ));
        }
    }

    if !calc.warnings.is_empty() {
        lines.push(Line::raw(""));
        for warning in &calc.warnings {
            lines.push(Line::styled(
                format!("warning: {warning}"),
                theme::warning_style(),
            ));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}
