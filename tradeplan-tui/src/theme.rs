//! Color tokens for the TradePlan TUI.
//!
//! Semantic palette:
//! - **Positive**: green (long badge, favorable levels)
//! - **Negative**: red (short badge, adverse levels)
//! - **Warning**: yellow (advisories)
//! - **Error**: red on dark (blocking problems)
//! - **Accent**: cyan (focused field)
//! - **Muted**: gray (labels, inactive rows)

use ratatui::style::{Color, Modifier, Style};

use tradeplan_core::domain::TradeDirection;

pub const ACCENT: Color = Color::Cyan;
pub const POSITIVE: Color = Color::Green;
pub const NEGATIVE: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const MUTED: Color = Color::DarkGray;
pub const TEXT: Color = Color::White;

/// Style for a form row, highlighted when focused.
pub fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    }
}

pub fn label_style() -> Style {
    Style::default().fg(MUTED)
}

/// Direction badge color: green for long, red for short.
pub fn badge_style(direction: TradeDirection) -> Style {
    let color = match direction {
        TradeDirection::Long => POSITIVE,
        TradeDirection::Short => NEGATIVE,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn warning_style() -> Style {
    Style::default().fg(WARNING)
}

pub fn error_style() -> Style {
    Style::default().fg(NEGATIVE).add_modifier(Modifier::BOLD)
}
