//! Application state — single-owner, main-thread only.
//!
//! The form holds raw text buffers for every numeric field; each committed
//! edit reruns the whole calculation pipeline. There is no worker thread:
//! the engine is synchronous and cheap enough to run inline on every
//! change, and the latest result simply replaces the prior one.

use std::path::PathBuf;

use tradeplan_core::domain::{RiskBudget, TradeDirection, TradeInputs};
use tradeplan_core::engine::{calculate_trade, TradeCalculation};

/// Which risk basis the form currently edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBasis {
    Percent,
    Fixed,
}

impl RiskBasis {
    pub fn label(self) -> &'static str {
        match self {
            RiskBasis::Percent => "percent of account",
            RiskBasis::Fixed => "fixed dollars",
        }
    }

    pub fn toggle(self) -> RiskBasis {
        match self {
            RiskBasis::Percent => RiskBasis::Fixed,
            RiskBasis::Fixed => RiskBasis::Percent,
        }
    }
}

/// One focusable form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Direction,
    RiskBasis,
    AccountSize,
    RiskValue,
    EntryPrice,
    VolatilityUnit,
    StopMultiple,
    TargetRMultiple,
    TrailingMultiple,
    EntryBuffer,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Direction,
        Field::RiskBasis,
        Field::AccountSize,
        Field::RiskValue,
        Field::EntryPrice,
        Field::VolatilityUnit,
        Field::StopMultiple,
        Field::TargetRMultiple,
        Field::TrailingMultiple,
        Field::EntryBuffer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Direction => "direction",
            Field::RiskBasis => "risk basis",
            Field::AccountSize => "account size",
            Field::RiskValue => "risk value",
            Field::EntryPrice => "entry price",
            Field::VolatilityUnit => "volatility unit",
            Field::StopMultiple => "stop multiple",
            Field::TargetRMultiple => "target R multiple",
            Field::TrailingMultiple => "trailing multiple",
            Field::EntryBuffer => "entry buffer",
        }
    }

    /// Toggle fields flip on space/enter; the rest take text edits.
    pub fn is_toggle(self) -> bool {
        matches!(self, Field::Direction | Field::RiskBasis)
    }

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

/// Raw form content: direction plus text buffers for every numeric field.
#[derive(Debug, Clone)]
pub struct FormState {
    pub direction: TradeDirection,
    pub basis: RiskBasis,
    pub account_size: String,
    pub risk_percent: String,
    pub risk_amount: String,
    pub entry_price: String,
    pub volatility_unit: String,
    pub stop_multiple: String,
    pub target_r_multiple: String,
    pub trailing_multiple: String,
    pub entry_buffer: String,
}

impl FormState {
    pub fn new(account_size: f64) -> Self {
        Self {
            direction: TradeDirection::Long,
            basis: RiskBasis::Percent,
            account_size: trim_number(account_size),
            risk_percent: "1".to_string(),
            risk_amount: "100".to_string(),
            entry_price: String::new(),
            volatility_unit: String::new(),
            stop_multiple: "2".to_string(),
            target_r_multiple: "2".to_string(),
            trailing_multiple: "1".to_string(),
            entry_buffer: "0.05".to_string(),
        }
    }

    /// The buffer behind a text field. Toggle fields have none.
    pub fn buffer_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::AccountSize => Some(&mut self.account_size),
            Field::RiskValue => match self.basis {
                RiskBasis::Percent => Some(&mut self.risk_percent),
                RiskBasis::Fixed => Some(&mut self.risk_amount),
            },
            Field::EntryPrice => Some(&mut self.entry_price),
            Field::VolatilityUnit => Some(&mut self.volatility_unit),
            Field::StopMultiple => Some(&mut self.stop_multiple),
            Field::TargetRMultiple => Some(&mut self.target_r_multiple),
            Field::TrailingMultiple => Some(&mut self.trailing_multiple),
            Field::EntryBuffer => Some(&mut self.entry_buffer),
            Field::Direction | Field::RiskBasis => None,
        }
    }

    /// Display text for a field row.
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Direction => self.direction.label().to_string(),
            Field::RiskBasis => self.basis.label().to_string(),
            Field::AccountSize => self.account_size.clone(),
            Field::RiskValue => match self.basis {
                RiskBasis::Percent => self.risk_percent.clone(),
                RiskBasis::Fixed => self.risk_amount.clone(),
            },
            Field::EntryPrice => self.entry_price.clone(),
            Field::VolatilityUnit => self.volatility_unit.clone(),
            Field::StopMultiple => self.stop_multiple.clone(),
            Field::TargetRMultiple => self.target_r_multiple.clone(),
            Field::TrailingMultiple => self.trailing_multiple.clone(),
            Field::EntryBuffer => self.entry_buffer.clone(),
        }
    }

    /// Convert the raw form into engine inputs.
    ///
    /// Buffers that do not parse become NaN; the engine's validator turns
    /// those into a finite-input error instead of this layer inventing its
    /// own error channel.
    pub fn to_inputs(&self) -> TradeInputs {
        let risk_budget = match self.basis {
            RiskBasis::Percent => RiskBudget::PercentOfAccount {
                account_size: parse_buffer(&self.account_size),
                percent: parse_buffer(&self.risk_percent),
            },
            RiskBasis::Fixed => RiskBudget::FixedDollar {
                amount: parse_buffer(&self.risk_amount),
            },
        };
        TradeInputs {
            direction: self.direction,
            entry_price: parse_buffer(&self.entry_price),
            volatility_unit: parse_buffer(&self.volatility_unit),
            risk_budget,
            stop_multiple: parse_buffer(&self.stop_multiple),
            target_r_multiple: parse_buffer(&self.target_r_multiple),
            trailing_multiple: parse_buffer(&self.trailing_multiple),
            entry_buffer: parse_buffer(&self.entry_buffer),
        }
    }
}

fn parse_buffer(buffer: &str) -> f64 {
    buffer.trim().parse().unwrap_or(f64::NAN)
}

/// Render a float without a trailing ".0" for whole numbers.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// All TUI state. Single owner, mutated only by the input handler.
pub struct AppState {
    pub form: FormState,
    pub focus: Field,
    pub calc: TradeCalculation,
    pub status: Option<String>,
    pub running: bool,
    pub prefs_path: PathBuf,
    /// Last account size written to disk, to avoid rewriting on no-ops.
    pub saved_account_size: f64,
}

impl AppState {
    pub fn new(prefs_path: PathBuf, account_size: f64) -> Self {
        let form = FormState::new(account_size);
        let calc = calculate_trade(&form.to_inputs());
        Self {
            form,
            focus: Field::EntryPrice,
            calc,
            status: None,
            running: true,
            prefs_path,
            saved_account_size: account_size,
        }
    }

    /// Rerun the full pipeline from the current form content.
    pub fn recompute(&mut self) {
        self.calc = calculate_trade(&self.form.to_inputs());
    }

    /// Persist the account size if it parsed to a new positive value.
    pub fn commit_account_size(&mut self) {
        let parsed = parse_buffer(&self.form.account_size);
        if parsed.is_finite() && parsed > 0.0 && parsed != self.saved_account_size {
            match crate::persistence::save_account_size(&self.prefs_path, parsed) {
                Ok(()) => {
                    self.saved_account_size = parsed;
                    self.status = Some(format!("account size saved ({parsed})"));
                }
                Err(err) => {
                    self.status = Some(format!("could not save preference: {err}"));
                }
            }
        }
    }
}
