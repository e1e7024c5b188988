//! TOML plan files — the same input surface as the flag form.
//!
//! A plan file mirrors the `plan` flags one-to-one, with the risk basis as
//! a tagged table so exactly one of percent/fixed is representable:
//!
//! ```toml
//! direction = "long"
//! entry_price = 50.0
//! volatility_unit = 1.5
//! stop_multiple = 2.0
//! target_r_multiple = 2.0
//! trailing_multiple = 1.0
//! entry_buffer = 0.05
//!
//! [risk]
//! basis = "percent"
//! percent = 1.0
//! # account_size is optional; the saved preference fills it in
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use tradeplan_core::domain::{RiskBudget, TradeDirection, TradeInputs};

/// Risk basis table: exactly one of the two shapes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum RiskSection {
    Percent {
        percent: f64,
        account_size: Option<f64>,
    },
    Fixed {
        amount: f64,
    },
}

/// Deserialized plan file.
#[derive(Debug, Deserialize)]
pub struct PlanFile {
    pub direction: String,
    pub entry_price: f64,
    pub volatility_unit: f64,
    pub stop_multiple: f64,
    pub target_r_multiple: f64,
    #[serde(default)]
    pub trailing_multiple: f64,
    #[serde(default)]
    pub entry_buffer: f64,
    pub risk: RiskSection,
}

impl PlanFile {
    /// Parse a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid plan file")
    }

    /// Convert into engine inputs. `default_account_size` backfills a
    /// percent basis with no explicit account size.
    pub fn into_inputs(self, default_account_size: f64) -> Result<TradeInputs> {
        let direction = parse_direction(&self.direction)?;
        let risk_budget = match self.risk {
            RiskSection::Percent {
                percent,
                account_size,
            } => RiskBudget::PercentOfAccount {
                account_size: account_size.unwrap_or(default_account_size),
                percent,
            },
            RiskSection::Fixed { amount } => RiskBudget::FixedDollar { amount },
        };
        Ok(TradeInputs {
            direction,
            entry_price: self.entry_price,
            volatility_unit: self.volatility_unit,
            risk_budget,
            stop_multiple: self.stop_multiple,
            target_r_multiple: self.target_r_multiple,
            trailing_multiple: self.trailing_multiple,
            entry_buffer: self.entry_buffer,
        })
    }
}

/// Parse a direction keyword (case-insensitive).
pub fn parse_direction(s: &str) -> Result<TradeDirection> {
    match s.to_ascii_lowercase().as_str() {
        "long" => Ok(TradeDirection::Long),
        "short" => Ok(TradeDirection::Short),
        other => bail!("unknown direction '{other}' (expected long or short)"),
    }
}
