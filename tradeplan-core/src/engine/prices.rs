//! Derived price levels — stop, target, and trailing magnitude from the
//! entry price, a volatility unit, and the configured multiples.
//!
//! For longs: stop below the entry, target above. For shorts: mirrored.
//! The stop is always on the adverse side and the target on the favorable
//! side; zero multiples are not clamped and simply collapse the level onto
//! the entry price.

use serde::{Deserialize, Serialize};

use crate::domain::{TradeDirection, TradeInputs};

/// Price levels derived from one input record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPrices {
    pub stop_price: f64,
    /// `volatility_unit * stop_multiple`.
    pub stop_distance: f64,
    /// Absolute entry-to-stop distance. Recomputed from the prices rather
    /// than assumed equal to `stop_distance`, so it stays correct if level
    /// rounding is ever applied between the two.
    pub risk_per_unit: f64,
    pub target_price: f64,
    /// `risk_per_unit * target_r_multiple`.
    pub target_distance: f64,
    /// `volatility_unit * trailing_multiple`; unsigned magnitude. The
    /// ticket builder applies the direction-dependent sign.
    pub trailing_amount: f64,
}

/// Compute stop, target, and trailing levels. Only called on validated
/// inputs.
pub fn derive_prices(inputs: &TradeInputs) -> DerivedPrices {
    let stop_distance = inputs.volatility_unit * inputs.stop_multiple;
    let stop_price = match inputs.direction {
        TradeDirection::Long => inputs.entry_price - stop_distance,
        TradeDirection::Short => inputs.entry_price + stop_distance,
    };

    let risk_per_unit = (inputs.entry_price - stop_price).abs();

    let target_distance = risk_per_unit * inputs.target_r_multiple;
    let target_price = match inputs.direction {
        TradeDirection::Long => inputs.entry_price + target_distance,
        TradeDirection::Short => inputs.entry_price - target_distance,
    };

    DerivedPrices {
        stop_price,
        stop_distance,
        risk_per_unit,
        target_price,
        target_distance,
        trailing_amount: inputs.volatility_unit * inputs.trailing_multiple,
    }
}
