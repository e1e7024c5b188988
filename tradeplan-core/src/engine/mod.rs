//! Calculation engine — the sequential planning pipeline.
//!
//! One request flows through four stages:
//!
//! 1. Validator: checklist pass over the raw inputs (errors + warnings)
//! 2. Price deriver: stop/target/trailing levels from the volatility unit
//! 3. Position sizer: whole-unit size floored against the risk budget
//! 4. Ticket builder: direction-dependent bracket order assembly
//!
//! Every stage is a pure function; [`calculate_trade`] is the only entry
//! point hosts consume.

pub mod calculator;
pub mod prices;
pub mod sizing;
pub mod ticket_builder;
pub mod validator;

pub use calculator::{calculate_trade, TradeCalculation};
pub use prices::{derive_prices, DerivedPrices};
pub use sizing::{size_position, PositionSizing};
pub use ticket_builder::build_order_ticket;
pub use validator::{validate, ValidationError, ValidationResult, ValidationWarning};
