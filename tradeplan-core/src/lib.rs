//! TradePlan Core — deterministic trade-planning calculator.
//!
//! Given manually observed price levels and account-risk parameters, the
//! engine derives:
//! - Stop, target, and trailing-stop levels scaled by a volatility unit
//! - A risk-based whole-unit position size with floor semantics
//! - Reward-to-risk figures
//! - A broker-agnostic bracket order ticket
//!
//! The pipeline is pure and total: no I/O, no shared state, and every
//! domain rule violation is reported as data in the result, never as an
//! error return or a panic.

pub mod domain;
pub mod engine;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all engine records are Send + Sync.
    ///
    /// Hosts are free to recompute from any thread; nothing in the result
    /// chain may smuggle in interior mutability.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::TradeDirection>();
        require_sync::<domain::TradeDirection>();
        require_send::<domain::RiskBudget>();
        require_sync::<domain::RiskBudget>();
        require_send::<domain::TradeInputs>();
        require_sync::<domain::TradeInputs>();
        require_send::<domain::OrderTicket>();
        require_sync::<domain::OrderTicket>();

        require_send::<engine::ValidationResult>();
        require_sync::<engine::ValidationResult>();
        require_send::<engine::DerivedPrices>();
        require_sync::<engine::DerivedPrices>();
        require_send::<engine::PositionSizing>();
        require_sync::<engine::PositionSizing>();
        require_send::<engine::TradeCalculation>();
        require_sync::<engine::TradeCalculation>();
    }
}
