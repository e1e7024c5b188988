//! Ticket assembly — direction-dependent sign and ordering rules.
//!
//! The entry stop-limit's limit price sits on the worse side of the trigger
//! so the entry still fills once armed, and the trailing-stop offset is
//! signed the way brokers expect: negative for a long (trail below the
//! running high), positive for a short.

use crate::domain::{
    EntryOrderKind, OrderTicket, ProfitTargetKind, TradeDirection, TrailingStopKind,
    LINKAGE_POLICY,
};
use crate::engine::prices::DerivedPrices;

/// Build the bracket ticket for a sized plan.
///
/// Returns `None` when `position_size` is zero: an unactionable plan gets
/// no ticket rather than a zero-filled one.
pub fn build_order_ticket(
    direction: TradeDirection,
    prices: &DerivedPrices,
    position_size: u32,
    entry_buffer: f64,
) -> Option<OrderTicket> {
    if position_size == 0 {
        return None;
    }

    let trailing_magnitude = prices.trailing_amount.abs();
    let (entry_limit_price, trailing_stop_amount) = match direction {
        TradeDirection::Long => (prices.stop_price + entry_buffer, -trailing_magnitude),
        TradeDirection::Short => (prices.stop_price - entry_buffer, trailing_magnitude),
    };

    Some(OrderTicket {
        entry_order_kind: EntryOrderKind::for_direction(direction),
        entry_stop_price: prices.stop_price,
        entry_limit_price,
        quantity: position_size,
        profit_target_kind: ProfitTargetKind::for_direction(direction),
        profit_target_price: prices.target_price,
        trailing_stop_kind: TrailingStopKind::for_direction(direction),
        trailing_stop_amount,
        linkage_policy: LINKAGE_POLICY.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> DerivedPrices {
        DerivedPrices {
            stop_price: 47.0,
            stop_distance: 3.0,
            risk_per_unit: 3.0,
            target_price: 56.0,
            target_distance: 6.0,
            trailing_amount: 1.5,
        }
    }

    fn short_prices() -> DerivedPrices {
        DerivedPrices {
            stop_price: 53.0,
            stop_distance: 3.0,
            risk_per_unit: 3.0,
            target_price: 44.0,
            target_distance: 6.0,
            trailing_amount: 1.5,
        }
    }

    #[test]
    fn long_ticket_fields() {
        let ticket =
            build_order_ticket(TradeDirection::Long, &prices(), 33, 0.05).unwrap();
        assert_eq!(ticket.entry_order_kind, EntryOrderKind::BuyStopLimit);
        assert_eq!(ticket.entry_stop_price, 47.0);
        assert_eq!(ticket.entry_limit_price, 47.05);
        assert_eq!(ticket.quantity, 33);
        assert_eq!(ticket.profit_target_kind, ProfitTargetKind::SellLimit);
        assert_eq!(ticket.profit_target_price, 56.0);
        assert_eq!(ticket.trailing_stop_kind, TrailingStopKind::SellTrailingStop);
        assert_eq!(ticket.trailing_stop_amount, -1.5);
        assert_eq!(ticket.linkage_policy, LINKAGE_POLICY);
    }

    #[test]
    fn short_ticket_fields() {
        let ticket =
            build_order_ticket(TradeDirection::Short, &short_prices(), 33, 0.05).unwrap();
        assert_eq!(ticket.entry_order_kind, EntryOrderKind::SellStopLimit);
        assert_eq!(ticket.entry_stop_price, 53.0);
        assert_eq!(ticket.entry_limit_price, 52.95);
        assert_eq!(ticket.profit_target_kind, ProfitTargetKind::BuyLimit);
        assert_eq!(ticket.profit_target_price, 44.0);
        assert_eq!(ticket.trailing_stop_kind, TrailingStopKind::BuyTrailingStop);
        assert_eq!(ticket.trailing_stop_amount, 1.5);
    }

    #[test]
    fn zero_size_yields_no_ticket() {
        assert!(build_order_ticket(TradeDirection::Long, &prices(), 0, 0.05).is_none());
    }

    #[test]
    fn limit_straddles_stop_in_buffer_direction() {
        let long = build_order_ticket(TradeDirection::Long, &prices(), 10, 0.25).unwrap();
        assert!(long.entry_limit_price >= long.entry_stop_price);

        let short =
            build_order_ticket(TradeDirection::Short, &short_prices(), 10, 0.25).unwrap();
        assert!(short.entry_limit_price <= short.entry_stop_price);
    }

    #[test]
    fn zero_buffer_puts_limit_on_the_stop() {
        let ticket = build_order_ticket(TradeDirection::Long, &prices(), 10, 0.0).unwrap();
        assert_eq!(ticket.entry_limit_price, ticket.entry_stop_price);
    }

    #[test]
    fn trailing_sign_is_direction_determined() {
        let long = build_order_ticket(TradeDirection::Long, &prices(), 1, 0.0).unwrap();
        assert!(long.trailing_stop_amount <= 0.0);

        let short =
            build_order_ticket(TradeDirection::Short, &short_prices(), 1, 0.0).unwrap();
        assert!(short.trailing_stop_amount >= 0.0);
    }
}
