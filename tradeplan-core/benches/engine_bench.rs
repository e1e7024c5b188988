//! Criterion benchmarks for the planning pipeline.
//!
//! Benchmarks:
//! 1. Full pipeline (validate → derive → size → ticket)
//! 2. Rejected-input fast path
//! 3. Validator alone

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tradeplan_core::domain::{RiskBudget, TradeDirection, TradeInputs};
use tradeplan_core::engine::{calculate_trade, validate};

fn sized_inputs() -> TradeInputs {
    TradeInputs {
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
    }
}

fn rejected_inputs() -> TradeInputs {
    let mut inputs = sized_inputs();
    inputs.entry_price = -1.0;
    inputs.volatility_unit = 0.0;
    inputs
}

fn bench_full_pipeline(c: &mut Criterion) {
    let inputs = sized_inputs();
    c.bench_function("calculate_trade_full", |b| {
        b.iter(|| calculate_trade(black_box(&inputs)))
    });
}

fn bench_rejected_path(c: &mut Criterion) {
    let inputs = rejected_inputs();
    c.bench_function("calculate_trade_rejected", |b| {
        b.iter(|| calculate_trade(black_box(&inputs)))
    });
}

fn bench_validator(c: &mut Criterion) {
    let inputs = sized_inputs();
    c.bench_function("validate", |b| b.iter(|| validate(black_box(&inputs))));
}

criterion_group!(
    benches,
    bench_full_pipeline,
    bench_rejected_path,
    bench_validator
);
criterion_main!(benches);
