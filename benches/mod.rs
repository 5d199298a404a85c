use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    pricing::bench_price,
    pricing::bench_greeks,
    pricing::bench_implied_volatility,
    statistics::bench_series,
    strategy::bench_payoff,
);
criterion_main!(benches);
