mod concurrency_tests;
mod pricing_tests;
mod statistics_tests;
mod strategy_tests;
