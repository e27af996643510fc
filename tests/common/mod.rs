//! Shared utilities for integration testing.

use provider_balancer::{BalancerConfig, StrategyKind};

/// Initialize tracing once for test output.
#[allow(dead_code)]
pub fn init_tracing() {
    provider_balancer::observability::logging::init();
}

/// A config with the given pool and strategy, defaults elsewhere.
pub fn config<const N: usize>(providers: [&str; N], strategy: StrategyKind) -> BalancerConfig {
    BalancerConfig::new(providers, strategy)
}
