//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::strategy::StrategyKind;

/// Root configuration for the load balancer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BalancerConfig {
    /// Ordered provider identifiers forming the pool (1 to 10 entries).
    pub providers: Vec<String>,

    /// Selection strategy applied on `select`.
    pub strategy: StrategyKind,

    /// Recovery scan settings.
    pub recovery: RecoveryConfig,

    /// Per-provider throughput used for the capacity ceiling.
    pub per_provider_capacity: usize,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            strategy: StrategyKind::default(),
            recovery: RecoveryConfig::default(),
            per_provider_capacity: 50,
        }
    }
}

impl BalancerConfig {
    /// Convenience constructor for the common embedding case: a pool
    /// and a strategy, everything else at defaults.
    pub fn new<I, S>(providers: I, strategy: StrategyKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            providers: providers.into_iter().map(Into::into).collect(),
            strategy,
            ..Self::default()
        }
    }
}

/// Recovery scan configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Seconds between recovery sweeps.
    pub heartbeat_interval_secs: u64,

    /// Sweeps an excluded provider must sit through before the next
    /// sweep re-admits it.
    pub threshold_checks: u32,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: 15,
            threshold_checks: 2,
        }
    }
}
