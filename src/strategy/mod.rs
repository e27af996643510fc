//! Selection strategies.
//!
//! # Data Flow
//! ```text
//! select() called
//!     → strategy.pick(registry)
//!     → registry.alive_providers() (consistent snapshot)
//!     → Apply selection policy:
//!         - random.rs (uniform draw, stateless)
//!         - round_robin.rs (rotate a shared cursor)
//!     → Return Arc<Provider> or NoAliveProviders
//! ```
//!
//! # Design Decisions
//! - The strategy set is closed; config names one kind at construction
//! - Strategies hold their own state; the pool stays policy-agnostic
//! - Excluded providers never appear in the snapshot a strategy sees

pub mod random;
pub mod round_robin;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BalancerError;
use crate::pool::provider::Provider;
use crate::pool::registry::ProviderRegistry;

use self::random::RandomStrategy;
use self::round_robin::RoundRobinStrategy;

/// A selection policy over the alive-providers view.
pub trait SelectionStrategy: Send + Sync + std::fmt::Debug {
    /// Pick one alive provider, or fail with
    /// [`BalancerError::NoAliveProviders`] if none remain.
    fn pick(&self, registry: &ProviderRegistry) -> Result<Arc<Provider>, BalancerError>;
}

/// The closed set of selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Uniform draw over the alive view on every call.
    Random,
    /// Cyclic traversal of the alive view.
    #[default]
    RoundRobin,
}

impl StrategyKind {
    /// Instantiate the strategy this kind names.
    pub fn build(self) -> Box<dyn SelectionStrategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new()),
            StrategyKind::RoundRobin => Box::new(RoundRobinStrategy::new()),
        }
    }
}
