//! Load balancer composition root.
//!
//! # Responsibilities
//! - Bind the provider registry to a selection strategy
//! - Own the recovery scheduler's lifecycle
//! - Expose the boundary the surrounding system calls into

use std::sync::Arc;
use std::time::Duration;

use crate::config::BalancerConfig;
use crate::error::BalancerError;
use crate::pool::provider::Provider;
use crate::pool::registry::ProviderRegistry;
use crate::recovery::{RecoveryHandle, RecoveryScheduler};
use crate::strategy::SelectionStrategy;

/// Provider load balancer.
///
/// Construction spawns the recovery scheduler, so a `LoadBalancer` must
/// be created inside a tokio runtime. Dropping the balancer stops
/// future sweeps; [`shutdown`] additionally waits for the scheduler
/// task to exit.
///
/// [`shutdown`]: LoadBalancer::shutdown
#[derive(Debug)]
pub struct LoadBalancer {
    registry: Arc<ProviderRegistry>,
    strategy: Box<dyn SelectionStrategy>,
    per_provider_capacity: usize,
    recovery: RecoveryHandle,
}

impl LoadBalancer {
    /// Build a balancer from configuration and start its recovery scan.
    ///
    /// Fails with [`BalancerError::InvalidPoolSize`] when the pool is
    /// empty or larger than the supported maximum.
    pub fn new(config: BalancerConfig) -> Result<Self, BalancerError> {
        let registry = Arc::new(ProviderRegistry::new(config.providers)?);

        let scheduler = RecoveryScheduler::new(
            registry.clone(),
            Duration::from_secs(config.recovery.heartbeat_interval_secs),
            config.recovery.threshold_checks,
        );
        let recovery = scheduler.spawn();

        tracing::info!(
            pool_size = registry.pool_size(),
            strategy = ?config.strategy,
            "load balancer started"
        );

        Ok(Self {
            registry,
            strategy: config.strategy.build(),
            per_provider_capacity: config.per_provider_capacity,
            recovery,
        })
    }

    /// Pick one alive provider using the configured strategy.
    pub fn select(&self) -> Result<Arc<Provider>, BalancerError> {
        self.strategy.pick(&self.registry)
    }

    /// Take a provider out of rotation. Unknown identifiers are ignored.
    pub fn exclude(&self, identifier: &str) {
        self.registry.exclude(identifier);
    }

    /// Return a provider to rotation. Unknown identifiers are ignored.
    pub fn include(&self, identifier: &str) {
        self.registry.include(identifier);
    }

    /// Current admission ceiling across alive providers.
    pub fn capacity(&self) -> usize {
        self.registry.capacity(self.per_provider_capacity)
    }

    /// Order-preserving view of the currently alive providers.
    pub fn alive_providers(&self) -> Vec<Arc<Provider>> {
        self.registry.alive_providers()
    }

    /// Stop the recovery scheduler and wait for it to exit.
    pub async fn shutdown(self) {
        self.recovery.stop().await;
        tracing::info!("load balancer stopped");
    }
}
