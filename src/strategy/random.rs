//! Uniform-random selection strategy.

use std::sync::Arc;

use rand::Rng;

use crate::error::BalancerError;
use crate::pool::provider::Provider;
use crate::pool::registry::ProviderRegistry;
use crate::strategy::SelectionStrategy;

/// Stateless uniform selector.
/// Every alive provider is equally likely on every call; nothing is
/// carried between calls.
#[derive(Debug, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for RandomStrategy {
    fn pick(&self, registry: &ProviderRegistry) -> Result<Arc<Provider>, BalancerError> {
        let alive = registry.alive_providers();
        if alive.is_empty() {
            return Err(BalancerError::NoAliveProviders);
        }

        let index = rand::thread_rng().gen_range(0..alive.len());
        Ok(alive[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_fails_when_all_excluded() {
        let registry = ProviderRegistry::new(["a"]).unwrap();
        registry.exclude("a");

        let strategy = RandomStrategy::new();
        assert_eq!(
            strategy.pick(&registry).unwrap_err(),
            BalancerError::NoAliveProviders
        );
    }

    #[test]
    fn pick_never_returns_an_excluded_provider() {
        let registry = ProviderRegistry::new(["a", "b", "c"]).unwrap();
        registry.exclude("b");

        let strategy = RandomStrategy::new();
        for _ in 0..200 {
            let picked = strategy.pick(&registry).unwrap();
            assert_ne!(picked.identifier(), "b");
        }
    }

    #[test]
    fn pick_reaches_every_alive_provider() {
        let registry = ProviderRegistry::new(["a", "b"]).unwrap();
        let strategy = RandomStrategy::new();

        let mut seen_a = false;
        let mut seen_b = false;
        for _ in 0..200 {
            match strategy.pick(&registry).unwrap().identifier() {
                "a" => seen_a = true,
                "b" => seen_b = true,
                other => panic!("unexpected provider {other}"),
            }
        }
        assert!(seen_a && seen_b);
    }
}
