//! Round-robin selection strategy.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::BalancerError;
use crate::pool::provider::Provider;
use crate::pool::registry::ProviderRegistry;
use crate::strategy::SelectionStrategy;

/// Cyclic selector.
///
/// Holds a single cursor into the alive-providers view, shared across
/// all callers. The cursor lock scopes the whole snapshot-pick-advance
/// sequence, so concurrent picks serialize and no two calls ever
/// observe the same pre-advance cursor value.
#[derive(Debug, Default)]
pub struct RoundRobinStrategy {
    cursor: Mutex<usize>,
}

impl RoundRobinStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStrategy for RoundRobinStrategy {
    fn pick(&self, registry: &ProviderRegistry) -> Result<Arc<Provider>, BalancerError> {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);

        let alive = registry.alive_providers();
        if alive.is_empty() {
            return Err(BalancerError::NoAliveProviders);
        }

        // The alive view may have shrunk since the cursor last advanced;
        // wrap to the front rather than fail.
        let index = if *cursor >= alive.len() { 0 } else { *cursor };
        *cursor = (index + 1) % alive.len();

        Ok(alive[index].clone())
    }
}
