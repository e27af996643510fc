//! Provider registry.
//!
//! # Responsibilities
//! - Own the fixed provider sequence
//! - Toggle liveness by identifier (exclude/include)
//! - Produce consistent alive-provider snapshots
//! - Age excluded providers on behalf of the recovery scheduler

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::BalancerError;
use crate::pool::provider::Provider;
use crate::pool::MAX_POOL_SIZE;

/// Per-provider liveness bookkeeping, index-aligned with the sequence.
#[derive(Debug)]
struct Slot {
    provider: Arc<Provider>,
    alive: bool,
    /// Recovery sweeps observed while excluded.
    excluded_checks: u32,
}

/// Fixed-size provider pool with mutable liveness state.
///
/// The sequence itself never changes after construction; exclusion and
/// inclusion only flip per-slot state under the pool lock. Every
/// mutation path, the recovery sweep included, goes through that same
/// lock, so a snapshot never observes a provider mid-toggle.
#[derive(Debug)]
pub struct ProviderRegistry {
    slots: Mutex<Vec<Slot>>,
}

impl ProviderRegistry {
    /// Build a registry from an ordered identifier list.
    ///
    /// All providers start alive with a zeroed recovery counter. Fails
    /// with [`BalancerError::InvalidPoolSize`] for an empty list or one
    /// longer than [`MAX_POOL_SIZE`].
    pub fn new<I, S>(identifiers: I) -> Result<Self, BalancerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots: Vec<Slot> = identifiers
            .into_iter()
            .map(|identifier| Slot {
                provider: Arc::new(Provider::new(identifier)),
                alive: true,
                excluded_checks: 0,
            })
            .collect();

        if slots.is_empty() || slots.len() > MAX_POOL_SIZE {
            return Err(BalancerError::InvalidPoolSize(slots.len()));
        }

        Ok(Self {
            slots: Mutex::new(slots),
        })
    }

    /// Number of providers in the pool, alive or not.
    pub fn pool_size(&self) -> usize {
        self.lock().len()
    }

    /// Take the matching provider out of rotation.
    /// Unknown identifiers are ignored.
    pub fn exclude(&self, identifier: &str) {
        let mut slots = self.lock();
        match slots
            .iter_mut()
            .find(|slot| slot.provider.identifier() == identifier)
        {
            Some(slot) => {
                slot.alive = false;
                tracing::debug!(provider = identifier, "provider excluded");
            }
            None => {
                tracing::debug!(provider = identifier, "exclude ignored: unknown provider");
            }
        }
    }

    /// Return the matching provider to rotation and reset its recovery
    /// counter. Unknown identifiers are ignored.
    pub fn include(&self, identifier: &str) {
        let mut slots = self.lock();
        match slots
            .iter_mut()
            .find(|slot| slot.provider.identifier() == identifier)
        {
            Some(slot) => {
                slot.alive = true;
                slot.excluded_checks = 0;
                tracing::debug!(provider = identifier, "provider included");
            }
            None => {
                tracing::debug!(provider = identifier, "include ignored: unknown provider");
            }
        }
    }

    /// Order-preserving snapshot of the currently alive providers.
    pub fn alive_providers(&self) -> Vec<Arc<Provider>> {
        self.lock()
            .iter()
            .filter(|slot| slot.alive)
            .map(|slot| slot.provider.clone())
            .collect()
    }

    /// Admission ceiling: alive-provider count times the per-provider
    /// throughput factor.
    pub fn capacity(&self, per_provider: usize) -> usize {
        self.lock().iter().filter(|slot| slot.alive).count() * per_provider
    }

    /// One recovery sweep: age every excluded provider by one check and
    /// re-admit those whose counter has passed `threshold`. Returns the
    /// re-admitted identifiers.
    ///
    /// The whole sweep runs under a single lock acquisition, so it never
    /// interleaves with a concurrent `exclude`/`include`.
    pub(crate) fn sweep_excluded(&self, threshold: u32) -> Vec<String> {
        let mut recovered = Vec::new();
        let mut slots = self.lock();
        for slot in slots.iter_mut().filter(|slot| !slot.alive) {
            slot.excluded_checks += 1;
            if slot.excluded_checks > threshold {
                slot.alive = true;
                slot.excluded_checks = 0;
                recovered.push(slot.provider.identifier().to_owned());
            }
        }
        recovered
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Slot>> {
        // A poisoned lock still holds consistent slot state; recover it.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
