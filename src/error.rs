//! Error types for the load-balancing core.

use thiserror::Error;

/// Errors surfaced by the balancer to its callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalancerError {
    /// Pool construction attempted with an empty identifier list or one
    /// larger than the supported maximum. Fatal to construction.
    #[error("invalid provider pool size: {0} (expected 1..=10)")]
    InvalidPoolSize(usize),

    /// Selection attempted while every provider is excluded. Recoverable;
    /// the caller may retry once a provider is re-admitted.
    #[error("no alive providers available")]
    NoAliveProviders,
}
