//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check pool bounds and duplicate identifiers
//! - Validate value ranges (interval and capacity must be positive)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::BalancerConfig;
use crate::pool::MAX_POOL_SIZE;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Pool is empty or larger than the supported maximum.
    PoolSize(usize),
    /// The same identifier appears more than once.
    DuplicateProvider(String),
    /// The sweep interval must be positive.
    ZeroHeartbeatInterval,
    /// The capacity factor must be positive.
    ZeroPerProviderCapacity,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::PoolSize(n) => {
                write!(f, "pool size {} outside 1..={}", n, MAX_POOL_SIZE)
            }
            ValidationError::DuplicateProvider(id) => {
                write!(f, "duplicate provider identifier '{}'", id)
            }
            ValidationError::ZeroHeartbeatInterval => {
                write!(f, "heartbeat_interval_secs must be greater than 0")
            }
            ValidationError::ZeroPerProviderCapacity => {
                write!(f, "per_provider_capacity must be greater than 0")
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &BalancerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let pool_size = config.providers.len();
    if pool_size == 0 || pool_size > MAX_POOL_SIZE {
        errors.push(ValidationError::PoolSize(pool_size));
    }

    let mut seen = HashSet::new();
    for identifier in &config.providers {
        if !seen.insert(identifier.as_str()) {
            errors.push(ValidationError::DuplicateProvider(identifier.clone()));
        }
    }

    if config.recovery.heartbeat_interval_secs == 0 {
        errors.push(ValidationError::ZeroHeartbeatInterval);
    }

    if config.per_provider_capacity == 0 {
        errors.push(ValidationError::ZeroPerProviderCapacity);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
