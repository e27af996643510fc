//! Provider pool subsystem.
//!
//! # Data Flow
//! ```text
//! LoadBalancer construction
//!     → registry.rs (fixed provider sequence, all alive)
//!
//! select()
//!     → registry.rs (alive_providers snapshot under the pool lock)
//!     → strategy picks one
//!     → provider.rs handle returned to the caller
//!
//! exclude()/include()/recovery sweep
//!     → registry.rs (liveness + counter mutation under the same lock)
//! ```
//!
//! # Design Decisions
//! - The provider sequence is fixed at construction; only liveness mutates
//! - One mutex guards every mutation path, the recovery sweep included
//! - Snapshots are order-preserving and never expose a mid-toggle view

pub mod provider;
pub mod registry;

pub use provider::Provider;
pub use registry::ProviderRegistry;

/// Largest supported provider pool.
pub const MAX_POOL_SIZE: usize = 10;
