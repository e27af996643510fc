//! Provider load-balancing core.
//!
//! Selects a provider from a bounded pool to serve each request, tracks
//! provider liveness, and periodically re-admits excluded providers
//! after a fixed number of recovery scans.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │               LOAD BALANCER              │
//!                      │                                          │
//!   select() ──────────┼─▶ strategy ──▶ alive snapshot ──▶ pick ──┼─▶ Arc<Provider>
//!                      │   (random │ round-robin)                 │
//!                      │                   ▲                      │
//!   exclude/include ───┼─▶ provider pool ──┘                      │
//!                      │        ▲                                 │
//!                      │        └── recovery scheduler            │
//!                      │            (periodic sweep, re-admits)   │
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! The surrounding system (a request router, a health prober) calls
//! `select`/`exclude`/`include`/`capacity`; this crate carries no
//! network transport of its own.

// Core subsystems
pub mod config;
pub mod pool;
pub mod strategy;

// Liveness recovery
pub mod recovery;

// Cross-cutting concerns
pub mod error;
pub mod observability;

mod balancer;

pub use balancer::LoadBalancer;
pub use config::BalancerConfig;
pub use error::BalancerError;
pub use pool::provider::Provider;
pub use strategy::StrategyKind;
