//! Liveness recovery subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic timer (scheduler.rs):
//!     tick → registry sweep
//!          → every excluded provider ages by one check
//!          → counter past threshold → provider re-admitted
//!
//! Shutdown:
//!     LoadBalancer teardown → broadcast signal → scan loop exits
//! ```
//!
//! # Design Decisions
//! - Recovery counts sweeps, not elapsed wall-clock time
//! - A sweep shares the pool lock with exclude/include; never torn
//! - Sweep problems are logged and the ticker keeps its schedule

pub mod scheduler;

pub use scheduler::{RecoveryHandle, RecoveryScheduler};
