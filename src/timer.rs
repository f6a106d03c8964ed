//! src/timer.rs
//!
//! Top-level `timer` module: clocks and the cancellable task scheduler.

pub mod clock;
pub mod scheduler;

/// Re-exports
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scheduler::{Due, Scheduler, TaskHandle};
