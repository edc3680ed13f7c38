//! Low-level shared utilities.

pub mod throttle;

pub use throttle::Throttle;
