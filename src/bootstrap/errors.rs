//! Error types for the bootstrap components.
//!
//! All errors here are local to a single request: the worst case is a
//! rejected initialization, never a fatal condition. A negative scale
//! after a filter correction is deliberately not an error variant; it is
//! repaired in place by the sanitizer and only logged, because it
//! originates asynchronously from the filter's own correction step.

use std::fmt;

/// Errors that can occur while resolving the initialization scale.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapError {
    /// No pose observation has been received yet, so the vertical
    /// position needed for height-based resolution is unavailable.
    NoMeasurementYet,

    /// Requested initialization height is at or below the minimum.
    HeightTooSmall {
        /// The rejected height value.
        height: f64,
        /// The minimum allowed magnitude.
        minimum: f64,
    },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::NoMeasurementYet => {
                write!(
                    f,
                    "No measurements received yet to initialize position. \
                     Height init not allowed."
                )
            }
            BootstrapError::HeightTooSmall { height, minimum } => {
                write!(
                    f,
                    "Height too small for initialization, the minimum is {} and {} was set.",
                    minimum, height
                )
            }
        }
    }
}

impl std::error::Error for BootstrapError {}
