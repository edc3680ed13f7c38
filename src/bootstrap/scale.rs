//! Scale resolution from user-supplied values or known heights.
//!
//! A monocular pose source is scale-ambiguous: the filter carries the
//! metric scale as an auxiliary state, but it has to be seeded with
//! something sensible. Two strategies exist today: take the scale the
//! user supplies directly, or derive it from a known physical height and
//! the latest observed vertical position. Resolution is kept separate
//! from frame composition so further strategies (e.g. fiducial-marker
//! scale) can be added without touching the composition logic.

use super::errors::BootstrapError;

/// Minimum initialization height. If `|height|` is at or below this
/// value, no initialization is performed.
pub const MIN_INITIALIZATION_HEIGHT: f64 = 0.01;

/// Derive the scale factor from a known height.
///
/// Returns `current_vertical_position / height`.
///
/// # Errors
///
/// - [`BootstrapError::NoMeasurementYet`] if no pose observation has been
///   received, regardless of the requested height.
/// - [`BootstrapError::HeightTooSmall`] if `|height|` is at or below
///   [`MIN_INITIALIZATION_HEIGHT`], to avoid the division blowing up.
pub fn resolve_from_height(
    height: f64,
    current_vertical_position: f64,
    has_measurement: bool,
) -> Result<f64, BootstrapError> {
    if !has_measurement {
        return Err(BootstrapError::NoMeasurementYet);
    }
    if height.abs() <= MIN_INITIALIZATION_HEIGHT {
        return Err(BootstrapError::HeightTooSmall {
            height,
            minimum: MIN_INITIALIZATION_HEIGHT,
        });
    }
    Ok(current_vertical_position / height)
}

/// Use a user-supplied scale as-is.
#[inline]
pub fn resolve_from_explicit(scale: f64) -> f64 {
    scale
}
