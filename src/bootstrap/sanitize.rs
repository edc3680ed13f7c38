//! Post-correction sanity enforcement.
//!
//! The filter's generic update step treats scale as an arbitrary state
//! component and can drive it negative. Scale is used downstream as a
//! divisor, so a negative or zero value would corrupt subsequent frame
//! compositions. The sanitizer clamps offending scales to a fixed
//! recovery value after every correction; the correction itself is never
//! rolled back.

use crate::common::Throttle;
use crate::types::CorrectedState;

/// Value a negative scale is reset to.
pub const SCALE_RECOVERY_VALUE: f64 = 0.1;

/// Repair negative scale states in place.
///
/// Each channel scale below zero is replaced with
/// [`SCALE_RECOVERY_VALUE`] and a rate-limited warning is emitted;
/// non-negative scales pass through unchanged. Idempotent.
pub fn sanitize_correction(state: &mut CorrectedState, throttle: &mut Throttle) {
    for (channel, scale) in state.scales.iter_mut().enumerate() {
        if *scale < 0.0 {
            if throttle.ready() {
                log::warn!(
                    "Negative scale detected on channel {}: {}. Correcting to {}",
                    channel,
                    scale,
                    SCALE_RECOVERY_VALUE
                );
            }
            *scale = SCALE_RECOVERY_VALUE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle() -> Throttle {
        Throttle::per_second()
    }

    #[test]
    fn test_negative_scale_is_clamped() {
        let mut state = CorrectedState::new([-0.5, 1.2]);
        sanitize_correction(&mut state, &mut throttle());
        assert_eq!(state.scales, [SCALE_RECOVERY_VALUE, 1.2]);
    }

    #[test]
    fn test_both_channels_repaired_independently() {
        let mut state = CorrectedState::new([-1.0, -1e-9]);
        sanitize_correction(&mut state, &mut throttle());
        assert_eq!(state.scales, [SCALE_RECOVERY_VALUE, SCALE_RECOVERY_VALUE]);
    }

    #[test]
    fn test_non_negative_scales_untouched() {
        // Zero is left alone: the clamp only targets negatives.
        let mut state = CorrectedState::new([0.0, 2.5]);
        sanitize_correction(&mut state, &mut throttle());
        assert_eq!(state.scales, [0.0, 2.5]);
    }

    #[test]
    fn test_idempotent() {
        let mut throttle = throttle();
        let mut state = CorrectedState::new([-3.0, 0.7]);
        sanitize_correction(&mut state, &mut throttle);
        let once = state;
        sanitize_correction(&mut state, &mut throttle);
        assert_eq!(state, once);
    }
}
