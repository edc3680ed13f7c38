//! Boundary traits between the bootstrap core and the filter.
//!
//! The filter's recursion is an external collaborator; this module pins
//! down the two seams it shares with the bootstrap core. [`FilterCore`]
//! is the entry point the core drives (initialization), and
//! [`BootstrapHooks`] is the capability interface the filter calls back
//! into at fixed points of its own cycle. The hooks replace inheritance
//! hooks with a strategy object: the core implements the trait once and
//! is injected into the filter at construction.
//!
//! # Concurrency
//!
//! All methods are bounded, synchronous computation; none blocks on I/O
//! and none has cancellation semantics. Exclusive access is expressed
//! through `&mut` borrows: the filter hands over its corrected-state
//! view mutably, so no concurrent step can observe a partial write.

use crate::types::{CorrectedState, InitMeasurement};

use super::noise::NoiseBlocks;

/// Initialization entry point of the external filter.
///
/// Handing over an [`InitMeasurement`] is a write-once operation per
/// initialization request; the filter must not run a predict or correct
/// step against the state buffer while it applies the payload.
pub trait FilterCore {
    /// Reset the filter onto the given initial state.
    fn init(&mut self, measurement: InitMeasurement);
}

/// Callbacks the filter invokes on the bootstrap core.
///
/// Implemented once by [`PoseSensorManager`](super::manager::PoseSensorManager)
/// and injected into the filter at construction.
pub trait BootstrapHooks {
    /// Called before the filter (re)initializes its state buffer.
    ///
    /// Prior to this call all states are zero/identity; the hook forces
    /// every channel scale to one so the state is usable even before an
    /// explicit initialization request arrives.
    fn reset_state(&self, state: &mut CorrectedState);

    /// Called after the filter applied an initial state. No additional
    /// adjustment is needed here.
    fn init_state(&self, _state: &mut CorrectedState) {}

    /// Called once per predict step per channel; returns the diagonal
    /// process-noise contribution of the channel's auxiliary states for
    /// the elapsed interval `dt`.
    ///
    /// `channel` must be a valid channel index.
    fn auxiliary_noise(&self, channel: usize, dt: f64) -> NoiseBlocks;

    /// Called after every correction; repairs invariants the generic
    /// update step cannot guarantee (non-negative scale).
    fn sanitize_correction(&mut self, state: &mut CorrectedState);
}
