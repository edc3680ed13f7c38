//! Core data types shared across the bootstrap components.
//!
//! This module defines the per-channel pose state ([`PoseChannel`]), the
//! composed initial state handed to the filter ([`InitialStateVector`],
//! [`InitMeasurement`]) and the narrow view of the filter's corrected
//! state that the sanitizer is allowed to touch ([`CorrectedState`]).

pub mod channel;
pub mod state;

pub use channel::{AuxiliarySigmas, PoseChannel, PoseObservation, NUM_POSE_CHANNELS};
pub use state::{ChannelInitBlock, CorrectedState, InitMeasurement, InitialStateVector};
