//! Initial state composition across reference frames.
//!
//! Given a resolved scale, this module composes a fully consistent
//! initial state vector spanning the world, vision, body/IMU and camera
//! frames, without re-deriving any part of the filter's recursion.
//! Channel 1 is the reference for the global pose; channel 2 only
//! contributes its own drift/extrinsic/scale block.
//!
//! The attitude chain runs camera -> vision -> world through the fixed
//! extrinsic calibration and the (initially identity) world-vision drift,
//! then inverts to express world -> body. The world-vision drift terms
//! are free auxiliary states: they default to identity/zero and are
//! never derived from the measurement itself.

use nalgebra::{DMatrix, UnitQuaternion, Vector3};

use crate::types::{
    ChannelInitBlock, InitMeasurement, InitialStateVector, PoseChannel, NUM_POSE_CHANNELS,
};

use super::config::ExtrinsicsPriors;

/// Gravity magnitude used to seed the initial specific-force reading.
pub const GRAVITY: f64 = 9.81;

/// Error-state dimension of the filter this core feeds: 15 core states
/// plus 13 auxiliary states per pose channel.
pub const ERROR_STATE_DIM: usize = 15 + 13 * NUM_POSE_CHANNELS;

/// Compose the initial state vector for the given resolved scale.
///
/// Both channels' scale fields are set to the same resolved value; the
/// second channel does not resolve its own scale at init time. All
/// quaternion fields are unit-norm on return.
pub fn build_initial_state(
    scale: f64,
    channels: &[PoseChannel; NUM_POSE_CHANNELS],
    extrinsics: &ExtrinsicsPriors,
) -> InitialStateVector {
    let reference = &channels[0];

    // Drift states are carried as free auxiliary states, not derived
    // from the measurement.
    let drift_attitude = UnitQuaternion::identity();
    let drift_position = Vector3::zeros();

    let observed_position = reference.latest_position();
    let observed_attitude = reference.latest_attitude();

    let reference_extrinsics = extrinsics.channels[0];
    let extrinsic_attitude = reference_extrinsics.attitude();
    let extrinsic_position = reference_extrinsics.position();

    // Without a reference observation only the drift term applies; with
    // one, compose camera -> vision -> world and invert.
    let attitude = if reference.has_measurement() {
        UnitQuaternion::new_normalize(
            (extrinsic_attitude * observed_attitude.inverse() * drift_attitude)
                .inverse()
                .into_inner(),
        )
    } else {
        drift_attitude
    };

    // Scaled vision-frame position rotated into world, corrected for the
    // body-to-camera offset.
    let position = drift_position + drift_attitude.inverse() * (observed_position / scale)
        - attitude * extrinsic_position;

    let mut blocks = [ChannelInitBlock::identity(); NUM_POSE_CHANNELS];
    for (channel, block) in blocks.iter_mut().enumerate() {
        let prior = extrinsics.channels[channel];
        block.scale = scale;
        block.drift_attitude = drift_attitude;
        block.drift_position = drift_position;
        block.extrinsic_attitude = prior.attitude();
        block.extrinsic_position = prior.position();
    }

    InitialStateVector {
        position,
        velocity: Vector3::zeros(),
        attitude,
        gyro_bias: Vector3::zeros(),
        accel_bias: Vector3::zeros(),
        channels: blocks,
    }
}

/// Compose the full initialization payload for the filter.
///
/// The angular-velocity reading starts at zero; the specific-force
/// reading is gravity rotated into the body frame, a consistency seed
/// for the accelerometer bias state. The covariance hint is all-zero,
/// telling the filter to use its own default initial covariance.
pub fn build_init_measurement(
    scale: f64,
    channels: &[PoseChannel; NUM_POSE_CHANNELS],
    extrinsics: &ExtrinsicsPriors,
    timestamp: f64,
) -> InitMeasurement {
    let state = build_initial_state(scale, channels, extrinsics);

    let gravity = Vector3::new(0.0, 0.0, GRAVITY);
    let linear_acceleration = state.attitude.inverse() * gravity;

    InitMeasurement {
        state,
        angular_velocity: Vector3::zeros(),
        linear_acceleration,
        timestamp,
        covariance: DMatrix::zeros(ERROR_STATE_DIM, ERROR_STATE_DIM),
    }
}
