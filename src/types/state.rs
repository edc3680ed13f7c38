//! Initial state vector and init-measurement types.
//!
//! [`InitialStateVector`] spans four reference frames: global/world (the
//! filter's navigation frame), the scale-ambiguous vision frame, the
//! body/IMU frame and the camera frame. The per-channel auxiliary blocks
//! (scale, world-vision drift, body-camera extrinsics) live in an indexed
//! array, one entry per pose channel.

use nalgebra::{DMatrix, UnitQuaternion, Vector3};

use super::channel::NUM_POSE_CHANNELS;

/// Auxiliary state block of one pose channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelInitBlock {
    /// Vision-to-metric scale factor, strictly positive.
    pub scale: f64,
    /// World-vision attitude drift.
    pub drift_attitude: UnitQuaternion<f64>,
    /// World-vision position drift.
    pub drift_position: Vector3<f64>,
    /// Body-to-camera rotation.
    pub extrinsic_attitude: UnitQuaternion<f64>,
    /// Body-to-camera translation.
    pub extrinsic_position: Vector3<f64>,
}

impl ChannelInitBlock {
    /// Identity drift, identity extrinsics, unit scale.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            drift_attitude: UnitQuaternion::identity(),
            drift_position: Vector3::zeros(),
            extrinsic_attitude: UnitQuaternion::identity(),
            extrinsic_position: Vector3::zeros(),
        }
    }
}

/// Fully composed initial filter state across all reference frames.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialStateVector {
    /// Body position in the world frame.
    pub position: Vector3<f64>,
    /// Body velocity in the world frame.
    pub velocity: Vector3<f64>,
    /// World-to-body attitude.
    pub attitude: UnitQuaternion<f64>,
    /// Gyroscope bias.
    pub gyro_bias: Vector3<f64>,
    /// Accelerometer bias.
    pub accel_bias: Vector3<f64>,
    /// Per-channel auxiliary blocks, indexed by channel.
    pub channels: [ChannelInitBlock; NUM_POSE_CHANNELS],
}

impl InitialStateVector {
    /// Zero kinematics with identity auxiliary blocks.
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            gyro_bias: Vector3::zeros(),
            accel_bias: Vector3::zeros(),
            channels: [ChannelInitBlock::identity(); NUM_POSE_CHANNELS],
        }
    }
}

/// Initialization payload handed to the filter's init entry point.
///
/// Contains the composed state vector, the inertial readings consistent
/// with it, a wall-clock timestamp and a covariance hint. An all-zero
/// covariance tells the filter to fall back to its own default initial
/// covariance instead of a caller-supplied one.
#[derive(Debug, Clone, PartialEq)]
pub struct InitMeasurement {
    /// The composed initial state.
    pub state: InitialStateVector,
    /// Initial angular velocity reading.
    pub angular_velocity: Vector3<f64>,
    /// Initial specific-force reading (gravity rotated into the body frame).
    pub linear_acceleration: Vector3<f64>,
    /// Wall-clock timestamp in seconds.
    pub timestamp: f64,
    /// Initial error-state covariance; all-zero selects the filter default.
    pub covariance: DMatrix<f64>,
}

impl InitMeasurement {
    /// Whether the covariance hint requests the filter's default covariance.
    pub fn uses_default_covariance(&self) -> bool {
        self.covariance.iter().all(|v| *v == 0.0)
    }
}

/// View of the filter's corrected state exposed to the bootstrap hooks.
///
/// The correction sanitizer only ever touches the per-channel scale
/// components, so the filter hands over exactly those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedState {
    /// Scale state of each channel after the correction was applied.
    pub scales: [f64; NUM_POSE_CHANNELS],
}

impl CorrectedState {
    /// Create a view over the given per-channel scales.
    pub fn new(scales: [f64; NUM_POSE_CHANNELS]) -> Self {
        Self { scales }
    }
}
