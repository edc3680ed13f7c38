//! Per-channel pose sensor state.
//!
//! Two independently configured and independently delayed pose channels
//! feed the same filter. Both are instances of the same [`PoseChannel`]
//! type stored in an indexed array, so channel-specific logic indexes
//! into `channels[i]` instead of duplicating named fields.

use nalgebra::{UnitQuaternion, Vector3};

/// Number of pose observation channels feeding the filter.
pub const NUM_POSE_CHANNELS: usize = 2;

/// A single pose observation as delivered by the ingestion path.
///
/// Position is expressed in the (scale-ambiguous) vision frame, attitude
/// as the camera-to-vision rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseObservation {
    /// Observed position in the vision frame.
    pub position: Vector3<f64>,
    /// Observed attitude (camera with respect to vision frame).
    pub attitude: UnitQuaternion<f64>,
}

impl PoseObservation {
    /// Create a new observation.
    pub fn new(position: Vector3<f64>, attitude: UnitQuaternion<f64>) -> Self {
        Self { position, attitude }
    }
}

impl Default for PoseObservation {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
        }
    }
}

/// Standard deviations of the auxiliary-state random walks.
///
/// One sigma per auxiliary state block: scale (scalar), world-drift
/// attitude/position and extrinsic attitude/position (three components
/// each). The noise scheduler squares these component-wise and scales by
/// the elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxiliarySigmas {
    /// Scale random-walk sigma.
    pub scale: f64,
    /// World-vision attitude drift sigma.
    pub drift_attitude: Vector3<f64>,
    /// World-vision position drift sigma.
    pub drift_position: Vector3<f64>,
    /// Body-to-camera attitude calibration sigma.
    pub extrinsic_attitude: Vector3<f64>,
    /// Body-to-camera position calibration sigma.
    pub extrinsic_position: Vector3<f64>,
}

impl Default for AuxiliarySigmas {
    fn default() -> Self {
        Self {
            scale: 0.0,
            drift_attitude: Vector3::zeros(),
            drift_position: Vector3::zeros(),
            extrinsic_attitude: Vector3::zeros(),
            extrinsic_position: Vector3::zeros(),
        }
    }
}

/// Configuration and latest observation of one pose channel.
///
/// The ingestion path overwrites the observation snapshot wholesale via
/// [`PoseChannel::record_observation`]; readers take the whole snapshot
/// through the accessors, so a consistent position/attitude pair is
/// always observed.
#[derive(Debug, Clone)]
pub struct PoseChannel {
    /// Position measurement noise sigma, one component per axis.
    pub noise_position: Vector3<f64>,
    /// Attitude measurement noise sigma, one component per axis.
    pub noise_attitude: Vector3<f64>,
    /// Scale measurement noise sigma.
    pub noise_scale: f64,
    /// Measurement delay in seconds relative to the inertial stream.
    pub delay: f64,
    /// Auxiliary-state random-walk sigmas used by the noise scheduler.
    pub aux_sigmas: AuxiliarySigmas,
    /// Fixed body-to-camera translation prior.
    pub extrinsic_position: Vector3<f64>,
    /// Fixed body-to-camera rotation prior.
    pub extrinsic_attitude: UnitQuaternion<f64>,
    latest: PoseObservation,
    has_measurement: bool,
}

impl PoseChannel {
    /// Create a channel with zero noise, zero delay and identity extrinsics.
    pub fn new() -> Self {
        Self {
            noise_position: Vector3::zeros(),
            noise_attitude: Vector3::zeros(),
            noise_scale: 0.0,
            delay: 0.0,
            aux_sigmas: AuxiliarySigmas::default(),
            extrinsic_position: Vector3::zeros(),
            extrinsic_attitude: UnitQuaternion::identity(),
            latest: PoseObservation::default(),
            has_measurement: false,
        }
    }

    /// Overwrite the latest observation snapshot.
    ///
    /// Marks the channel as having received a measurement; the flag is
    /// never cleared afterwards.
    pub fn record_observation(&mut self, observation: PoseObservation) {
        self.latest = observation;
        self.has_measurement = true;
    }

    /// Latest observed position (zero vector until the first observation).
    #[inline]
    pub fn latest_position(&self) -> Vector3<f64> {
        self.latest.position
    }

    /// Latest observed attitude (identity until the first observation).
    #[inline]
    pub fn latest_attitude(&self) -> UnitQuaternion<f64> {
        self.latest.attitude
    }

    /// Whether at least one observation has been received.
    #[inline]
    pub fn has_measurement(&self) -> bool {
        self.has_measurement
    }

    /// Set the measurement noise sigmas from scalar per-axis values.
    pub fn set_measurement_noise(&mut self, position_sigma: f64, attitude_sigma: f64) {
        self.noise_position = Vector3::repeat(position_sigma);
        self.noise_attitude = Vector3::repeat(attitude_sigma);
    }

    /// Set the measurement delay in seconds.
    pub fn set_delay(&mut self, delay: f64) {
        self.delay = delay;
    }

    /// Set the auxiliary-state random-walk sigmas.
    pub fn set_auxiliary_sigmas(&mut self, sigmas: AuxiliarySigmas) {
        self.aux_sigmas = sigmas;
    }
}

impl Default for PoseChannel {
    fn default() -> Self {
        Self::new()
    }
}
