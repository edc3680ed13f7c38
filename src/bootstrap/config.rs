//! Configuration push surface and extrinsic priors.
//!
//! [`PoseSensorConfig`] mirrors the external configuration snapshot: per
//! channel measurement sigmas and delays (the second channel carries a
//! `_2` suffix on the wire), one shared set of auxiliary-state sigmas,
//! and the one-shot initialization triggers. The whole snapshot is
//! replaced on every push; the triggers are drained into explicit
//! [`Command`] values so each fires exactly once instead of lingering as
//! boolean state.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::types::{AuxiliarySigmas, NUM_POSE_CHANNELS};

/// One-shot request extracted from a configuration push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Initialize the filter with an explicitly supplied scale.
    InitWithScale(f64),
    /// Initialize the filter from a known height.
    InitWithHeight(f64),
}

/// Configuration snapshot pushed by the control surface.
///
/// Field names match the external push surface one to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseSensorConfig {
    /// Channel 1 position measurement noise sigma.
    pub pose_noise_meas_p: f64,
    /// Channel 1 attitude measurement noise sigma.
    pub pose_noise_meas_q: f64,
    /// Channel 1 measurement delay in seconds.
    pub pose_delay: f64,

    /// Channel 2 position measurement noise sigma.
    pub pose_noise_meas_p_2: f64,
    /// Channel 2 attitude measurement noise sigma.
    pub pose_noise_meas_q_2: f64,
    /// Channel 2 measurement delay in seconds.
    pub pose_delay_2: f64,

    /// Scale random-walk sigma.
    pub pose_noise_scale: f64,
    /// World-vision attitude drift sigma.
    pub pose_noise_q_wv: f64,
    /// World-vision position drift sigma.
    pub pose_noise_p_wv: f64,
    /// Body-to-camera attitude calibration sigma.
    pub pose_noise_q_ic: f64,
    /// Body-to-camera position calibration sigma.
    pub pose_noise_p_ic: f64,

    /// Scale applied when `core_init_filter` fires.
    pub pose_initial_scale: f64,

    /// One-shot trigger: initialize with `pose_initial_scale`.
    pub core_init_filter: bool,
    /// One-shot trigger: initialize from `core_height`.
    pub core_set_height: bool,
    /// Target height for the `core_set_height` trigger.
    pub core_height: f64,
}

impl Default for PoseSensorConfig {
    fn default() -> Self {
        Self {
            pose_noise_meas_p: 0.0,
            pose_noise_meas_q: 0.0,
            pose_delay: 0.0,
            pose_noise_meas_p_2: 0.0,
            pose_noise_meas_q_2: 0.0,
            pose_delay_2: 0.0,
            pose_noise_scale: 0.0,
            pose_noise_q_wv: 0.0,
            pose_noise_p_wv: 0.0,
            pose_noise_q_ic: 0.0,
            pose_noise_p_ic: 0.0,
            pose_initial_scale: 1.0,
            core_init_filter: false,
            core_set_height: false,
            core_height: 1.0,
        }
    }
}

impl PoseSensorConfig {
    /// Measurement noise sigmas `(position, attitude)` for the given channel.
    pub fn measurement_noise(&self, channel: usize) -> (f64, f64) {
        match channel {
            0 => (self.pose_noise_meas_p, self.pose_noise_meas_q),
            _ => (self.pose_noise_meas_p_2, self.pose_noise_meas_q_2),
        }
    }

    /// Measurement delay for the given channel.
    pub fn delay(&self, channel: usize) -> f64 {
        match channel {
            0 => self.pose_delay,
            _ => self.pose_delay_2,
        }
    }

    /// Auxiliary-state sigmas shared by both channels.
    ///
    /// The push surface carries a single sigma set; channel 2's drift
    /// and extrinsic states reuse channel 1's configured values.
    pub fn auxiliary_sigmas(&self) -> AuxiliarySigmas {
        AuxiliarySigmas {
            scale: self.pose_noise_scale,
            drift_attitude: Vector3::repeat(self.pose_noise_q_wv),
            drift_position: Vector3::repeat(self.pose_noise_p_wv),
            extrinsic_attitude: Vector3::repeat(self.pose_noise_q_ic),
            extrinsic_position: Vector3::repeat(self.pose_noise_p_ic),
        }
    }

    /// Drain the one-shot triggers into explicit commands.
    ///
    /// Clears both flags; each returned command is to be honored exactly
    /// once. Order matches the push surface: explicit-scale init first,
    /// then height init.
    pub fn drain_triggers(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        if std::mem::take(&mut self.core_init_filter) {
            commands.push(Command::InitWithScale(self.pose_initial_scale));
        }
        if std::mem::take(&mut self.core_set_height) {
            commands.push(Command::InitWithHeight(self.core_height));
        }
        commands
    }
}

/// Fixed body-to-camera transform prior for one channel.
///
/// Raw components as configured; the attitude is normalized on read so a
/// hand-written prior does not have to be exactly unit-norm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrinsicPrior {
    /// Body-to-camera translation, `[x, y, z]`.
    pub position: [f64; 3],
    /// Body-to-camera rotation quaternion, `[w, x, y, z]`.
    pub attitude_wxyz: [f64; 4],
}

impl Default for ExtrinsicPrior {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            attitude_wxyz: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

impl ExtrinsicPrior {
    /// Translation prior as a vector.
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.position[0], self.position[1], self.position[2])
    }

    /// Rotation prior, normalized.
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        let [w, x, y, z] = self.attitude_wxyz;
        UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z))
    }
}

/// Extrinsic priors for all pose channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtrinsicsPriors {
    /// Per-channel priors, indexed by channel.
    pub channels: [ExtrinsicPrior; NUM_POSE_CHANNELS],
}
