//! Control surface dispatching into the bootstrap components.
//!
//! [`PoseSensorManager`] owns the two pose channels, the active
//! configuration snapshot and the filter handle. It receives
//! configuration pushes and the two initialization requests, resolves
//! the scale, composes the initial state and hands it to the filter's
//! init entry point. It also implements [`BootstrapHooks`], the
//! capability interface the filter calls during its own cycle.
//!
//! Ownership is arena-style: the manager holds the channel array by
//! value and every operation borrows it for the duration of the call,
//! so no mutable state is ever shared.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::Throttle;
use crate::types::{CorrectedState, PoseChannel, PoseObservation, NUM_POSE_CHANNELS};

use super::config::{Command, ExtrinsicsPriors, PoseSensorConfig};
use super::init::build_init_measurement;
use super::noise::{compute_auxiliary_noise, NoiseBlocks};
use super::sanitize::sanitize_correction;
use super::scale::{resolve_from_explicit, resolve_from_height};
use super::traits::{BootstrapHooks, FilterCore};

/// Outcome of a request/response operation on the control surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    /// Whether the request was honored.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

impl ServiceResponse {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// Control surface and hook implementation of the bootstrap core.
pub struct PoseSensorManager<F: FilterCore> {
    filter: F,
    channels: [PoseChannel; NUM_POSE_CHANNELS],
    config: PoseSensorConfig,
    extrinsics: ExtrinsicsPriors,
    warn_throttle: Throttle,
}

impl<F: FilterCore> PoseSensorManager<F> {
    /// Create a manager around the given filter handle and extrinsic
    /// priors. Channels start unconfigured and without observations.
    pub fn new(filter: F, extrinsics: ExtrinsicsPriors) -> Self {
        let mut channels: [PoseChannel; NUM_POSE_CHANNELS] =
            std::array::from_fn(|_| PoseChannel::new());
        for (channel, prior) in channels.iter_mut().zip(extrinsics.channels.iter()) {
            channel.extrinsic_position = prior.position();
            channel.extrinsic_attitude = prior.attitude();
        }

        Self {
            filter,
            channels,
            config: PoseSensorConfig::default(),
            extrinsics,
            warn_throttle: Throttle::per_second(),
        }
    }

    /// The wrapped filter handle.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// The pose channels, indexed.
    pub fn channels(&self) -> &[PoseChannel; NUM_POSE_CHANNELS] {
        &self.channels
    }

    /// The active configuration snapshot (triggers already cleared).
    pub fn config(&self) -> &PoseSensorConfig {
        &self.config
    }

    /// Ingestion path: overwrite a channel's observation snapshot.
    pub fn record_observation(&mut self, channel: usize, observation: PoseObservation) {
        self.channels[channel].record_observation(observation);
    }

    /// Apply a pushed configuration snapshot.
    ///
    /// Updates every channel's measurement sigmas, delay and auxiliary
    /// sigmas, then honors the one-shot triggers exactly once. The
    /// stored snapshot has the trigger flags cleared. A height trigger
    /// that cannot be resolved is logged and performs no state mutation.
    pub fn apply_config(&mut self, mut config: PoseSensorConfig) {
        // Both channels draw their auxiliary sigmas from the single
        // configured set; the push surface has no second set.
        let aux_sigmas = config.auxiliary_sigmas();
        for (index, channel) in self.channels.iter_mut().enumerate() {
            let (position_sigma, attitude_sigma) = config.measurement_noise(index);
            channel.set_measurement_noise(position_sigma, attitude_sigma);
            channel.set_delay(config.delay(index));
            channel.set_auxiliary_sigmas(aux_sigmas);
        }

        let commands = config.drain_triggers();
        self.config = config;

        for command in commands {
            match command {
                Command::InitWithScale(scale) => {
                    self.init_filter(resolve_from_explicit(scale));
                }
                Command::InitWithHeight(height) => match self.resolve_height(height) {
                    Ok(scale) => self.init_filter(scale),
                    Err(err) => log::warn!("{}", err),
                },
            }
        }
    }

    /// Initialize the filter with a user-supplied scale. Always succeeds.
    pub fn initialize_with_scale(&mut self, scale: f64) -> ServiceResponse {
        log::info!("Initialize filter with scale {}", scale);
        let scale = resolve_from_explicit(scale);
        self.init_filter(scale);
        ServiceResponse::ok(format!("Initialized scale {}", scale))
    }

    /// Initialize the filter from a known height.
    ///
    /// Fails without mutating any state if no observation has been
    /// received or the height is at or below the minimum.
    pub fn initialize_with_height(&mut self, height: f64) -> ServiceResponse {
        log::info!("Initialize filter with height {}", height);
        match self.resolve_height(height) {
            Ok(scale) => {
                self.init_filter(scale);
                ServiceResponse::ok(format!(
                    "Initialized by known height. Initial scale = {}",
                    scale
                ))
            }
            Err(err) => {
                log::warn!("{}", err);
                ServiceResponse::failed(err.to_string())
            }
        }
    }

    fn resolve_height(&self, height: f64) -> Result<f64, super::errors::BootstrapError> {
        // A position norm of exactly zero means the reference channel
        // has never been written by the ingestion path.
        let position = self.channels[0].latest_position();
        resolve_from_height(height, position.z, position.norm() != 0.0)
    }

    /// Compose the initial state for the resolved scale and hand it to
    /// the filter. Write-once per request: the filter applies the
    /// payload under the exclusive borrow taken here.
    fn init_filter(&mut self, scale: f64) {
        let reference = &self.channels[0];
        let position = reference.latest_position();
        let attitude = reference.latest_attitude();
        log::info!(
            "initial measurement pos: [{:.3} {:.3} {:.3}] orientation (wxyz): [{:.3} {:.3} {:.3} {:.3}]",
            position.x,
            position.y,
            position.z,
            attitude.w,
            attitude.i,
            attitude.j,
            attitude.k
        );
        if !reference.has_measurement() {
            log::warn!("No measurements received yet to initialize position - using [0 0 0]");
            log::warn!("No measurements received yet to initialize attitude - using [1 0 0 0]");
        }

        let measurement =
            build_init_measurement(scale, &self.channels, &self.extrinsics, wall_clock_seconds());
        self.filter.init(measurement);
    }
}

impl<F: FilterCore> BootstrapHooks for PoseSensorManager<F> {
    fn reset_state(&self, state: &mut CorrectedState) {
        for scale in &mut state.scales {
            *scale = 1.0;
        }
    }

    fn auxiliary_noise(&self, channel: usize, dt: f64) -> NoiseBlocks {
        compute_auxiliary_noise(&self.channels[channel], dt)
    }

    fn sanitize_correction(&mut self, state: &mut CorrectedState) {
        sanitize_correction(state, &mut self.warn_throttle);
    }
}

/// Wall-clock time in seconds, the timestamp convention of the init
/// payload.
fn wall_clock_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}
