/*!
Bootstrap components for the pose-estimation filter.

This is the main module: scale resolution, initial-state composition
across reference frames, auxiliary-state process-noise scheduling,
post-correction sanitization, and the control surface tying them to the
external filter.
*/

pub mod config;
pub mod errors;
pub mod init;
pub mod manager;
pub mod noise;
pub mod sanitize;
pub mod scale;
pub mod traits;

pub use config::{Command, ExtrinsicPrior, ExtrinsicsPriors, PoseSensorConfig};
pub use errors::BootstrapError;
pub use init::{build_init_measurement, build_initial_state, ERROR_STATE_DIM, GRAVITY};
pub use manager::{PoseSensorManager, ServiceResponse};
pub use noise::{compute_auxiliary_noise, NoiseBlocks};
pub use sanitize::{sanitize_correction, SCALE_RECOVERY_VALUE};
pub use scale::{resolve_from_explicit, resolve_from_height, MIN_INITIALIZATION_HEIGHT};
pub use traits::{BootstrapHooks, FilterCore};
