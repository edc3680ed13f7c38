/*!
# Pose-filter bootstrap

Bootstraps a recursive pose-estimation filter from scale-ambiguous
external pose observations and schedules the process-noise covariance of
its auxiliary states (inter-frame drift, sensor extrinsics, global
scale). Two independently delayed pose-observation channels feed the
same filter.

## Features

- Scale resolution from an explicit value or a known physical height
- Initial-state composition across the world, vision, body/IMU and
  camera frames
- Per-channel, per-step process-noise scheduling for the auxiliary
  states
- Post-correction enforcement of the scale-positivity invariant
- A control surface receiving configuration pushes and one-shot
  initialization requests

## Modules

- [`bootstrap`] - Scale resolution, state composition, noise scheduling,
  sanitization and the control surface
- [`types`] - Pose channels, initial state vector, init payload
- [`common`] - Low-level utilities

## Example

```rust
use pose_filter_bootstrap::bootstrap::{
    ExtrinsicsPriors, FilterCore, PoseSensorManager,
};
use pose_filter_bootstrap::types::{InitMeasurement, PoseObservation};
use nalgebra::{UnitQuaternion, Vector3};

struct MyFilter {
    last_init: Option<InitMeasurement>,
}

impl FilterCore for MyFilter {
    fn init(&mut self, measurement: InitMeasurement) {
        self.last_init = Some(measurement);
    }
}

let filter = MyFilter { last_init: None };
let mut manager = PoseSensorManager::new(filter, ExtrinsicsPriors::default());

// Ingestion path delivers a pose observation on channel 1.
manager.record_observation(
    0,
    PoseObservation::new(Vector3::new(0.0, 0.0, 2.0), UnitQuaternion::identity()),
);

// Known height of one meter resolves the scale to 2.0.
let response = manager.initialize_with_height(1.0);
assert!(response.success);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Bootstrap components: scale resolution, initial-state composition,
/// noise scheduling, correction sanitization and the control surface.
pub mod bootstrap;

/// Low-level utilities (log throttling).
pub mod common;

/// Core data types: pose channels, state vectors, init payloads.
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use types::{
    AuxiliarySigmas, ChannelInitBlock, CorrectedState, InitMeasurement, InitialStateVector,
    PoseChannel, PoseObservation, NUM_POSE_CHANNELS,
};

// Errors
pub use bootstrap::BootstrapError;

// Traits
pub use bootstrap::{BootstrapHooks, FilterCore};

// Control surface
pub use bootstrap::{PoseSensorManager, ServiceResponse};

// Component entry points and constants
pub use bootstrap::{
    build_init_measurement, build_initial_state, compute_auxiliary_noise, resolve_from_explicit,
    resolve_from_height, sanitize_correction, NoiseBlocks, ERROR_STATE_DIM, GRAVITY,
    MIN_INITIALIZATION_HEIGHT, SCALE_RECOVERY_VALUE,
};

// Configuration
pub use bootstrap::{Command, ExtrinsicPrior, ExtrinsicsPriors, PoseSensorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
