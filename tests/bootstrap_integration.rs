//! Integration tests for the pose-filter bootstrap core.
//!
//! Exercises the control surface end to end with a recording filter
//! stub: initialization requests, configuration pushes with one-shot
//! triggers, and the filter-facing hooks.

use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use pose_filter_bootstrap::bootstrap::{
    BootstrapHooks, ExtrinsicsPriors, FilterCore, PoseSensorManager, PoseSensorConfig,
};
use pose_filter_bootstrap::types::{CorrectedState, InitMeasurement, PoseObservation};
use pose_filter_bootstrap::SCALE_RECOVERY_VALUE;

/// Filter stub recording every init payload.
#[derive(Default)]
struct RecordingFilter {
    inits: Vec<InitMeasurement>,
}

impl FilterCore for RecordingFilter {
    fn init(&mut self, measurement: InitMeasurement) {
        self.inits.push(measurement);
    }
}

fn manager() -> PoseSensorManager<RecordingFilter> {
    PoseSensorManager::new(RecordingFilter::default(), ExtrinsicsPriors::default())
}

fn observe(manager: &mut PoseSensorManager<RecordingFilter>, position: Vector3<f64>) {
    manager.record_observation(
        0,
        PoseObservation::new(position, UnitQuaternion::identity()),
    );
}

/// Height init without any received measurement must be rejected.
#[test]
fn test_height_init_without_measurement_fails() {
    let mut manager = manager();

    let response = manager.initialize_with_height(1.0);

    assert!(!response.success);
    assert!(response.message.contains("No measurements received"));
    assert!(manager.filter().inits.is_empty());
}

/// Height 1.0 with an observed vertical position of 2.0 derives scale 2.
#[test]
fn test_height_init_derives_scale() {
    let mut manager = manager();
    observe(&mut manager, Vector3::new(0.0, 0.0, 2.0));

    let response = manager.initialize_with_height(1.0);

    assert!(response.success);
    assert!(response.message.contains("2"));

    let inits = &manager.filter().inits;
    assert_eq!(inits.len(), 1);
    let state = &inits[0].state;
    assert_relative_eq!(state.channels[0].scale, 2.0);
    assert_relative_eq!(state.channels[1].scale, 2.0);
    // Descaled vertical position lands in the world frame.
    assert_relative_eq!(state.position, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
}

/// Heights at or below the minimum are rejected with the threshold in
/// the message.
#[test]
fn test_height_init_below_threshold_fails() {
    let mut manager = manager();
    observe(&mut manager, Vector3::new(0.0, 0.0, 2.0));

    for height in [0.0, 0.005, 0.01] {
        let response = manager.initialize_with_height(height);
        assert!(!response.success, "height {} must be rejected", height);
        assert!(response.message.contains("0.01"));
    }
    assert!(manager.filter().inits.is_empty());
}

/// Scale init always succeeds and echoes the applied scale.
#[test]
fn test_scale_init_always_succeeds() {
    let mut manager = manager();

    let response = manager.initialize_with_scale(3.5);

    assert!(response.success);
    assert!(response.message.contains("3.5"));
    assert_eq!(manager.filter().inits.len(), 1);
    assert_relative_eq!(manager.filter().inits[0].state.channels[0].scale, 3.5);
}

/// Every initialization yields unit-norm quaternions and positive scales.
#[test]
fn test_initial_state_invariants() {
    let mut manager = manager();
    manager.record_observation(
        0,
        PoseObservation::new(
            Vector3::new(1.5, -0.5, 3.0),
            UnitQuaternion::from_euler_angles(0.4, -0.1, 0.9),
        ),
    );

    for scale in [0.1, 1.0, 7.5] {
        manager.initialize_with_scale(scale);
    }

    for init in &manager.filter().inits {
        let state = &init.state;
        assert_relative_eq!(state.attitude.norm(), 1.0, epsilon = 1e-12);
        for block in &state.channels {
            assert!(block.scale > 0.0);
            assert_relative_eq!(block.drift_attitude.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(block.extrinsic_attitude.norm(), 1.0, epsilon = 1e-12);
        }
        assert!(init.uses_default_covariance());
    }
}

/// A config push with the height trigger set initializes the filter and
/// clears the flag.
#[test]
fn test_config_push_height_trigger() {
    let mut manager = manager();
    observe(&mut manager, Vector3::new(0.0, 0.0, 4.0));

    manager.apply_config(PoseSensorConfig {
        core_set_height: true,
        core_height: 2.0,
        ..Default::default()
    });

    assert_eq!(manager.filter().inits.len(), 1);
    assert_relative_eq!(manager.filter().inits[0].state.channels[0].scale, 2.0);
    assert!(!manager.config().core_set_height);
}

/// Noise blocks served through the hook are linear in dt for both
/// channels.
#[test]
fn test_auxiliary_noise_hook_linear_in_dt() {
    let mut manager = manager();
    manager.apply_config(PoseSensorConfig {
        pose_noise_scale: 0.1,
        pose_noise_q_wv: 0.02,
        pose_noise_p_wv: 0.03,
        pose_noise_q_ic: 0.004,
        pose_noise_p_ic: 0.005,
        ..Default::default()
    });

    for channel in 0..2 {
        let dt = 0.02;
        let single = manager.auxiliary_noise(channel, dt);
        let double = manager.auxiliary_noise(channel, 2.0 * dt);

        assert_relative_eq!(double.scale[(0, 0)], 2.0 * single.scale[(0, 0)]);
        assert_relative_eq!(double.drift_attitude, single.drift_attitude * 2.0);
        assert_relative_eq!(double.drift_position, single.drift_position * 2.0);
        assert_relative_eq!(double.extrinsic_attitude, single.extrinsic_attitude * 2.0);
        assert_relative_eq!(double.extrinsic_position, single.extrinsic_position * 2.0);
    }
}

/// Both channels receive the same configured auxiliary sigma set.
#[test]
fn test_channels_share_auxiliary_sigmas() {
    let mut manager = manager();
    manager.apply_config(PoseSensorConfig {
        pose_noise_scale: 0.25,
        pose_noise_q_wv: 0.01,
        ..Default::default()
    });

    let first = manager.auxiliary_noise(0, 1.0);
    let second = manager.auxiliary_noise(1, 1.0);
    assert_eq!(first, second);
}

/// The sanitize hook clamps negative scales to the recovery value and is
/// idempotent.
#[test]
fn test_sanitize_hook_end_to_end() {
    let mut manager = manager();

    let mut state = CorrectedState::new([-0.2, 0.8]);
    manager.sanitize_correction(&mut state);
    assert_eq!(state.scales, [SCALE_RECOVERY_VALUE, 0.8]);

    let once = state;
    manager.sanitize_correction(&mut state);
    assert_eq!(state, once);
}

/// Reset forces unit scales regardless of prior content.
#[test]
fn test_reset_state_hook() {
    let manager = manager();
    let mut state = CorrectedState::new([0.0, -5.0]);
    manager.reset_state(&mut state);
    assert_eq!(state.scales, [1.0, 1.0]);
}
