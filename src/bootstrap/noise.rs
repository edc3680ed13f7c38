//! Process-noise scheduling for the auxiliary states.
//!
//! Each predict step, the filter asks for the discrete-time process
//! noise of every auxiliary state block (scale, world-vision drift,
//! body-camera extrinsics) per channel. Each block is the standard
//! discretization of a continuous white-noise process over the elapsed
//! interval: `dt * sigma ⊙ sigma` on the diagonal. The blocks are
//! recomputed every step and never persisted here; the filter copies
//! them into its covariance propagation.

use nalgebra::{Matrix1, Matrix3};

use crate::types::PoseChannel;

/// Diagonal process-noise contributions of one channel's auxiliary
/// states, valid for a single elapsed-time interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseBlocks {
    /// Scale random walk (1x1).
    pub scale: Matrix1<f64>,
    /// World-vision attitude drift (3x3 diagonal).
    pub drift_attitude: Matrix3<f64>,
    /// World-vision position drift (3x3 diagonal).
    pub drift_position: Matrix3<f64>,
    /// Body-to-camera attitude calibration (3x3 diagonal).
    pub extrinsic_attitude: Matrix3<f64>,
    /// Body-to-camera position calibration (3x3 diagonal).
    pub extrinsic_position: Matrix3<f64>,
}

/// Compute the auxiliary-state noise blocks for one channel.
///
/// Strictly linear in `dt`: doubling the interval doubles every block.
pub fn compute_auxiliary_noise(channel: &PoseChannel, dt: f64) -> NoiseBlocks {
    let sigmas = &channel.aux_sigmas;

    NoiseBlocks {
        scale: Matrix1::new(dt * sigmas.scale * sigmas.scale),
        drift_attitude: Matrix3::from_diagonal(
            &(sigmas.drift_attitude.component_mul(&sigmas.drift_attitude) * dt),
        ),
        drift_position: Matrix3::from_diagonal(
            &(sigmas.drift_position.component_mul(&sigmas.drift_position) * dt),
        ),
        extrinsic_attitude: Matrix3::from_diagonal(
            &(sigmas.extrinsic_attitude.component_mul(&sigmas.extrinsic_attitude) * dt),
        ),
        extrinsic_position: Matrix3::from_diagonal(
            &(sigmas.extrinsic_position.component_mul(&sigmas.extrinsic_position) * dt),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuxiliarySigmas;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn channel_with_sigmas() -> PoseChannel {
        let mut channel = PoseChannel::new();
        channel.set_auxiliary_sigmas(AuxiliarySigmas {
            scale: 0.1,
            drift_attitude: Vector3::new(0.01, 0.02, 0.03),
            drift_position: Vector3::repeat(0.05),
            extrinsic_attitude: Vector3::repeat(0.002),
            extrinsic_position: Vector3::repeat(0.004),
        });
        channel
    }

    #[test]
    fn test_blocks_are_squared_sigmas_times_dt() {
        let channel = channel_with_sigmas();
        let blocks = compute_auxiliary_noise(&channel, 0.5);

        assert_relative_eq!(blocks.scale[(0, 0)], 0.5 * 0.1 * 0.1);
        assert_relative_eq!(blocks.drift_attitude[(0, 0)], 0.5 * 0.01 * 0.01);
        assert_relative_eq!(blocks.drift_attitude[(1, 1)], 0.5 * 0.02 * 0.02);
        assert_relative_eq!(blocks.drift_attitude[(2, 2)], 0.5 * 0.03 * 0.03);
        assert_relative_eq!(blocks.drift_position[(1, 1)], 0.5 * 0.05 * 0.05);
        assert_relative_eq!(blocks.extrinsic_attitude[(2, 2)], 0.5 * 0.002 * 0.002);
        assert_relative_eq!(blocks.extrinsic_position[(0, 0)], 0.5 * 0.004 * 0.004);
    }

    #[test]
    fn test_blocks_are_diagonal() {
        let channel = channel_with_sigmas();
        let blocks = compute_auxiliary_noise(&channel, 1.0);

        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(blocks.drift_attitude[(i, j)], 0.0);
                    assert_eq!(blocks.drift_position[(i, j)], 0.0);
                    assert_eq!(blocks.extrinsic_attitude[(i, j)], 0.0);
                    assert_eq!(blocks.extrinsic_position[(i, j)], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_linear_in_dt() {
        let channel = channel_with_sigmas();
        for dt in [1e-3, 0.02, 0.1, 1.0] {
            let single = compute_auxiliary_noise(&channel, dt);
            let double = compute_auxiliary_noise(&channel, 2.0 * dt);

            assert_relative_eq!(double.scale[(0, 0)], 2.0 * single.scale[(0, 0)]);
            assert_relative_eq!(double.drift_attitude, single.drift_attitude * 2.0);
            assert_relative_eq!(double.drift_position, single.drift_position * 2.0);
            assert_relative_eq!(double.extrinsic_attitude, single.extrinsic_attitude * 2.0);
            assert_relative_eq!(double.extrinsic_position, single.extrinsic_position * 2.0);
        }
    }

    #[test]
    fn test_zero_dt_zeroes_every_block() {
        let channel = channel_with_sigmas();
        let blocks = compute_auxiliary_noise(&channel, 0.0);
        assert_eq!(blocks.scale[(0, 0)], 0.0);
        assert_eq!(blocks.drift_attitude, Matrix3::zeros());
    }
}
