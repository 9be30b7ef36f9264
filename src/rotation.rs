//! Euler-angle rotation parametrization with yaw fixed at zero.
//!
//! A `(pitch, roll)` pair maps to a 3×3 orthonormal rotation matrix under an
//! explicit axis-composition order. The order matters: Rx·Ry and Ry·Rx give
//! different — but each internally consistent — recovered angles for the same
//! alignment problem, so it is a named configuration choice rather than a
//! hard-coded formula.
//!
//! # Coordinate conventions
//!
//! - **Roll** rotates about the +X axis, **pitch** about +Y, **yaw** about +Z,
//!   all right-handed.
//! - Angles are radians, unconstrained (no wrap-around is enforced).
//!
//! Matrices are orthonormal by construction (composition of elementary
//! `Rotation3` axis rotations); orthonormality is a property of this module's
//! formulas, not an invariant enforced anywhere downstream.

use nalgebra::Rotation3;

use crate::{Matrix3, Vector3};

/// A `(pitch, roll)` angle pair in radians. Yaw is implicitly zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    /// Rotation about the +Y axis, radians.
    pub pitch: f64,
    /// Rotation about the +X axis, radians.
    pub roll: f64,
}

impl Angles {
    /// The zero rotation, also the fixed starting guess for every recovery.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f64, roll: f64) -> Self {
        Self { pitch, roll }
    }

    /// Pitch in degrees, for reporting.
    pub fn pitch_deg(&self) -> f64 {
        self.pitch.to_degrees()
    }

    /// Roll in degrees, for reporting.
    pub fn roll_deg(&self) -> f64 {
        self.roll.to_degrees()
    }
}

/// Axis-composition order for building the rotation matrix.
///
/// Matrices act on column vectors, so the rightmost factor is applied first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    /// `R = Rx(roll) · Ry(pitch) · Rz(yaw)` — pitch applied before roll.
    ///
    /// With yaw = 0 this expands to
    ///
    /// ```text
    ///         ⎡    cp      0      sp  ⎤
    ///     R = ⎢  sr·sp    cr   −sr·cp ⎥
    ///         ⎣ −cr·sp    sr    cr·cp ⎦
    /// ```
    XY,
    /// `R = Rz(yaw) · Ry(pitch) · Rx(roll)` — intrinsic Z-Y-X; roll applied
    /// first. With yaw = 0 this reduces to `Ry(pitch) · Rx(roll)`.
    #[default]
    Zyx,
}

impl RotationOrder {
    /// Rotation matrix for `(pitch, roll)` with yaw held at zero.
    ///
    /// Orthonormal by construction; never checked at runtime.
    pub fn matrix(self, angles: Angles) -> Matrix3 {
        self.matrix_with_yaw(angles, 0.0)
    }

    /// Full three-angle rotation matrix with yaw free.
    ///
    /// Recovery always fixes yaw at zero; this is the forward/verification
    /// helper for building targets from a complete angle triple.
    pub fn matrix_with_yaw(self, angles: Angles, yaw: f64) -> Matrix3 {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.roll);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.pitch);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), yaw);
        let r = match self {
            RotationOrder::XY => rx * ry * rz,
            RotationOrder::Zyx => rz * ry * rx,
        };
        *r.matrix()
    }

    /// Rotate a vector by `(pitch, roll)` with yaw held at zero.
    pub fn rotate(self, angles: Angles, v: &Vector3) -> Vector3 {
        self.matrix(angles) * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthonormal_by_construction() {
        let cases = [
            (0.0, 0.0),
            (0.1, 0.2),
            (-0.5, 0.3),
            (1.2, -0.9),
            (std::f64::consts::FRAC_PI_2, 0.4), // gimbal-lock-adjacent, still orthonormal
        ];
        for order in [RotationOrder::XY, RotationOrder::Zyx] {
            for &(pitch, roll) in &cases {
                let r = order.matrix(Angles::new(pitch, roll));
                let should_be_eye = r.transpose() * r;
                let err = (should_be_eye - Matrix3::identity()).norm();
                assert!(
                    err < 1e-14,
                    "{:?} RᵀR ≠ I for pitch={}, roll={}: err={:.3e}",
                    order,
                    pitch,
                    roll,
                    err,
                );
                let det = r.determinant();
                assert!(
                    (det - 1.0).abs() < 1e-14,
                    "{:?} det ≠ +1 for pitch={}, roll={}: det={}",
                    order,
                    pitch,
                    roll,
                    det,
                );
            }
        }
    }

    #[test]
    fn test_xy_known_values() {
        // Direct expansion of Rx(roll)·Ry(pitch).
        let pitch = 0.3_f64;
        let roll = -0.2_f64;
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();

        let expected = Matrix3::new(
            cp,
            0.0,
            sp,
            sr * sp,
            cr,
            -sr * cp,
            -cr * sp,
            sr,
            cr * cp,
        );
        let got = RotationOrder::XY.matrix(Angles::new(pitch, roll));
        assert!(
            (got - expected).norm() < 1e-14,
            "XY matrix mismatch:\n{}\nvs\n{}",
            got,
            expected,
        );
    }

    #[test]
    fn test_zyx_matches_nalgebra_euler() {
        // nalgebra's from_euler_angles(roll, pitch, yaw) is Rz·Ry·Rx.
        let angles = Angles::new(0.25, -0.4);
        let yaw = 0.15;
        let got = RotationOrder::Zyx.matrix_with_yaw(angles, yaw);
        let expected = *Rotation3::from_euler_angles(angles.roll, angles.pitch, yaw).matrix();
        assert!(
            (got - expected).norm() < 1e-14,
            "Zyx mismatch with nalgebra euler:\n{}\nvs\n{}",
            got,
            expected,
        );
    }

    #[test]
    fn test_orders_differ() {
        // The whole point of naming the order: same angles, different matrix.
        let angles = Angles::new(0.3, 0.2);
        let xy = RotationOrder::XY.matrix(angles);
        let zyx = RotationOrder::Zyx.matrix(angles);
        assert!(
            (xy - zyx).norm() > 1e-3,
            "orders unexpectedly agree for {:?}",
            angles,
        );
    }

    #[test]
    fn test_yaw_zero_is_default_matrix() {
        let angles = Angles::new(-0.7, 0.45);
        for order in [RotationOrder::XY, RotationOrder::Zyx] {
            let a = order.matrix(angles);
            let b = order.matrix_with_yaw(angles, 0.0);
            assert!((a - b).norm() < 1e-15);
        }
    }

    #[test]
    fn test_rotate_preserves_norm() {
        let v = Vector3::new(0.37, -0.02, 0.92).normalize();
        let rotated = RotationOrder::Zyx.rotate(Angles::new(0.2, 0.1), &v);
        assert!(
            (rotated.norm() - 1.0).abs() < 1e-14,
            "rotation changed the norm: {}",
            rotated.norm(),
        );
    }
}
