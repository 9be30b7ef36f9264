//! Angle-recovery driver: minimize a residual over `(pitch, roll)` from a
//! fixed zero start, then verify.
//!
//! The driver wires the residual to the minimizer, nothing more. The starting
//! guess is always `(0, 0)` — the expected true offset is small, so the zero
//! vector sits in the right local basin for every problem in scope.
//!
//! Non-convergence is deliberately not an error: if the minimizer stalls at a
//! poor local minimum (gimbal-lock-adjacent pitch, or a target that needs
//! nonzero yaw), its last iterate is still reported, and the misfit shows up
//! as a large [`Recovery::reconstruction_error`]. Callers decide what "too
//! large" means.

use anyhow::Result;
use tracing::debug;

use crate::minimize::Minimizer;
use crate::residual::{MatrixAlignment, Residual, VectorAlignment};
use crate::rotation::{Angles, RotationOrder};
use crate::Vector3;

/// Converged recovery, plus the verification pass.
#[derive(Debug, Clone)]
pub struct Recovery {
    /// Recovered angles (yaw fixed at zero).
    pub angles: Angles,
    /// Residual value the minimizer reported at convergence.
    pub residual: f64,
    /// Residual recomputed from scratch at the recovered angles — the
    /// reconstruction-error check. Equals `residual` up to the minimizer's
    /// own bookkeeping.
    pub reconstruction_error: f64,
    /// Minimizer iterations.
    pub iterations: u64,
}

/// Find the `(pitch, roll)` pair minimizing `residual`, starting from `(0, 0)`.
///
/// The parameter vector is `[pitch, roll]` throughout. After convergence the
/// parametrization is reapplied once and the residual re-evaluated as a
/// read-only reconstruction check; the recovered angles are not touched.
pub fn recover<R, M>(residual: &R, minimizer: &M) -> Result<Recovery>
where
    R: Residual,
    M: Minimizer + ?Sized,
{
    let objective = |x: &[f64]| residual.evaluate(Angles::new(x[0], x[1]));
    let out = minimizer.minimize(&objective, &[0.0, 0.0])?;

    let angles = Angles::new(out.x[0], out.x[1]);
    let reconstruction_error = residual.evaluate(angles);

    debug!(
        "recovered pitch {:.6} rad, roll {:.6} rad in {} iterations; \
         residual {:.3e}, reconstruction error {:.3e}",
        angles.pitch, angles.roll, out.iterations, out.cost, reconstruction_error,
    );

    Ok(Recovery {
        angles,
        residual: out.cost,
        reconstruction_error,
        iterations: out.iterations,
    })
}

// ── Recovery modes ──────────────────────────────────────────────────────────

/// Recover the `(pitch, roll)` rotation that best aligns `source` with
/// `target`. Both vectors are normalized before use.
pub fn align_vectors<M: Minimizer + ?Sized>(
    source: &Vector3,
    target: &Vector3,
    order: RotationOrder,
    minimizer: &M,
) -> Result<Recovery> {
    let problem = VectorAlignment::new(*source, *target, order);
    recover(&problem, minimizer)
}

/// Recover yaw-free angles whose rotation best approximates the **inverse**
/// of the rotation built from `original` (yaw 0).
///
/// The target is the transpose of the original matrix (`R⁻¹ = Rᵀ` for pure
/// rotations). An exact match only exists when that transpose lies in the
/// yaw-free family of `order`; otherwise the closest member is recovered and
/// the residual stays visibly nonzero.
pub fn invert_matrix<M: Minimizer + ?Sized>(
    original: Angles,
    order: RotationOrder,
    minimizer: &M,
) -> Result<Recovery> {
    let target = order.matrix(original).transpose();
    let problem = MatrixAlignment::new(target, order);
    recover(&problem, minimizer)
}

/// Rotate `v` by `applied`, then recover the angles that map the rotated
/// vector back onto `v`.
///
/// Returns the intermediate rotated vector alongside the recovery so callers
/// can report the full round trip. The recovered angles depend on `v`: they
/// invert the rotation's effect on this one vector, not the rotation itself.
pub fn invert_vector<M: Minimizer + ?Sized>(
    v: &Vector3,
    applied: Angles,
    order: RotationOrder,
    minimizer: &M,
) -> Result<(Vector3, Recovery)> {
    let rotated = order.rotate(applied, v);
    let problem = VectorAlignment::new(rotated, *v, order);
    let recovery = recover(&problem, minimizer)?;
    Ok((rotated, recovery))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::NelderMead;

    #[test]
    fn test_identity_alignment_converges_immediately() {
        // v1 == v2: the zero start is already the answer.
        let v = Vector3::new(0.37, -0.02, 0.92);
        let rec = align_vectors(&v, &v, RotationOrder::Zyx, &NelderMead::default()).unwrap();

        assert!(
            rec.angles.pitch.abs() < 1e-4 && rec.angles.roll.abs() < 1e-4,
            "expected ≈(0, 0), got ({}, {})",
            rec.angles.pitch,
            rec.angles.roll,
        );
        assert!(
            rec.reconstruction_error < 1e-9,
            "reconstruction error {:.3e}",
            rec.reconstruction_error,
        );
    }

    #[test]
    fn test_verification_matches_reported_residual() {
        let v1 = Vector3::new(0.0, 0.0, 1.0);
        let v2 = Vector3::new(0.05, -0.03, 1.0);
        let rec = align_vectors(&v1, &v2, RotationOrder::XY, &NelderMead::default()).unwrap();
        assert!(
            (rec.residual - rec.reconstruction_error).abs() < 1e-12,
            "minimizer cost {:.3e} vs re-evaluated {:.3e}",
            rec.residual,
            rec.reconstruction_error,
        );
    }
}
