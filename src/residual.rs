//! Residual evaluators: scalar discrepancy between a candidate rotation and
//! the recovery goal.
//!
//! A problem instance closes over its fixed data (a vector pair, or a target
//! matrix) at construction and is immutable afterwards. Evaluation is pure:
//! the same `(pitch, roll)` always yields the same non-negative scalar, and a
//! value of zero means the goal is met exactly.
//!
//! Both residuals are continuous and differentiable almost everywhere, which
//! is all the derivative-free minimizer needs. No gradients are supplied.

use crate::rotation::{Angles, RotationOrder};
use crate::{Matrix3, Vector3};

/// Scalar discrepancy for a candidate `(pitch, roll)` pair.
pub trait Residual {
    /// Non-negative discrepancy at `angles`. Zero means the goal is met.
    fn evaluate(&self, angles: Angles) -> f64;
}

// ── Vector-to-vector alignment ──────────────────────────────────────────────

/// Align a source direction with a target direction.
///
/// Residual: `‖R(pitch, roll) · source − target‖₂`. Zero iff the candidate
/// rotation maps the source exactly onto the target — which does not pin a
/// unique `(pitch, roll)` pair when the two directions do not (e.g. collinear
/// vectors).
#[derive(Debug, Clone)]
pub struct VectorAlignment {
    source: Vector3,
    target: Vector3,
    order: RotationOrder,
}

impl VectorAlignment {
    /// Create an alignment problem; both vectors are normalized to unit length.
    ///
    /// Zero-magnitude or non-finite input is not rejected: normalization then
    /// produces NaN components and every subsequent residual is NaN. Supplying
    /// finite, nonzero vectors is the caller's responsibility.
    pub fn new(source: Vector3, target: Vector3, order: RotationOrder) -> Self {
        Self {
            source: source.normalize(),
            target: target.normalize(),
            order,
        }
    }

    /// The normalized source direction.
    pub fn source(&self) -> &Vector3 {
        &self.source
    }

    /// The normalized target direction.
    pub fn target(&self) -> &Vector3 {
        &self.target
    }

    /// The axis-composition order used for candidates.
    pub fn order(&self) -> RotationOrder {
        self.order
    }
}

impl Residual for VectorAlignment {
    fn evaluate(&self, angles: Angles) -> f64 {
        (self.order.rotate(angles, &self.source) - self.target).norm()
    }
}

// ── Matrix alignment ────────────────────────────────────────────────────────

/// Match a fixed target rotation matrix.
///
/// Residual: Frobenius distance `‖R(pitch, roll) − target‖_F`. Zero iff the
/// matrices are identical — in particular, only reachable when the target
/// itself lies in the yaw-free family of the chosen order. Targets outside
/// that family (e.g. transposes of the other order's matrices) converge to the
/// closest representable rotation instead, with a visibly nonzero residual.
#[derive(Debug, Clone)]
pub struct MatrixAlignment {
    target: Matrix3,
    order: RotationOrder,
}

impl MatrixAlignment {
    /// Create a matrix-match problem. The target is assumed orthonormal
    /// (never checked); a non-rotation target just yields a large residual.
    pub fn new(target: Matrix3, order: RotationOrder) -> Self {
        Self { target, order }
    }

    /// The fixed target matrix.
    pub fn target(&self) -> &Matrix3 {
        &self.target
    }

    /// The axis-composition order used for candidates.
    pub fn order(&self) -> RotationOrder {
        self.order
    }
}

impl Residual for MatrixAlignment {
    fn evaluate(&self, angles: Angles) -> f64 {
        (self.order.matrix(angles) - self.target).norm()
    }
}
