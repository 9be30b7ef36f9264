//! # rotalign
//!
//! Recovery of a **constrained 3-D rotation** — yaw fixed at zero, pitch and
//! roll free — that best aligns one unit vector with another, or that inverts
//! a previously applied rotation.
//!
//! The recovery is numerical, not analytic: a candidate `(pitch, roll)` pair
//! is mapped to an orthonormal rotation matrix, a scalar residual measures how
//! far the candidate is from the goal, and a derivative-free minimizer drives
//! the residual down from a zero starting guess.
//!
//! ## Components
//!
//! - [`rotation`] — Euler-angle parametrization under an explicit
//!   [`RotationOrder`]. Swapping the axis-composition order changes the
//!   recovered angles for the same residual, so the order is a named choice
//!   rather than a hidden formula.
//! - [`residual`] — problem instances: vector-to-vector alignment
//!   (Euclidean distance of the rotated source to the target) and
//!   matrix alignment (Frobenius distance to a target rotation matrix).
//! - [`minimize`] — the black-box solver seam. The default implementation
//!   wraps [argmin](https://docs.rs/argmin)'s Nelder-Mead downhill simplex;
//!   any [`Minimizer`] substitutes without touching the driver.
//! - [`recover`] — the recovery driver: minimize from `(0, 0)`, then reapply
//!   the parametrization once more and report the residual as a
//!   reconstruction-error check.
//!
//! ## Example
//!
//! ```
//! use rotalign::{align_vectors, NelderMead, RotationOrder, Vector3};
//!
//! let v1 = Vector3::new(0.37, -0.02, 0.92);
//! let v2 = Vector3::new(0.33, 0.03, 1.0);
//!
//! let rec = align_vectors(&v1, &v2, RotationOrder::XY, &NelderMead::default()).unwrap();
//! println!(
//!     "pitch {:.4} rad, roll {:.4} rad, residual {:.2e}",
//!     rec.angles.pitch, rec.angles.roll, rec.reconstruction_error
//! );
//! assert!(rec.reconstruction_error < 1e-6);
//! ```
//!
//! ## Known limitation
//!
//! Near pitch = ±π/2 the composition is gimbal-lock-adjacent: roll and yaw
//! couple, solutions become non-unique or poorly conditioned, and the
//! minimizer may settle on any member of the degenerate family. This is
//! accepted and not detected; a poor fit shows up only as a large
//! reconstruction error.

pub mod minimize;
pub mod recover;
pub mod residual;
pub mod rotation;

pub use minimize::{MinimizeResult, Minimizer, NelderMead};
pub use recover::{align_vectors, invert_matrix, invert_vector, recover, Recovery};
pub use residual::{MatrixAlignment, Residual, VectorAlignment};
pub use rotation::{Angles, RotationOrder};

// Commonly used types.
// 64-bit floats throughout: the minimizer drives residuals to ~1e-8, past
// what f32 resolves.
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;
