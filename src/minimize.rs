//! Derivative-free minimization behind a small trait seam.
//!
//! The recovery driver only needs one capability: given an objective
//! `ℝⁿ → ℝ` and a starting point, return a nearby local minimum. [`Minimizer`]
//! captures exactly that contract so Nelder-Mead, Powell, or a coordinate
//! search can substitute for one another without touching the driver.
//!
//! The default implementation, [`NelderMead`], wraps argmin's downhill
//! simplex solver. No gradient is evaluated anywhere; the objective is a
//! black box.

use anyhow::{anyhow, Result};
use argmin::core::{CostFunction, Error, Executor, State};
use argmin::solver::neldermead::NelderMead as NelderMeadSolver;
use tracing::debug;

/// Outcome of a minimization run.
///
/// Produced even when the solver merely hit its iteration cap: the best
/// iterate seen so far is returned, and a poor fit shows up downstream as a
/// large residual rather than as an error.
#[derive(Debug, Clone)]
pub struct MinimizeResult {
    /// Best parameter vector found.
    pub x: Vec<f64>,
    /// Objective value at `x`.
    pub cost: f64,
    /// Iterations the solver performed.
    pub iterations: u64,
}

/// A general-purpose derivative-free multivariate minimizer.
///
/// Contract: given an objective and a starting point, return a point that is
/// a local minimum to within the implementation's internal tolerance, after a
/// bounded number of objective evaluations. There is no convergence guarantee
/// for non-convex objectives beyond "found a stationary point near the
/// start", and no failure signal for a poor local minimum — the last iterate
/// is still the answer.
///
/// Errors are reserved for solver infrastructure (e.g. invalid setup), not
/// for non-convergence.
pub trait Minimizer {
    fn minimize(&self, objective: &dyn Fn(&[f64]) -> f64, x0: &[f64]) -> Result<MinimizeResult>;
}

// ── Nelder-Mead (argmin) ────────────────────────────────────────────────────

/// Nelder-Mead downhill simplex via argmin.
///
/// The initial simplex is the starting point plus one vertex offset by
/// [`simplex_step`](Self::simplex_step) along each coordinate axis.
/// Termination: sample standard deviation of the vertex costs below
/// [`sd_tolerance`](Self::sd_tolerance), or the iteration cap.
#[derive(Debug, Clone)]
pub struct NelderMead {
    /// Axis offset used to build the initial simplex around the start point.
    /// Default 0.1 (radians, for the angle problems here).
    pub simplex_step: f64,
    /// Standard-deviation termination tolerance on the simplex cost values.
    /// Default 1e-12.
    pub sd_tolerance: f64,
    /// Maximum solver iterations. Default 500.
    pub max_iters: u64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            simplex_step: 0.1,
            sd_tolerance: 1e-12,
            max_iters: 500,
        }
    }
}

/// Adapter exposing a plain closure as an argmin cost function.
struct Objective<'a> {
    f: &'a dyn Fn(&[f64]) -> f64,
}

impl CostFunction for Objective<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.f)(p))
    }
}

impl Minimizer for NelderMead {
    fn minimize(&self, objective: &dyn Fn(&[f64]) -> f64, x0: &[f64]) -> Result<MinimizeResult> {
        // Start point plus one axis-offset vertex per coordinate.
        let mut simplex = vec![x0.to_vec()];
        for i in 0..x0.len() {
            let mut vertex = x0.to_vec();
            vertex[i] += self.simplex_step;
            simplex.push(vertex);
        }

        let solver = NelderMeadSolver::new(simplex).with_sd_tolerance(self.sd_tolerance)?;

        let res = Executor::new(Objective { f: objective }, solver)
            .configure(|state| state.max_iters(self.max_iters))
            .run()?;

        let x = res
            .state()
            .get_best_param()
            .cloned()
            .ok_or_else(|| anyhow!("Nelder-Mead returned no best parameter"))?;
        let cost = res.state().get_best_cost();
        let iterations = res.state().get_iter();

        debug!(
            "Nelder-Mead: {} iterations, best cost {:.3e} at {:?}",
            iterations, cost, x,
        );

        Ok(MinimizeResult {
            x,
            cost,
            iterations,
        })
    }
}
