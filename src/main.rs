//! Demo runner: the three recovery scenarios, reported to stdout.
//!
//! 1. Vector-to-vector alignment between two fixed directions.
//! 2. Matrix inversion: approximate the transpose of a known rotation with a
//!    yaw-free candidate.
//! 3. Vector round trip: rotate a vector, recover the angles that map it
//!    back, and check the reconstruction.
//!
//! Set `RUST_LOG=debug` (via the env filter) for per-run solver diagnostics.

use anyhow::Result;
use rotalign::{
    align_vectors, invert_matrix, invert_vector, Angles, NelderMead, RotationOrder, Vector3,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let minimizer = NelderMead::default();

    // ── 1. Vector-to-vector alignment ──
    let v1 = Vector3::new(0.37, -0.02, 0.92).normalize();
    let v2 = Vector3::new(0.33, 0.03, 1.0).normalize();
    let order = RotationOrder::XY;
    let rec = align_vectors(&v1, &v2, order, &minimizer)?;
    let rotated = order.rotate(rec.angles, &v1);

    println!("── Vector-to-vector alignment (order {:?}) ──", order);
    println!(
        "Pitch: {:.6} rad ({:.4}°), Roll: {:.6} rad ({:.4}°)",
        rec.angles.pitch,
        rec.angles.pitch_deg(),
        rec.angles.roll,
        rec.angles.roll_deg(),
    );
    println!("Rotated v1: [{:.6}, {:.6}, {:.6}]", rotated.x, rotated.y, rotated.z);
    println!("Target  v2: [{:.6}, {:.6}, {:.6}]", v2.x, v2.y, v2.z);
    println!("Residual:   {:.3e}", rec.reconstruction_error);

    // ── 2. Matrix-inversion recovery ──
    let original = Angles::new(0.3, 0.2); // pitch1, roll1; yaw fixed at 0
    let order = RotationOrder::Zyx;
    let rec = invert_matrix(original, order, &minimizer)?;

    println!("\n── Matrix-inversion recovery (order {:?}) ──", order);
    println!(
        "Original:  roll1 = {:.6}, pitch1 = {:.6}, yaw1 = 0.0",
        original.roll, original.pitch,
    );
    println!(
        "Recovered: roll2 = {:.6}, pitch2 = {:.6}, yaw2 = 0.0 (constrained)",
        rec.angles.roll, rec.angles.pitch,
    );
    println!("Frobenius residual: {:.3e}", rec.reconstruction_error);

    // ── 3. Vector round-trip inversion ──
    let v = Vector3::new(0.0, 0.0, 1.0);
    let applied = Angles::new(0.2, 0.1); // pitch1, roll1
    let (rotated, rec) = invert_vector(&v, applied, order, &minimizer)?;
    let reconstructed = order.rotate(rec.angles, &rotated);

    println!("\n── Vector round-trip inversion (order {:?}) ──", order);
    println!(
        "Applied roll1: {:.6} rad, pitch1: {:.6} rad",
        applied.roll, applied.pitch,
    );
    println!(
        "Inverse roll2: {:.6} rad, pitch2: {:.6} rad",
        rec.angles.roll, rec.angles.pitch,
    );
    println!(
        "Reconstructed: [{:.6}, {:.6}, {:.6}]",
        reconstructed.x, reconstructed.y, reconstructed.z,
    );
    println!("Reconstruction error: {:.6e}", (reconstructed - v).norm());

    Ok(())
}
