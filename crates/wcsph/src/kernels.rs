//! SPH smoothing kernel library.
//!
//! Poly6 for density, Spiky gradient for pressure forces, viscosity-kernel
//! Laplacian for momentum diffusion, and the Tait equation of state.
//! References: Müller et al. 2003, Becker & Teschner 2007.
//!
//! Normalization coefficients are precomputed once in
//! [`SimulationParams`](crate::params::SimulationParams) so the hot loops
//! never evaluate `powi`:
//!
//! - `density_coef       = mass * 315 / (64 * pi * h^9)`
//! - `grad_pressure_coef = mass * -45 / (pi * h^6)`
//! - `lap_viscosity_coef = mass *  45 / (pi * h^6)`
//!
//! Callers guard the kernel support (`r^2 < h^2`) before invoking; these
//! functions evaluate the polynomial without re-checking.

use glam::Vec3;

/// Poly6 density kernel: `coef * (h^2 - r^2)^3`.
///
/// Zero exactly at `r = h` by construction.
#[inline]
pub fn poly6(r_sq: f32, h_sq: f32, coef: f32) -> f32 {
    let d = h_sq - r_sq;
    coef * d * d * d
}

/// Tait equation of state: `stiffness * max((density/rest)^7 - 1, 0)`.
///
/// Weakly compressible: density above rest is penalized, rarefaction
/// (density below rest) is clamped to zero pressure instead of pulling
/// particles together.
#[inline]
pub fn tait_pressure(density: f32, rest_density: f32, stiffness: f32) -> f32 {
    let ratio = density / rest_density;
    stiffness * (ratio.powi(7) - 1.0).max(0.0)
}

/// Spiky-kernel pressure gradient contribution from one neighbor.
///
/// `diff` is neighbor-minus-self; `coef` is negative, so the returned
/// vector pushes the particle away from a higher-pressure neighbor.
/// The pair pressure is symmetrized as `0.5 * (p_i + p_j)` and divided
/// by the *neighbor's* density. Caller must ensure `0 < r < h`.
#[inline]
pub fn spiky_pressure_gradient(
    diff: Vec3,
    r: f32,
    pressure_i: f32,
    pressure_j: f32,
    density_j: f32,
    h: f32,
    coef: f32,
) -> Vec3 {
    let avg_pressure = 0.5 * (pressure_i + pressure_j);
    let d = h - r;
    diff * (coef * avg_pressure / density_j * d * d / r)
}

/// Viscosity-kernel Laplacian contribution from one neighbor:
/// `coef / density_j * (h - r) * (v_j - v_i)`.
///
/// Drives the particle's velocity toward the local neighborhood average.
#[inline]
pub fn viscosity_laplacian(
    r: f32,
    vel_i: Vec3,
    vel_j: Vec3,
    density_j: f32,
    h: f32,
    coef: f32,
) -> Vec3 {
    (vel_j - vel_i) * (coef / density_j * (h - r))
}
