//! Force accumulation pass.
//!
//! For every particle, gather the Spiky pressure-gradient and viscosity
//! Laplacian contributions of all neighbors inside the smoothing radius,
//! then divide by the particle's own density to get an acceleration.
//!
//! Both per-pair terms divide by the *neighbor's* density. This is the
//! Müller-style asymmetric form: a pair's forces are not action-reaction
//! equal, but the aggregate is balanced under near-uniform density, and the
//! form is kept exactly because symmetrizing it changes the solver's
//! conservation behavior.
//!
//! Degenerate inputs (coincident particles, zero own-density) divide by
//! zero and poison the particle with inf/NaN. The debug build asserts on
//! both; release builds run the loop unguarded.

use glam::Vec3;
use rayon::prelude::*;

use crate::kernels;
use crate::params::SimulationParams;
use crate::particle::Particle;

/// Compute per-particle accelerations from positions, velocities,
/// densities and pressures (all read-only snapshots of this tick).
pub fn run_force_pass(
    params: &SimulationParams,
    particles: &[Particle],
    densities: &[f32],
    pressures: &[f32],
    accelerations: &mut [Vec3],
) {
    debug_assert_eq!(particles.len(), densities.len());
    debug_assert_eq!(particles.len(), pressures.len());
    debug_assert_eq!(particles.len(), accelerations.len());

    let h = params.smoothing_length();
    let h_sq = params.h_sq();
    let grad_coef = params.grad_pressure_coef();
    let lap_coef = params.lap_viscosity_coef();
    let viscosity = params.viscosity;

    accelerations.par_iter_mut().enumerate().for_each(|(i, accel)| {
        let pos_i = particles[i].position;
        let vel_i = particles[i].velocity;
        let pressure_i = pressures[i];

        let mut pressure_sum = Vec3::ZERO;
        let mut viscosity_sum = Vec3::ZERO;

        for j in 0..particles.len() {
            if j == i {
                continue;
            }
            let diff = particles[j].position - pos_i;
            let r_sq = diff.length_squared();
            if r_sq < h_sq {
                debug_assert!(
                    r_sq > 0.0,
                    "coincident particles {} and {} within smoothing radius",
                    i,
                    j
                );
                let r = r_sq.sqrt();
                pressure_sum += kernels::spiky_pressure_gradient(
                    diff,
                    r,
                    pressure_i,
                    pressures[j],
                    densities[j],
                    h,
                    grad_coef,
                );
                viscosity_sum += kernels::viscosity_laplacian(
                    r,
                    vel_i,
                    particles[j].velocity,
                    densities[j],
                    h,
                    lap_coef,
                );
            }
        }

        let density_i = densities[i];
        debug_assert!(
            density_i > 0.0 && density_i.is_finite(),
            "particle {} has degenerate density {}",
            i,
            density_i
        );
        *accel = (pressure_sum + viscosity_sum * viscosity) / density_i;
    });
}
