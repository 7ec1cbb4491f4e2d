//! Density estimation pass.
//!
//! For every particle, sum the Poly6 kernel over all other particles within
//! the smoothing radius. Brute-force all-pairs by design: every pair is
//! visited, so the result is independent of any spatial ordering. A particle
//! never contributes to its own density, so an isolated particle reports
//! exactly zero.

use rayon::prelude::*;

use crate::kernels;
use crate::params::SimulationParams;
use crate::particle::Particle;

/// Compute per-particle densities from a snapshot of positions.
///
/// Reads `particles`, writes one scalar per particle into `densities`.
/// Each output slot is owned by exactly one unit of work, so the pass is
/// deterministic regardless of how rayon schedules it.
pub fn run_density_pass(params: &SimulationParams, particles: &[Particle], densities: &mut [f32]) {
    debug_assert_eq!(particles.len(), densities.len());
    let h_sq = params.h_sq();
    let coef = params.density_coef();

    densities.par_iter_mut().enumerate().for_each(|(i, density)| {
        let pos_i = particles[i].position;
        let mut sum = 0.0;
        for (j, neighbor) in particles.iter().enumerate() {
            if j == i {
                continue;
            }
            let r_sq = (neighbor.position - pos_i).length_squared();
            if r_sq < h_sq {
                sum += kernels::poly6(r_sq, h_sq, coef);
            }
        }
        *density = sum;
    });
}
