//! Equation-of-state pass.
//!
//! Pure per-particle map from density to pressure via the Tait EOS. No
//! neighbor interaction, no shared state.

use rayon::prelude::*;

use crate::kernels;
use crate::params::SimulationParams;

/// Convert this tick's densities into pressures.
pub fn run_pressure_pass(params: &SimulationParams, densities: &[f32], pressures: &mut [f32]) {
    debug_assert_eq!(densities.len(), pressures.len());
    let rest_density = params.rest_density;
    let stiffness = params.pressure_stiffness;

    pressures
        .par_iter_mut()
        .zip(densities.par_iter())
        .for_each(|(pressure, &density)| {
            *pressure = kernels::tait_pressure(density, rest_density, stiffness);
        });
}
