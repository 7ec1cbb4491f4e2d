//! Diagnostic helpers for tests and headless runs.
//!
//! None of these are called from the per-tick passes; they exist so
//! examples and tests can watch a run without instrumenting the hot path.

use glam::Vec3;

use crate::particle::Particle;

/// Total kinetic energy: `1/2 * m * sum(|v|^2)`.
pub fn kinetic_energy(particles: &[Particle], particle_mass: f32) -> f32 {
    0.5 * particle_mass
        * particles
            .iter()
            .map(|p| p.velocity.length_squared())
            .sum::<f32>()
}

/// Maximum particle speed (for CFL checking).
pub fn max_velocity(particles: &[Particle]) -> f32 {
    particles
        .iter()
        .map(|p| p.velocity.length())
        .fold(0.0f32, f32::max)
}

/// CFL number `v_max * dt / h`; should stay well below 1 for stability.
pub fn cfl_number(particles: &[Particle], dt: f32, smoothing_length: f32) -> f32 {
    max_velocity(particles) * dt / smoothing_length
}

/// Unweighted centroid of all particle positions.
pub fn centroid(particles: &[Particle]) -> Vec3 {
    if particles.is_empty() {
        return Vec3::ZERO;
    }
    particles.iter().map(|p| p.position).sum::<Vec3>() / particles.len() as f32
}

/// Mean of a per-particle scalar field (densities, pressures).
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Maximum of a per-particle scalar field.
pub fn max(values: &[f32]) -> f32 {
    values.iter().copied().fold(0.0f32, f32::max)
}

/// Index of the first particle with a non-finite position or velocity,
/// if any. Logs a warning so long headless runs surface blow-ups early.
pub fn first_non_finite(particles: &[Particle]) -> Option<usize> {
    let bad = particles
        .iter()
        .position(|p| !p.position.is_finite() || !p.velocity.is_finite());
    if let Some(i) = bad {
        log::warn!(
            "particle {} went non-finite: position={:?} velocity={:?}",
            i,
            particles[i].position,
            particles[i].velocity
        );
    }
    bad
}
