//! Time integration pass.
//!
//! Per particle, in order: pointer repulsion, six wall penalties, gravity,
//! then one forward-Euler step. Reads the current particle buffer and the
//! accelerations from the force pass; writes the *next* particle buffer, so
//! other particles' reads this tick are never disturbed.

use glam::Vec3;
use rayon::prelude::*;

use crate::params::SimulationParams;
use crate::particle::Particle;

/// Strength of the pointer push-back, same order as the wall penalty.
const INTERACTION_STIFFNESS: f32 = 3000.0;

/// Advance every particle by one time step into `next`.
///
/// The walls form a penalty boundary, not a clamp: a particle outside the
/// `[0, domain]` box gains inward acceleration proportional to its
/// penetration depth and is pulled back over the following ticks.
pub fn run_integrate_pass(
    params: &SimulationParams,
    dt: f32,
    current: &[Particle],
    accelerations: &[Vec3],
    next: &mut [Particle],
) {
    debug_assert_eq!(current.len(), accelerations.len());
    debug_assert_eq!(current.len(), next.len());

    let domain = params.domain;
    let wall_stiffness = params.wall_stiffness;
    let gravity = params.gravity;

    next.par_iter_mut().enumerate().for_each(|(i, out)| {
        let particle = current[i];
        let pos = particle.position;
        let mut accel = accelerations[i];

        // Pointer repulsion: soft radial push-back inside the interaction
        // sphere, scaled by penetration depth.
        if params.interaction_active {
            let offset = pos - params.interaction_point;
            let dist = offset.length();
            if dist < params.interaction_radius && dist > 0.0 {
                let penetration = params.interaction_radius - dist;
                accel += offset * (INTERACTION_STIFFNESS * penetration / dist);
            }
        }

        // Wall penalties: one half-space per box face, inward normal,
        // active only when the signed distance goes negative.
        let planes = [
            (Vec3::X, pos.x),
            (Vec3::Y, pos.y),
            (Vec3::Z, pos.z),
            (Vec3::NEG_X, domain.x - pos.x),
            (Vec3::NEG_Y, domain.y - pos.y),
            (Vec3::NEG_Z, domain.z - pos.z),
        ];
        for (normal, dist) in planes {
            accel += normal * (dist.min(0.0) * -wall_stiffness);
        }

        accel += gravity;

        // Forward Euler: velocity first, then position from the new velocity.
        let velocity = particle.velocity + accel * dt;
        let position = pos + velocity * dt;
        *out = Particle::new(position, velocity);
    });
}
