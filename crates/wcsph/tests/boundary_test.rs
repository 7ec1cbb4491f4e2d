//! Penalty-wall behavior of the integrate pass.

use glam::Vec3;
use wcsph::{run_integrate_pass, Particle, SimulationParams};

fn integrate_one(params: &SimulationParams, position: Vec3, dt: f32) -> Particle {
    let current = [Particle::at(position)];
    let mut next = [Particle::default()];
    run_integrate_pass(params, dt, &current, &[Vec3::ZERO], &mut next);
    next[0]
}

#[test]
fn outside_each_face_accelerates_strictly_inward() {
    let mut params = SimulationParams::default();
    params.gravity = Vec3::ZERO;
    params.domain = Vec3::ONE;

    let cases = [
        (Vec3::new(-0.05, 0.5, 0.5), Vec3::X),
        (Vec3::new(0.5, -0.05, 0.5), Vec3::Y),
        (Vec3::new(0.5, 0.5, -0.05), Vec3::Z),
        (Vec3::new(1.05, 0.5, 0.5), Vec3::NEG_X),
        (Vec3::new(0.5, 1.05, 0.5), Vec3::NEG_Y),
        (Vec3::new(0.5, 0.5, 1.05), Vec3::NEG_Z),
    ];

    for (position, inward) in cases {
        let next = integrate_one(&params, position, 0.01);
        let along = next.velocity.dot(inward);
        assert!(
            along > 0.0,
            "particle at {:?} should be pushed along {:?}, velocity {:?}",
            position,
            inward,
            next.velocity
        );
        // No sideways component from a single face violation
        assert!((next.velocity - inward * along).length() < 1e-6);
    }
}

#[test]
fn corner_violation_pushes_along_both_axes() {
    let mut params = SimulationParams::default();
    params.gravity = Vec3::ZERO;

    let next = integrate_one(&params, Vec3::new(-0.02, 1.03, 0.5), 0.01);
    assert!(next.velocity.x > 0.0);
    assert!(next.velocity.y < 0.0);
    assert_eq!(next.velocity.z, 0.0);
}

#[test]
fn walls_are_soft_not_clamping() {
    let mut params = SimulationParams::default();
    params.gravity = Vec3::ZERO;
    // A single gentle tick cannot teleport the particle back inside;
    // it only gains inward velocity.
    let dt = 1e-4;
    let start = Vec3::new(-0.05, 0.5, 0.5);
    let next = integrate_one(&params, start, dt);
    assert!(next.position.x < 0.0, "penalty is restoring, not a clamp");
    assert!(next.position.x > start.x);
}

#[test]
fn escaped_particle_is_recaptured_over_many_ticks() {
    let mut params = SimulationParams::default();
    params.gravity = Vec3::ZERO;

    let dt = 1.0 / 240.0;
    let mut current = [Particle::at(Vec3::new(-0.08, 0.5, 0.5))];
    let mut next = [Particle::default()];
    let mut recaptured = false;
    for _ in 0..200 {
        run_integrate_pass(&params, dt, &current, &[Vec3::ZERO], &mut next);
        current = next;
        if current[0].position.x > 0.0 {
            recaptured = true;
            break;
        }
    }
    assert!(recaptured, "wall penalty should pull the particle back inside");
}
