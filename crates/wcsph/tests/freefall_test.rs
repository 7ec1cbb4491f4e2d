//! Forward-Euler integration against the closed-form free-fall solution.

use glam::Vec3;
use wcsph::{run_integrate_pass, Particle, SimulationParams};

#[test]
fn freefall_matches_explicit_euler_closed_form() {
    let mut params = SimulationParams::default();
    params.gravity = Vec3::new(0.0, -10.0, 0.0);
    // Domain large enough that no wall penalty ever engages
    params.domain = Vec3::splat(200.0);

    let dt = 0.25;
    let g = -10.0f32;
    let y0 = 100.0f32;

    let mut current = [Particle::at(Vec3::new(100.0, y0, 100.0))];
    let mut next = [Particle::default()];

    for k in 1..=10 {
        run_integrate_pass(&params, dt, &current, &[Vec3::ZERO], &mut next);
        current = next;

        // Explicit Euler: v_k = g*dt*k,  y_k = y0 + g*dt^2 * k*(k+1)/2
        let v_expected = g * dt * k as f32;
        let y_expected = y0 + g * dt * dt * (k * (k + 1) / 2) as f32;
        assert!(
            (current[0].velocity.y - v_expected).abs() < 1e-4,
            "step {}: v = {}, expected {}",
            k,
            current[0].velocity.y,
            v_expected
        );
        assert!(
            (current[0].position.y - y_expected).abs() < 1e-3,
            "step {}: y = {}, expected {}",
            k,
            current[0].position.y,
            y_expected
        );
        // x and z are untouched by a y-only gravity
        assert_eq!(current[0].position.x, 100.0);
        assert_eq!(current[0].position.z, 100.0);
    }
}

#[test]
fn velocity_then_position_ordering() {
    // One step from rest moves by dt * (a*dt), not zero: the velocity
    // update is applied before the position update.
    let mut params = SimulationParams::default();
    params.gravity = Vec3::new(0.0, -10.0, 0.0);
    params.domain = Vec3::splat(200.0);

    let dt = 0.5;
    let current = [Particle::at(Vec3::splat(100.0))];
    let mut next = [Particle::default()];
    run_integrate_pass(&params, dt, &current, &[Vec3::ZERO], &mut next);

    assert_eq!(next[0].velocity.y, -5.0);
    assert_eq!(next[0].position.y, 100.0 - 2.5);
}
