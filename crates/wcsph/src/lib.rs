//! Weakly compressible SPH fluid solver.
//!
//! Four data-parallel passes per tick over a fixed set of particles:
//! density estimation (Poly6), equation of state (Tait), force accumulation
//! (Spiky pressure gradient + viscosity Laplacian), and forward-Euler
//! integration with penalty walls and an optional pointer-repulsion force.
//!
//! Every pass reads one buffer generation and writes a distinct one; a pass
//! returning is the barrier that makes its output visible to the next pass,
//! and the particle buffers swap after integration so the next tick reads
//! what this tick wrote.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use wcsph::{FluidSimulation, SimulationParams};
//!
//! let mut sim = FluidSimulation::new(SimulationParams::default());
//! let spacing = 0.5 * sim.params.smoothing_length();
//!
//! // A small block of fluid near the floor of the unit box
//! sim.spawn_block(Vec3::splat(0.25), (4, 4, 4), spacing, 0.0);
//! assert_eq!(sim.particle_count(), 64);
//!
//! for _ in 0..3 {
//!     sim.step(1.0 / 240.0);
//! }
//! ```

pub mod density;
pub mod diagnostics;
pub mod forces;
pub mod integrate;
pub mod kernels;
pub mod params;
pub mod particle;
pub mod pressure;
pub mod serde_utils;

pub use density::run_density_pass;
pub use forces::run_force_pass;
pub use glam::Vec3;
pub use integrate::run_integrate_pass;
pub use params::SimulationParams;
pub use particle::{Particle, Particles};
pub use pressure::run_pressure_pass;

/// The four-pass SPH pipeline plus its double-buffered storage.
pub struct FluidSimulation {
    /// Per-tick configuration; retune between ticks, never during one.
    pub params: SimulationParams,
    /// Current particle generation (read side of the next tick).
    pub particles: Particles,

    // Write side of the integrate pass; swapped with `particles.list`
    // after each tick.
    back: Vec<Particle>,

    // Transient per-tick fields, index-aligned with the particles.
    densities: Vec<f32>,
    pressures: Vec<f32>,
    accelerations: Vec<Vec3>,

    /// Completed tick count.
    pub frame: u32,
}

impl FluidSimulation {
    /// Create an empty simulation with the given parameters.
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            particles: Particles::new(),
            back: Vec::new(),
            densities: Vec::new(),
            pressures: Vec::new(),
            accelerations: Vec::new(),
            frame: 0,
        }
    }

    /// Spawn a single particle.
    pub fn spawn(&mut self, position: Vec3, velocity: Vec3) {
        self.particles.spawn(position, velocity);
    }

    /// Spawn a lattice of stationary particles.
    ///
    /// `counts` particles per axis starting at `origin`, `spacing` apart,
    /// each jittered by up to `±jitter/2` per axis to break the perfect
    /// grid symmetry.
    pub fn spawn_block(
        &mut self,
        origin: Vec3,
        counts: (usize, usize, usize),
        spacing: f32,
        jitter: f32,
    ) {
        let (nx, ny, nz) = counts;
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let offset = Vec3::new(
                        (rand::random::<f32>() - 0.5) * jitter,
                        (rand::random::<f32>() - 0.5) * jitter,
                        (rand::random::<f32>() - 0.5) * jitter,
                    );
                    let pos =
                        origin + Vec3::new(i as f32, j as f32, k as f32) * spacing + offset;
                    self.particles.spawn_at(pos);
                }
            }
        }
        log::debug!(
            "spawned {}x{}x{} block, {} particles total",
            nx,
            ny,
            nz,
            self.particles.len()
        );
    }

    /// Enable the pointer-repulsion force for subsequent ticks.
    pub fn set_interaction(&mut self, point: Vec3, radius: f32) {
        self.params.interaction_point = point;
        self.params.interaction_radius = radius;
        self.params.interaction_active = true;
    }

    /// Disable the pointer-repulsion force.
    pub fn clear_interaction(&mut self) {
        self.params.interaction_active = false;
    }

    /// Total particle count.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// This tick's densities (recomputed every `step`).
    pub fn densities(&self) -> &[f32] {
        &self.densities
    }

    /// This tick's pressures.
    pub fn pressures(&self) -> &[f32] {
        &self.pressures
    }

    /// This tick's accelerations.
    pub fn accelerations(&self) -> &[Vec3] {
        &self.accelerations
    }

    /// Run one simulation tick: the four passes in order, then swap the
    /// particle buffers.
    pub fn step(&mut self, dt: f32) {
        debug_assert!(dt > 0.0 && dt.is_finite(), "invalid timestep: {}", dt);
        if self.particles.is_empty() || dt <= 0.0 || !dt.is_finite() {
            return;
        }

        self.sync_buffers();

        let current = &self.particles.list;
        density::run_density_pass(&self.params, current, &mut self.densities);
        pressure::run_pressure_pass(&self.params, &self.densities, &mut self.pressures);
        forces::run_force_pass(
            &self.params,
            current,
            &self.densities,
            &self.pressures,
            &mut self.accelerations,
        );
        integrate::run_integrate_pass(
            &self.params,
            dt,
            current,
            &self.accelerations,
            &mut self.back,
        );

        std::mem::swap(&mut self.particles.list, &mut self.back);
        self.frame = self.frame.wrapping_add(1);
    }

    /// Size the per-tick buffers to the particle count. Particles may be
    /// spawned between ticks; within a tick the count is fixed.
    fn sync_buffers(&mut self) {
        let len = self.particles.len();
        self.back.resize(len, Particle::default());
        self.densities.resize(len, 0.0);
        self.pressures.resize(len, 0.0);
        self.accelerations.resize(len, Vec3::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_starts_empty() {
        let sim = FluidSimulation::new(SimulationParams::default());
        assert_eq!(sim.particle_count(), 0);
        assert_eq!(sim.frame, 0);
    }

    #[test]
    fn test_step_on_empty_simulation_is_noop() {
        let mut sim = FluidSimulation::new(SimulationParams::default());
        sim.step(1.0 / 240.0);
        assert_eq!(sim.frame, 0);
    }

    #[test]
    fn test_spawn_block_count_and_bounds() {
        let mut sim = FluidSimulation::new(SimulationParams::default());
        sim.spawn_block(Vec3::splat(0.2), (3, 4, 5), 0.05, 0.0);
        assert_eq!(sim.particle_count(), 60);

        for p in sim.particles.iter() {
            assert!(p.position.cmpge(Vec3::splat(0.2)).all());
            assert!(p.position.cmple(Vec3::splat(0.45)).all());
            assert_eq!(p.velocity, Vec3::ZERO);
        }
    }

    #[test]
    fn test_block_falls_under_gravity() {
        let mut sim = FluidSimulation::new(SimulationParams::default());
        let spacing = 0.5 * sim.params.smoothing_length();
        sim.spawn_block(Vec3::new(0.3, 0.5, 0.3), (4, 4, 4), spacing, 0.0);

        let y_before = diagnostics::centroid(&sim.particles.list).y;
        for _ in 0..10 {
            sim.step(1.0 / 240.0);
        }
        let y_after = diagnostics::centroid(&sim.particles.list).y;

        assert_eq!(sim.frame, 10);
        assert!(y_after < y_before, "fluid should fall: {} -> {}", y_before, y_after);
        assert_eq!(diagnostics::first_non_finite(&sim.particles.list), None);
    }

    #[test]
    fn test_interaction_toggles() {
        let mut sim = FluidSimulation::new(SimulationParams::default());
        sim.set_interaction(Vec3::splat(0.5), 0.25);
        assert!(sim.params.interaction_active);
        assert_eq!(sim.params.interaction_radius, 0.25);
        sim.clear_interaction();
        assert!(!sim.params.interaction_active);
    }
}
