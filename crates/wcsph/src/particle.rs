//! Fluid particles for the SPH solver.
//!
//! The particle layout is GPU-upload friendly: `#[repr(C)]` with explicit
//! padding after each 3-vector, 32 bytes total, so a rendering host can
//! hand the front buffer straight to `bytemuck::cast_slice`.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single fluid particle: position and velocity, each padded to 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// World position
    pub position: Vec3,
    _pad0: f32,
    /// Current velocity
    pub velocity: Vec3,
    _pad1: f32,
}

impl Particle {
    /// Create a new particle at the given position with initial velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            _pad0: 0.0,
            velocity,
            _pad1: 0.0,
        }
    }

    /// Create a stationary particle at the given position.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}

/// Collection of particles.
pub struct Particles {
    pub list: Vec<Particle>,
}

impl Particles {
    /// Create an empty particle collection.
    pub fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Create with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
        }
    }

    /// Add a particle with the given position and velocity.
    pub fn spawn(&mut self, position: Vec3, velocity: Vec3) {
        self.list.push(Particle::new(position, velocity));
    }

    /// Add a stationary particle.
    pub fn spawn_at(&mut self, position: Vec3) {
        self.list.push(Particle::at(position));
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Clear all particles.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.list.iter_mut()
    }
}

impl Default for Particles {
    fn default() -> Self {
        Self::new()
    }
}
