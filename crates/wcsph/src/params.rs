//! Per-tick simulation parameters.
//!
//! One immutable block of scalars/vectors read by every pass during a tick.
//! The kernel normalization coefficients are derived from the smoothing
//! length and particle mass at construction (and on deserialization), never
//! in the per-pair hot path.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Read-only configuration for one simulation tick.
///
/// `smoothing_length` and `particle_mass` are fixed at construction because
/// the derived kernel coefficients depend on them; everything else is a
/// plain field the host may retune between ticks.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "RawParams", into = "RawParams")]
pub struct SimulationParams {
    smoothing_length: f32,
    particle_mass: f32,

    /// Rest density the equation of state relaxes toward.
    pub rest_density: f32,
    /// Tait EOS stiffness (higher = less compressible, stiffer system).
    pub pressure_stiffness: f32,
    /// Dynamic viscosity multiplier applied to the Laplacian sum.
    pub viscosity: f32,
    /// Penalty strength for the six domain walls.
    pub wall_stiffness: f32,
    /// Constant external acceleration.
    pub gravity: Vec3,
    /// Upper corner of the axis-aligned domain box (lower corner at origin).
    pub domain: Vec3,
    /// Pointer-repulsion center in world space.
    pub interaction_point: Vec3,
    /// Radius of the pointer-repulsion region.
    pub interaction_radius: f32,
    /// Whether the pointer force is applied this tick.
    pub interaction_active: bool,

    // Derived from smoothing_length/particle_mass; see kernels.rs.
    h_sq: f32,
    density_coef: f32,
    grad_pressure_coef: f32,
    lap_viscosity_coef: f32,
}

impl SimulationParams {
    /// Create parameters with the given smoothing length and particle mass;
    /// all other fields start from [`Default`] values.
    pub fn new(smoothing_length: f32, particle_mass: f32) -> Self {
        let raw = RawParams {
            smoothing_length,
            particle_mass,
            ..RawParams::default()
        };
        raw.into()
    }

    /// Smoothing length `h`: the kernel support radius.
    #[inline]
    pub fn smoothing_length(&self) -> f32 {
        self.smoothing_length
    }

    /// Per-particle mass baked into the kernel coefficients.
    #[inline]
    pub fn particle_mass(&self) -> f32 {
        self.particle_mass
    }

    /// `h^2`, the squared support radius used for neighbor culling.
    #[inline]
    pub fn h_sq(&self) -> f32 {
        self.h_sq
    }

    /// Poly6 normalization: `mass * 315 / (64 * pi * h^9)`.
    #[inline]
    pub fn density_coef(&self) -> f32 {
        self.density_coef
    }

    /// Spiky gradient normalization: `mass * -45 / (pi * h^6)`.
    #[inline]
    pub fn grad_pressure_coef(&self) -> f32 {
        self.grad_pressure_coef
    }

    /// Viscosity Laplacian normalization: `mass * 45 / (pi * h^6)`.
    #[inline]
    pub fn lap_viscosity_coef(&self) -> f32 {
        self.lap_viscosity_coef
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        RawParams::default().into()
    }
}

/// Serde-facing tunables; coefficients are recomputed on the way in so a
/// config file can never carry stale derived values.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawParams {
    smoothing_length: f32,
    particle_mass: f32,
    rest_density: f32,
    pressure_stiffness: f32,
    viscosity: f32,
    wall_stiffness: f32,
    #[serde(with = "crate::serde_utils::vec3")]
    gravity: Vec3,
    #[serde(with = "crate::serde_utils::vec3")]
    domain: Vec3,
    #[serde(with = "crate::serde_utils::vec3")]
    interaction_point: Vec3,
    interaction_radius: f32,
    interaction_active: bool,
}

impl Default for RawParams {
    fn default() -> Self {
        Self {
            smoothing_length: 0.1,
            // Rest mass for particles seeded at half-h spacing:
            // rest_density * (h/2)^3
            particle_mass: 0.125,
            rest_density: 1000.0,
            pressure_stiffness: 200.0,
            viscosity: 0.1,
            wall_stiffness: 3000.0,
            gravity: Vec3::new(0.0, -9.8, 0.0),
            domain: Vec3::ONE,
            interaction_point: Vec3::ZERO,
            interaction_radius: 0.1,
            interaction_active: false,
        }
    }
}

impl From<RawParams> for SimulationParams {
    fn from(raw: RawParams) -> Self {
        let h = raw.smoothing_length;
        let mass = raw.particle_mass;
        Self {
            smoothing_length: h,
            particle_mass: mass,
            rest_density: raw.rest_density,
            pressure_stiffness: raw.pressure_stiffness,
            viscosity: raw.viscosity,
            wall_stiffness: raw.wall_stiffness,
            gravity: raw.gravity,
            domain: raw.domain,
            interaction_point: raw.interaction_point,
            interaction_radius: raw.interaction_radius,
            interaction_active: raw.interaction_active,
            h_sq: h * h,
            density_coef: mass * 315.0 / (64.0 * PI * h.powi(9)),
            grad_pressure_coef: mass * -45.0 / (PI * h.powi(6)),
            lap_viscosity_coef: mass * 45.0 / (PI * h.powi(6)),
        }
    }
}

impl From<SimulationParams> for RawParams {
    fn from(params: SimulationParams) -> Self {
        Self {
            smoothing_length: params.smoothing_length,
            particle_mass: params.particle_mass,
            rest_density: params.rest_density,
            pressure_stiffness: params.pressure_stiffness,
            viscosity: params.viscosity,
            wall_stiffness: params.wall_stiffness,
            gravity: params.gravity,
            domain: params.domain,
            interaction_point: params.interaction_point,
            interaction_radius: params.interaction_radius,
            interaction_active: params.interaction_active,
        }
    }
}
