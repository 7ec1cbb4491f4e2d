//! Exercises the pointer-repulsion force against a settled pile.
//!
//! Lets a block settle on the floor, then pushes a pointer into its left
//! flank and reports how far the fluid is shoved.
//!
//! Run with `--release`: the neighbor search is all-pairs O(N^2).

use glam::Vec3;
use wcsph::{diagnostics, FluidSimulation, SimulationParams};

fn main() {
    env_logger::init();

    let mut params = SimulationParams::default();
    params.viscosity = 0.4;
    let h = params.smoothing_length();
    let mut sim = FluidSimulation::new(params);

    let spacing = 0.45 * h;
    sim.spawn_block(Vec3::new(0.5 * spacing, 0.5 * spacing, 0.5 * spacing), (12, 8, 12), spacing, 0.0);

    let dt = 1.0 / 240.0;

    // Phase 1: settle
    for _ in 0..120 {
        sim.step(dt);
    }
    let before = diagnostics::centroid(&sim.particles.list);
    println!("settled centroid: {:?}", before);

    // Phase 2: push a pointer into the pile's left flank
    sim.set_interaction(Vec3::new(0.0, 0.1, 0.3), 2.0 * h);
    for frame in 0..60u32 {
        sim.step(dt);
        if diagnostics::first_non_finite(&sim.particles.list).is_some() {
            println!("!!! NON-FINITE STATE at frame {} !!!", frame);
            return;
        }
    }
    let pushed = diagnostics::centroid(&sim.particles.list);
    println!("pushed centroid:  {:?} (moved {:?})", pushed, pushed - before);

    // Phase 3: release and keep running
    sim.clear_interaction();
    for _ in 0..60 {
        sim.step(dt);
    }
    let released = diagnostics::centroid(&sim.particles.list);
    println!("released centroid: {:?}", released);

    if pushed.x <= before.x {
        println!("warning: pointer push did not displace the pile in +x");
    }
}
