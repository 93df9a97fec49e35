//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick (velocities are expressed in
//! pixels per tick) and advances the cosmetic crate rotation phase.

use hecs::World;

use sunblock_core::components::{AmmoCrate, Ship};
use sunblock_core::constants::AMMO_CRATE_SPIN_DEG;
use sunblock_core::types::{Position, Velocity};

/// Integrate motion for every entity with Position + Velocity.
/// The ship is excluded: its controller integrates and clamps in one step.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world
        .query_mut::<(&mut Position, &Velocity)>()
        .without::<&Ship>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
    }

    for (_entity, ammo_crate) in world.query_mut::<&mut AmmoCrate>() {
        ammo_crate.rotation_deg = (ammo_crate.rotation_deg + AMMO_CRATE_SPIN_DEG) % 360.0;
    }
}
