//! Simulation module
//!
//! All gameplay logic lives here. The world state is advanced once per tick
//! by `tick::tick`, which owns the subsystem call order:
//! player steering -> NPC AI -> bullets -> spawner -> collision resolution.
//! No rendering or platform dependencies.

pub mod collision;
pub mod entity;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{check_collision, overlap, resolve_collisions};
pub use entity::{Bullet, Car, Npc, NpcKind, SpriteId};
pub use kinematics::{clamp, move_towards, rand_range, rand_val, sign};
pub use state::{Background, GameState, Player, SessionRng};
pub use tick::{TickInput, tick};
