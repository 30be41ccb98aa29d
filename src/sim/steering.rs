//! Steering and traffic AI
//!
//! Velocity update rules for the player and both traffic types. All speed
//! changes go through `move_towards` and every forward speed is clamped to
//! its band after the update, never before.

use glam::Vec2;

use super::entity::{Car, Npc, NpcKind};
use super::kinematics::{clamp, move_towards, sign};
use super::state::Player;
use super::tick::TickInput;
use crate::consts::*;

/// Side-speed cap proportional to the current forward speed.
fn max_side_speed(forward_speed: f32, max_forward: f32, max_side: f32) -> f32 {
    (forward_speed / max_forward) * max_side
}

/// Input-driven player steering.
///
/// Forward intent perturbs the forward speed directly; side intent is
/// approached at a fixed rate toward the speed-scaled side cap, which also
/// decays side speed to zero when no intent is present. The car's y eases
/// toward its fixed screen anchor rather than following its velocity.
pub fn player_steering(player: &mut Player, input: &TickInput, dt: f32) {
    let mut steering = Vec2::ZERO;
    if input.up {
        steering.y -= 1.0;
    }
    if input.down {
        steering.y += 1.0;
    }
    if input.left {
        steering.x -= 1.0;
    }
    if input.right {
        steering.x += 1.0;
    }

    let car = &mut player.car;
    car.speed.y += steering.y * dt * PLAYER_ACCEL;
    car.speed.x = move_towards(
        car.speed.x,
        steering.x * max_side_speed(-car.speed.y, PLAYER_MAX_SPEED, PLAYER_MAX_SPEED_SIDES),
        dt * PLAYER_ACCEL_SIDES,
    );
    car.speed.y = clamp(car.speed.y, -PLAYER_MAX_SPEED, -PLAYER_MIN_SPEED);

    car.position.x += car.speed.x * dt;
    car.position.y = move_towards(car.position.y, PLAYER_Y_POS, dt * PLAYER_Y_EASE);
}

fn hostile_ai(car: &mut Car, player: &Player, dt: f32) {
    let gap = car.position.y - player.car.position.y;
    if gap.abs() < NPC_TARGET_DISTANCE {
        // match the player's speed, closing the residual gap, and steer
        // toward the player's x to push them off the road
        car.speed.y = move_towards(car.speed.y, player.car.speed.y - gap, dt * NPC_ACCEL);
        car.speed.x = move_towards(
            car.speed.x,
            sign(player.car.position.x - car.position.x)
                * max_side_speed(-car.speed.y, NPC_MAX_SPEED, NPC_MAX_SPEED_SIDES),
            dt * NPC_ACCEL_SIDES,
        );
    } else {
        // catch up or wait for the player
        if car.position.y < player.car.position.y {
            car.speed.y = move_towards(car.speed.y, -NPC_MIN_SPEED, dt * NPC_ACCEL);
        } else {
            car.speed.y = move_towards(car.speed.y, -NPC_MAX_SPEED, dt * NPC_ACCEL);
        }
        car.speed.x = move_towards(car.speed.x, 0.0, dt * NPC_ACCEL_SIDES);
    }
}

fn civilian_ai(car: &mut Car, dt: f32) {
    car.speed.y = move_towards(car.speed.y, -CIVILIAN_CRUISE_SPEED, dt * NPC_ACCEL);
    car.speed.x = move_towards(car.speed.x, 0.0, dt * NPC_ACCEL_SIDES);
}

/// Post-death drift: both axes decay toward zero under explosion friction.
pub fn apply_death_friction(car: &mut Car, dt: f32) {
    car.speed.x = move_towards(car.speed.x, 0.0, dt * EXPLOSION_FRICTION);
    car.speed.y = move_towards(car.speed.y, 0.0, dt * EXPLOSION_FRICTION);
}

/// Per-tick traffic update: AI (skipped while dead), band clamp, and
/// integration relative to the player's scroll speed.
pub fn update_npc(npc: &mut Npc, player: &Player, dt: f32) {
    if npc.car.is_dead() {
        apply_death_friction(&mut npc.car, dt);
    } else {
        match npc.kind {
            NpcKind::Hostile => hostile_ai(&mut npc.car, player, dt),
            NpcKind::Civilian => civilian_ai(&mut npc.car, dt),
        }
        npc.car.speed.y = clamp(npc.car.speed.y, -NPC_MAX_SPEED, -NPC_MIN_SPEED);
    }

    npc.car.position.x += npc.car.speed.x * dt;
    npc.car.position.y += (npc.car.speed.y - player.car.speed.y) * dt;
}
