//! Entity lifecycle: traffic spawner, despawn sweep and the bullet pool

use glam::Vec2;

use super::entity::{Npc, NpcKind};
use super::kinematics::{rand_range, rand_val};
use super::state::GameState;
use super::steering;
use crate::consts::*;

/// Half-extent proxy for the bullet hit test
const BULLET_WIDTH: f32 = 4.0;
const BULLET_HEIGHT: f32 = 8.0;

/// Add one NPC. A no-op at capacity: the request is dropped and logged,
/// nothing propagates to the frame loop.
pub fn create_npc(state: &mut GameState, kind: NpcKind, position: Vec2) -> bool {
    if state.npcs.len() >= MAX_NPCS {
        log::debug!("spawn rejected: traffic at capacity ({MAX_NPCS})");
        return false;
    }
    state.npcs.push(Npc::new(kind, position));
    true
}

/// Timer-gated spawn attempt.
///
/// Attempts are spaced `SPAWN_INTERVAL` apart; each fires with probability
/// `1 / max(population, 1)`, so a fuller road self-limits. Once at least
/// two vehicles exist, a new spawn has even odds of being a civilian.
pub fn try_spawn(state: &mut GameState, now: f64) {
    if now < state.next_spawn {
        return;
    }
    state.next_spawn = now + SPAWN_INTERVAL;

    let count = state.npcs.len();
    let rng = state.rng.as_mut();
    if rand_val(rng) >= 1.0 / count.max(1) as f32 {
        return;
    }

    let kind = if count >= 2 && rand_val(rng) < 0.5 {
        NpcKind::Civilian
    } else {
        NpcKind::Hostile
    };
    let x = rand_range(rng, ROAD_LEFT + CAR_WIDTH, ROAD_RIGHT - CAR_WIDTH);
    create_npc(state, kind, Vec2::new(x, NPC_SPAWN_Y));
}

/// Per-tick traffic sweep: AI update, then removal of cars that fell too
/// far behind, left the active range or finished their death animation.
///
/// Removal is a swap-remove and the index still advances afterwards, so the
/// car moved into the freed slot is not updated until the next tick. The
/// one-tick skip is intended; the spawn pacing is tuned around it.
pub fn update_npcs(state: &mut GameState, dt: f32, now: f64) {
    let mut i = 0;
    while i < state.npcs.len() {
        steering::update_npc(&mut state.npcs[i], &state.player, dt);

        let car = &state.npcs[i].car;
        let expired = car.death_anim_done(now);
        let gone = car.position.y >= NPC_DESPAWN_Y
            || (car.position.y - state.player.car.position.y).abs() > NPC_ACTIVE_DISTANCE;
        if expired || gone {
            log::debug!("npc {i} removed ({})", if expired { "wreck" } else { "off-screen" });
            state.npcs.swap_remove(i);
        }
        i += 1;
    }
}

/// Fire from the player's position, reusing the first inactive pool slot.
/// Dropped silently when the pool is exhausted; the cooldown timestamp is
/// only advanced on a successful shot.
pub fn fire_bullet(state: &mut GameState, now: f64) {
    if now < state.player.next_shot {
        return;
    }
    let origin = state.player.car.position;
    if let Some(bullet) = state.bullets.iter_mut().find(|b| !b.active) {
        bullet.position = origin;
        bullet.active = true;
        state.player.next_shot = now + SHOT_COOLDOWN;
    }
}

/// Advance active bullets upward and apply hits.
///
/// A bullet damages the first live NPC it overlaps in current array order
/// (arbitrary after swap-removes, not nearest-target), deals one point of
/// damage and deactivates; no penetration. Bullets also deactivate past
/// `BULLET_RANGE` from the player. A kill credits or penalizes the player
/// depending on the victim's type.
pub fn update_bullets(state: &mut GameState, dt: f32, now: f64) {
    let GameState {
        player,
        npcs,
        bullets,
        kills,
        ..
    } = state;

    for bullet in bullets.iter_mut() {
        if !bullet.active {
            continue;
        }
        bullet.position.y -= BULLET_SPEED * dt;

        if player.car.position.y - bullet.position.y > BULLET_RANGE {
            bullet.active = false;
            continue;
        }

        for npc in npcs.iter_mut() {
            if npc.car.is_dead() {
                continue;
            }
            let dx = (npc.car.position.x - bullet.position.x).abs();
            let dy = (npc.car.position.y - bullet.position.y).abs();
            if dx > (npc.car.size.x + BULLET_WIDTH) * 0.5
                || dy > (npc.car.size.y + BULLET_HEIGHT) * 0.5
            {
                continue;
            }

            npc.health -= 1;
            if npc.health <= 0 {
                npc.car.kill(now);
                if npc.kind == NpcKind::Hostile {
                    *kills += 1;
                }
                player.credit_kill(npc.kind, now);
            }
            bullet.active = false;
            break;
        }
    }
}
