//! Collision detection and response
//!
//! Axis-aligned overlap between car pairs, resolved on a single chosen axis
//! per contact: cars mostly side-by-side trade side speeds, cars stacked on
//! the road axis trade forward speeds. High-speed rear-end impacts are
//! fatal for the trailing car; low-speed nudges merely bounce.

use glam::Vec2;

use super::entity::{Car, Npc, NpcKind};
use super::kinematics::sign;
use super::state::GameState;
use crate::consts::*;

/// Per-axis overlap of two cars centered at their positions:
/// `(combined half widths - |dx|, combined half heights - |dy|)`.
/// Non-negative on both axes means the boxes touch. Symmetric in its
/// arguments.
pub fn overlap(a: &Car, b: &Car) -> Vec2 {
    Vec2::new(
        (a.size.x + b.size.x) * 0.5 - (a.position.x - b.position.x).abs(),
        (a.size.y + b.size.y) * 0.5 - (a.position.y - b.position.y).abs(),
    )
}

/// Detect and resolve a contact between two cars. Skipped entirely when
/// either car is already dead.
///
/// Axis selection: when the horizontal separation exceeds a quarter of the
/// combined widths the cars are side-by-side and the contact resolves
/// horizontally; otherwise vertically. On the chosen axis both cars are
/// pushed apart by half the overlap plus one unit, then their speeds are
/// exchanged scaled by `COLLISION_BOUNCE`.
///
/// A vertical contact with relative speed above `LETHAL_IMPACT_SPEED` kills
/// the car with the larger y (the one further down-world) before the swap.
pub fn check_collision(a: &mut Car, b: &mut Car, now: f64) {
    if a.is_dead() || b.is_dead() {
        return;
    }
    let overlap = overlap(a, b);
    if overlap.x < 0.0 || overlap.y < 0.0 {
        return;
    }

    let separation = (a.position.x - b.position.x).abs();
    if separation > (a.size.x + b.size.x) * 0.25 {
        let push = (overlap.x + 1.0) * 0.5 * sign(a.position.x - b.position.x);
        a.position.x += push;
        b.position.x -= push;

        let temp = a.speed.x * COLLISION_BOUNCE;
        a.speed.x = b.speed.x * COLLISION_BOUNCE;
        b.speed.x = temp;
    } else {
        if (a.speed.y - b.speed.y).abs() > LETHAL_IMPACT_SPEED {
            if a.position.y > b.position.y {
                a.kill(now);
            } else {
                b.kill(now);
            }
        }

        let push = (overlap.y + 1.0) * 0.5 * sign(a.position.y - b.position.y);
        a.position.y += push;
        b.position.y -= push;

        let temp = a.speed.y * COLLISION_BOUNCE;
        a.speed.y = b.speed.y * COLLISION_BOUNCE;
        b.speed.y = temp;
    }
}

fn pair_mut(npcs: &mut [Npc], i: usize, j: usize) -> (&mut Car, &mut Car) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = npcs.split_at_mut(j);
        (&mut left[i].car, &mut right[0].car)
    } else {
        let (left, right) = npcs.split_at_mut(i);
        (&mut right[0].car, &mut left[j].car)
    }
}

/// Test the player against every NPC and every NPC against every other.
/// The full i-by-j sweep is intentional: the population is at most
/// `MAX_NPCS`, and the visit order is part of the game's observed behavior.
///
/// An NPC that dies in its contact with the player is credited exactly
/// like a shot one (hostile bonus, civilian penalty). Traffic wrecking
/// itself is not attributed to anyone.
pub fn resolve_collisions(state: &mut GameState, now: f64) {
    let count = state.npcs.len();
    for i in 0..count {
        let was_dead = state.npcs[i].car.is_dead();
        check_collision(&mut state.player.car, &mut state.npcs[i].car, now);
        if !was_dead && state.npcs[i].car.is_dead() {
            let kind = state.npcs[i].kind;
            if kind == NpcKind::Hostile {
                state.kills += 1;
            }
            state.player.credit_kill(kind, now);
        }

        for j in 0..count {
            if i == j {
                continue;
            }
            let (a, b) = pair_mut(&mut state.npcs, i, j);
            check_collision(a, b, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{NpcKind, SpriteId};

    fn car_at(x: f32, y: f32) -> Car {
        Car::new(Vec2::new(x, y), SpriteId::EnemyCar)
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = car_at(100.0, 200.0);
        let b = car_at(110.0, 190.0);
        assert_eq!(overlap(&a, &b), overlap(&b, &a));
    }

    #[test]
    fn overlap_values() {
        let a = car_at(100.0, 100.0);
        let b = car_at(110.0, 100.0);
        // combined half widths 14, separation 10
        let ov = overlap(&a, &b);
        assert_eq!(ov.x, 4.0);
        assert_eq!(ov.y, 20.0);
    }

    #[test]
    fn horizontal_bounce_separates_and_swaps() {
        // side-by-side: separation 10 > combined widths / 4 = 7
        let mut a = car_at(100.0, 100.0);
        let mut b = car_at(110.0, 100.0);
        a.speed.x = 100.0;
        b.speed.x = -100.0;

        check_collision(&mut a, &mut b, 1.0);

        let ov = overlap(&a, &b);
        assert!(ov.x <= 0.0);
        assert_eq!(a.speed.x, -100.0 * COLLISION_BOUNCE);
        assert_eq!(b.speed.x, 100.0 * COLLISION_BOUNCE);
        assert!(!a.is_dead() && !b.is_dead());
    }

    #[test]
    fn lethal_vertical_impact_kills_trailing_car() {
        // stacked on the road axis: separation 0
        let mut a = car_at(200.0, 100.0);
        let mut b = car_at(200.0, 85.0);
        a.speed.y = -300.0;
        b.speed.y = -100.0; // relative speed 200 > 150

        check_collision(&mut a, &mut b, 3.0);

        assert!(a.is_dead()); // a has the larger y
        assert!(!b.is_dead());
        // velocities still exchanged after the kill
        assert_eq!(a.speed.y, -100.0 * COLLISION_BOUNCE);
        assert_eq!(b.speed.y, -300.0 * COLLISION_BOUNCE);
    }

    #[test]
    fn slow_vertical_impact_only_bounces() {
        let mut a = car_at(200.0, 100.0);
        let mut b = car_at(200.0, 85.0);
        a.speed.y = -200.0;
        b.speed.y = -100.0; // relative speed 100 < 150

        check_collision(&mut a, &mut b, 3.0);

        assert!(!a.is_dead() && !b.is_dead());
        assert!(overlap(&a, &b).y <= 0.0);
    }

    #[test]
    fn dead_cars_are_skipped() {
        let mut a = car_at(200.0, 100.0);
        let mut b = car_at(200.0, 95.0);
        a.kill(1.0);
        a.speed.y = -500.0;
        b.speed.y = -100.0;

        check_collision(&mut a, &mut b, 2.0);

        assert_eq!(a.speed.y, -500.0);
        assert_eq!(b.speed.y, -100.0);
    }

    #[test]
    fn hostile_killed_in_player_collision_is_credited() {
        let mut state = GameState::new(1);
        state.player.car.speed = Vec2::new(0.0, -400.0);
        // rear-ending hostile just behind the player, closing at 300
        let mut npc = Npc::new(NpcKind::Hostile, state.player.car.position + Vec2::new(0.0, 15.0));
        npc.car.speed = Vec2::new(0.0, -100.0);
        state.npcs.push(npc);

        resolve_collisions(&mut state, 4.0);

        assert!(state.npcs[0].car.is_dead());
        assert_eq!(state.kills, 1);
        assert_eq!(state.player.score, KILL_SCORE);
    }

    #[test]
    fn civilian_killed_in_player_collision_opens_penalty() {
        let mut state = GameState::new(1);
        state.player.car.speed = Vec2::new(0.0, -400.0);
        let mut npc =
            Npc::new(NpcKind::Civilian, state.player.car.position + Vec2::new(0.0, 15.0));
        npc.car.speed = Vec2::new(0.0, -100.0);
        state.npcs.push(npc);

        resolve_collisions(&mut state, 4.0);

        assert!(state.npcs[0].car.is_dead());
        assert_eq!(state.kills, 0);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.penalty_until, 4.0 + PENALTY_DURATION);
    }

    #[test]
    fn traffic_wrecking_itself_is_unattributed() {
        let mut state = GameState::new(1);
        // two hostiles stacked far from the player, lethal closure
        let mut front = Npc::new(NpcKind::Hostile, Vec2::new(200.0, 50.0));
        front.car.speed = Vec2::new(0.0, -400.0);
        let mut rear = Npc::new(NpcKind::Hostile, Vec2::new(200.0, 65.0));
        rear.car.speed = Vec2::new(0.0, -100.0);
        state.npcs.push(front);
        state.npcs.push(rear);

        resolve_collisions(&mut state, 4.0);

        assert!(state.npcs.iter().any(|npc| npc.car.is_dead()));
        assert_eq!(state.kills, 0);
        assert_eq!(state.player.score, 0);
    }

    #[test]
    fn resolve_covers_player_and_npc_pairs() {
        let mut state = GameState::new(1);
        let px = state.player.car.position;
        state.player.car.speed = Vec2::new(50.0, -400.0);

        // one NPC overlapping the player side-by-side, one far away
        let mut near = Npc::new(NpcKind::Hostile, px + Vec2::new(10.0, 0.0));
        near.car.speed = Vec2::new(-80.0, -400.0);
        state.npcs.push(near);
        state.npcs.push(Npc::new(NpcKind::Hostile, px + Vec2::new(0.0, -500.0)));

        resolve_collisions(&mut state, 1.0);

        assert_eq!(state.player.car.speed.x, -80.0 * COLLISION_BOUNCE);
        assert_eq!(state.npcs[0].car.speed.x, 50.0 * COLLISION_BOUNCE);
        // distant NPC untouched
        assert_eq!(state.npcs[1].car.speed.x, 0.0);
    }
}
