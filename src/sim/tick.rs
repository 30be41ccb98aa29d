//! Per-frame orchestrator
//!
//! Advances the world by one tick in a fixed subsystem order:
//! player (steering, shooting, scoring, death machine) -> traffic AI ->
//! bullets -> spawner -> collision resolution.

use super::collision;
use super::spawn;
use super::state::GameState;
use super::steering;
use crate::consts::*;

/// Input snapshot for a single tick.
///
/// Edge-triggered fields (`pause`, `new_game`, `save_score`) must be
/// cleared by the caller after each frame; the simulation treats the whole
/// snapshot as immutable for the tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub pause: bool,
    pub new_game: bool,
    pub save_score: bool,
    pub quit: bool,
    pub show_debug: bool,
}

impl TickInput {
    /// Drop the edge-triggered fields after a frame has consumed them;
    /// held keys stay latched.
    pub fn clear_edges(&mut self) {
        self.pause = false;
        self.new_game = false;
        self.save_score = false;
    }
}

/// Advance the game state by one tick of `dt` seconds.
///
/// Pausing freezes the simulation clock; the caller keeps polling input
/// and rendering. After game over only `new_game` has any effect.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.paused = !state.paused;
    }
    if input.new_game && state.is_game_over() {
        state.restart();
    }
    if state.paused || state.is_game_over() {
        return;
    }

    state.time += dt as f64;
    let now = state.time;

    update_player(state, input, dt, now);
    spawn::update_npcs(state, dt, now);
    spawn::update_bullets(state, dt, now);
    spawn::try_spawn(state, now);
    collision::resolve_collisions(state, now);
    state.background.scroll(state.player.car.speed.y, dt);
}

/// Player update: the death machine while dead, otherwise steering,
/// road-bound check, distance scoring and shooting.
fn update_player(state: &mut GameState, input: &TickInput, dt: f32, now: f64) {
    if state.player.car.is_dead() {
        steering::apply_death_friction(&mut state.player.car, dt);
        state.player.car.position.x += state.player.car.speed.x * dt;

        if state.player.car.death_anim_done(now) {
            if state.player.lives > 0 || now < START_GRACE {
                if state.player.lives > 0 {
                    state.player.lives -= 1;
                }
                state.player.respawn();
                log::info!("respawned ({} lives left)", state.player.lives);
            } else {
                state.game_over(now);
            }
        }
        return;
    }

    steering::player_steering(&mut state.player, input, dt);

    // leaving the drivable road is fatal
    let x = state.player.car.position.x;
    if x < ROAD_LEFT || x > ROAD_RIGHT {
        state.player.car.kill(now);
        return;
    }

    // distance score: the counter accumulates with forward speed and
    // resets on every grant; grants inside a penalty window are lost
    let step = -state.player.car.speed.y * dt;
    state.player.distance += step;
    state.player.score_distance += step;
    while state.player.score_distance >= DISTANCE_PER_SCORE {
        state.player.score_distance -= DISTANCE_PER_SCORE;
        state.player.grant_score(SCORE_PER_DISTANCE, now);
    }

    if input.shoot {
        spawn::fire_bullet(state, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::NpcKind;
    use crate::sim::spawn::create_npc;
    use glam::Vec2;

    fn hold_up() -> TickInput {
        TickInput {
            up: true,
            ..TickInput::default()
        }
    }

    fn run(state: &mut GameState, input: &TickInput, seconds: f32) {
        let steps = (seconds / SIM_DT).round() as usize;
        for _ in 0..steps {
            tick(state, input, SIM_DT);
        }
    }

    #[test]
    fn clear_edges_drops_one_shots_and_keeps_held_keys() {
        let mut input = TickInput {
            up: true,
            shoot: true,
            pause: true,
            new_game: true,
            save_score: true,
            show_debug: true,
            ..TickInput::default()
        };
        input.clear_edges();
        assert!(!input.pause && !input.new_game && !input.save_score);
        assert!(input.up && input.shoot && input.show_debug);
    }

    #[test]
    fn distance_score_matches_distance_travelled() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX; // alone on the road
        run(&mut state, &hold_up(), 10.0);

        let expected =
            (state.player.distance / DISTANCE_PER_SCORE).floor() as u32 * SCORE_PER_DISTANCE;
        assert_eq!(state.player.score, expected);
        assert!(state.player.score > 0);
        // at full throttle the whole run is at max speed eventually
        assert_eq!(state.player.car.speed.y, -PLAYER_MAX_SPEED);
    }

    #[test]
    fn pause_freezes_the_clock() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX;
        run(&mut state, &hold_up(), 1.0);
        let frozen = state.time;

        let mut pause = TickInput::default();
        pause.pause = true;
        tick(&mut state, &pause, SIM_DT);
        assert!(state.paused);

        run(&mut state, &TickInput::default(), 1.0);
        assert_eq!(state.time, frozen);

        tick(&mut state, &pause, SIM_DT);
        assert!(!state.paused);
        run(&mut state, &TickInput::default(), 0.5);
        assert!(state.time > frozen);
    }

    #[test]
    fn driving_off_road_kills_and_respawns() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX;
        let lives = state.player.lives;

        let mut left = hold_up();
        left.left = true;
        run(&mut state, &left, 5.0);
        // somewhere in there the player left the road, exploded and came back
        assert!(state.player.lives < lives);
        assert!(state.player.distance > 0.0);
    }

    #[test]
    fn game_over_when_out_of_lives_past_grace() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX;
        state.player.lives = 0;
        state.time = START_GRACE + 1.0;

        state.player.car.kill(state.time);
        run(&mut state, &TickInput::default(), 2.0);

        assert!(state.is_game_over());
        assert_eq!(state.player.car.speed.y, 0.0);
        assert!(!state.player.car.visible);

        // terminal: further ticks change nothing but new_game restarts
        let over_at = state.game_over_at;
        run(&mut state, &hold_up(), 1.0);
        assert_eq!(state.game_over_at, over_at);

        let mut restart = TickInput::default();
        restart.new_game = true;
        tick(&mut state, &restart, SIM_DT);
        assert!(!state.is_game_over());
        assert_eq!(state.player.lives, START_LIVES);
    }

    #[test]
    fn grace_period_respawn_with_zero_lives() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX;
        state.player.lives = 0;

        state.player.car.kill(0.5);
        state.time = 0.5;
        run(&mut state, &TickInput::default(), 2.0);

        assert!(!state.is_game_over());
        assert!(!state.player.car.is_dead());
    }

    #[test]
    fn shooting_activates_pool_bullets() {
        let mut state = GameState::new(3);
        state.next_spawn = f64::MAX;
        let mut input = hold_up();
        input.shoot = true;
        run(&mut state, &input, 0.1);
        assert!(state.bullets.iter().any(|b| b.active));
    }

    #[test]
    fn full_pipeline_with_traffic_stays_bounded() {
        let mut state = GameState::new(9);
        let px = state.player.car.position;
        create_npc(&mut state, NpcKind::Hostile, px + Vec2::new(10.0, -60.0));
        create_npc(&mut state, NpcKind::Civilian, px + Vec2::new(-30.0, -120.0));

        let mut input = hold_up();
        input.shoot = true;
        run(&mut state, &input, 20.0);

        assert!(state.npcs.len() <= MAX_NPCS);
        for npc in &state.npcs {
            if !npc.car.is_dead() {
                // collisions resolve after the AI clamp, so a swap with the
                // player can briefly leave an NPC as fast as the player
                assert!(npc.car.speed.y <= -NPC_MIN_SPEED + 1e-3);
                assert!(npc.car.speed.y >= -PLAYER_MAX_SPEED - 1e-3);
            }
        }
    }
}
