//! Overdrive entry point
//!
//! Headless shell: runs the simulation at the fixed timestep with a small
//! autopilot, drawing into a discard surface, then records the run on the
//! leaderboard. A real front end swaps in its own `DrawSurface`, input
//! polling and frame pacing; the core never knows the difference.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use overdrive::consts::*;
use overdrive::highscores::{Entry, Leaderboard};
use overdrive::persistence::ScoreStore;
use overdrive::platform::{Clock, MonotonicClock, NullSurface};
use overdrive::settings::Settings;
use overdrive::sim::{GameState, TickInput, tick};
use overdrive::ui;

const SETTINGS_FILE: &str = "overdrive_settings.json";
const SCORES_FILE: &str = "overdrive_scores.txt";

/// Autopilot for demo runs: full throttle, steer back toward road center,
/// shoot continuously.
fn demo_input(state: &GameState) -> TickInput {
    let center = (ROAD_LEFT + ROAD_RIGHT) / 2.0;
    let x = state.player.car.position.x;
    TickInput {
        up: true,
        left: x > center + 10.0,
        right: x < center - 10.0,
        shoot: true,
        ..TickInput::default()
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("overdrive starting");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let store = ScoreStore::new(SCORES_FILE);
    let mut leaderboard = Leaderboard::new(store.load()?);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let mut state = GameState::new(seed);
    let mut surface = NullSurface;
    let clock = MonotonicClock::new();

    let ticks = (settings.demo_seconds / SIM_DT) as u64;
    let mut input = TickInput::default();
    let mut saved = false;
    for frame in 0..ticks {
        if settings.demo {
            input = demo_input(&state);
        }
        // the autopilot presses save once the session ends
        if state.is_game_over() || frame + 1 == ticks {
            input.save_score = true;
        }
        tick(&mut state, &input, SIM_DT);

        if input.save_score && !saved {
            let entry = Entry {
                score: state.player.score,
                time_millis: state.elapsed_millis(),
            };
            store.append(entry)?;
            leaderboard.push(entry);
            saved = true;
        }
        input.clear_edges();

        ui::draw_world(&mut surface, &state);
        ui::draw_hud(
            &mut surface,
            &state,
            1.0 / SIM_DT as f64,
            settings.show_fps || input.show_debug,
        );

        if input.quit || (state.is_game_over() && saved) {
            break;
        }
    }

    ui::draw_leaderboard(&mut surface, &leaderboard);
    settings.save(Path::new(SETTINGS_FILE))?;

    log::info!("demo finished in {:.2}s wall time", clock.now());
    println!(
        "score {}  kills {}  time {:.1}s  best {}",
        state.player.score,
        state.kills,
        state.elapsed_millis() as f64 / 1000.0,
        leaderboard.top_score().unwrap_or(0)
    );
    Ok(())
}
