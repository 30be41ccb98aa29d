//! HUD and leaderboard screen
//!
//! Everything here draws through the `DrawSurface` trait; the core never
//! sees pixels or fonts.

use crate::highscores::{Leaderboard, SortKey};
use crate::platform::{Anchor, DrawSurface};
use crate::sim::entity::SpriteId;
use crate::sim::state::GameState;

/// Rows shown per leaderboard page.
pub const LEADERBOARD_ROWS: usize = 10;

/// Draw every visible entity: background, traffic, bullets, player.
pub fn draw_world(surface: &mut impl DrawSurface, state: &GameState) {
    let now = state.time;

    surface.draw_sprite(state.background.sprite, state.background.position);

    for npc in &state.npcs {
        if npc.car.visible {
            surface.draw_sprite(npc.car.current_sprite(now), npc.car.position);
        }
    }

    for bullet in &state.bullets {
        if bullet.active {
            surface.draw_sprite(SpriteId::Bullet, bullet.position);
        }
    }

    if state.player.car.visible {
        surface.draw_sprite(state.player.car.current_sprite(now), state.player.car.position);
    }
}

/// Score/lives HUD, status banners and the optional debug overlay.
pub fn draw_hud(surface: &mut impl DrawSurface, state: &GameState, fps: f64, show_debug: bool) {
    surface.draw_text(&format!("Score: {}", state.player.score), Anchor::TopCenter);
    surface.draw_text(&format!("Lives: {}", state.player.lives), Anchor::TopLeft);

    if state.time < state.player.penalty_until {
        surface.draw_text("SCORE PENALTY", Anchor::BottomCenter);
    }
    if state.paused {
        surface.draw_text("PAUSED", Anchor::Center);
    }
    if state.is_game_over() {
        surface.draw_text("GAME OVER", Anchor::Center);
        surface.draw_text("press new game to restart", Anchor::BottomCenter);
    }

    if show_debug {
        surface.draw_text(&format!("FPS: {fps:.0}"), Anchor::TopRight);
        surface.draw_text(
            &format!("npcs: {} kills: {}", state.npcs.len(), state.kills),
            Anchor::MidRight,
        );
    }
}

/// One page of the leaderboard with its sort-key header.
pub fn draw_leaderboard(surface: &mut impl DrawSurface, board: &Leaderboard) {
    let header = match board.sort_key {
        SortKey::Score => "HIGH SCORES (by score)",
        SortKey::Time => "HIGH SCORES (by time)",
    };
    surface.draw_text(header, Anchor::TopCenter);

    if board.is_empty() {
        surface.draw_text("no scores yet", Anchor::Center);
        return;
    }

    for (row, entry) in board.page(LEADERBOARD_ROWS).iter().enumerate() {
        let rank = board.scroll + row + 1;
        surface.draw_text(
            &format!(
                "{rank:>3}. {:>8} pts {:>7.1}s",
                entry.score,
                entry.time_millis as f64 / 1000.0
            ),
            Anchor::Center,
        );
    }
}
