//! Game state aggregate
//!
//! One mutable `GameState` owns everything the tick pipeline touches: the
//! player, the bounded traffic collection, the bullet pool, the background
//! scroller and the scheduled timestamps. Subsystems borrow it for the
//! duration of a tick; nothing holds references across ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Bullet, Car, Npc, NpcKind, SpriteId};
use crate::consts::*;

/// Seeded per-session RNG so demo runs are reproducible.
#[derive(Debug, Clone)]
pub struct SessionRng {
    pub seed: u64,
    rng: Pcg32,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn as_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

/// The player's car plus scoring and life state.
#[derive(Debug, Clone)]
pub struct Player {
    pub car: Car,
    pub score: u32,
    /// Distance accumulated toward the next distance-score grant
    pub score_distance: f32,
    /// Total distance this session
    pub distance: f32,
    /// Score grants are suppressed until this sim time (civilian-kill penalty)
    pub penalty_until: f64,
    /// Next sim time a shot is allowed
    pub next_shot: f64,
    pub lives: u32,
    /// Granted points accumulated toward the next bonus life
    pub life_bonus: u32,
}

impl Player {
    pub fn new() -> Self {
        let mut car = Car::new(
            Vec2::new(SCREEN_WIDTH / 2.0, PLAYER_Y_POS),
            SpriteId::PlayerCar,
        );
        car.speed = Vec2::new(0.0, -PLAYER_MIN_SPEED);
        Self {
            car,
            score: 0,
            score_distance: 0.0,
            distance: 0.0,
            penalty_until: 0.0,
            next_shot: 0.0,
            lives: START_LIVES,
            life_bonus: 0,
        }
    }

    /// Grant points unless a penalty window is active. Granted points also
    /// feed the bonus-life counter; crossing the threshold converts to a
    /// life and carries the remainder over.
    ///
    /// Returns whether the grant was applied.
    pub fn grant_score(&mut self, points: u32, now: f64) -> bool {
        if now < self.penalty_until {
            return false;
        }
        self.score += points;
        self.life_bonus += points;
        while self.life_bonus >= LIFE_BONUS_THRESHOLD {
            self.life_bonus -= LIFE_BONUS_THRESHOLD;
            self.lives += 1;
            log::info!("bonus life awarded (lives: {})", self.lives);
        }
        true
    }

    /// Apply the consequences of a confirmed kill, whatever caused it:
    /// hostiles are worth a score bonus, civilians open a penalty window.
    pub fn credit_kill(&mut self, kind: NpcKind, now: f64) {
        match kind {
            NpcKind::Hostile => {
                self.grant_score(KILL_SCORE, now);
            }
            NpcKind::Civilian => {
                self.penalty_until = now + PENALTY_DURATION;
                log::warn!("civilian destroyed, score suppressed for {PENALTY_DURATION}s");
            }
        }
    }

    /// Reset the car to its spawn condition after a death animation.
    pub fn respawn(&mut self) {
        self.car.position = Vec2::new(SCREEN_WIDTH / 2.0, PLAYER_Y_POS);
        self.car.speed = Vec2::new(0.0, -PLAYER_MIN_SPEED);
        self.car.died_at = 0.0;
        self.car.visible = true;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertically wrapping background strip. Carries the world scroll; the
/// player's own y position stays near its screen anchor.
#[derive(Debug, Clone)]
pub struct Background {
    pub position: Vec2,
    pub sprite: SpriteId,
}

impl Background {
    pub fn new() -> Self {
        Self {
            position: Vec2::new(SCREEN_WIDTH / 2.0, 0.0),
            sprite: SpriteId::Background,
        }
    }

    /// Advance by the player's forward speed and wrap at screen height.
    pub fn scroll(&mut self, player_forward_speed: f32, dt: f32) {
        self.position.y -= player_forward_speed * dt;
        if self.position.y > SCREEN_HEIGHT {
            self.position.y = 0.0;
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete world state for one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    /// Active traffic, at most `MAX_NPCS`. Unordered; removal swaps the
    /// last element into the freed slot.
    pub npcs: Vec<Npc>,
    /// Fixed-capacity projectile pool
    pub bullets: [Bullet; MAX_BULLETS],
    pub background: Background,
    /// Next sim time a spawn attempt is allowed
    pub next_spawn: f64,
    /// 0.0 = game in progress; otherwise the sim time the run ended
    pub game_over_at: f64,
    /// Simulation clock; frozen while paused
    pub time: f64,
    pub paused: bool,
    /// Confirmed hostile kills this session
    pub kills: u32,
    pub rng: SessionRng,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            player: Player::new(),
            npcs: Vec::with_capacity(MAX_NPCS),
            bullets: [Bullet::default(); MAX_BULLETS],
            background: Background::new(),
            next_spawn: 0.0,
            game_over_at: 0.0,
            time: 0.0,
            paused: false,
            kills: 0,
            rng: SessionRng::new(seed),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over_at != 0.0
    }

    /// Terminal transition: record the timestamp, stop the world scroll and
    /// hide the wreck. Idempotent.
    pub fn game_over(&mut self, now: f64) {
        if self.is_game_over() {
            return;
        }
        self.game_over_at = now;
        self.player.car.speed.y = 0.0;
        self.player.car.visible = false;
        log::info!(
            "game over at {:.1}s (score {}, kills {})",
            now,
            self.player.score,
            self.kills
        );
    }

    /// Session elapsed time in whole milliseconds, for leaderboard entries.
    pub fn elapsed_millis(&self) -> u64 {
        let end = if self.is_game_over() {
            self.game_over_at
        } else {
            self.time
        };
        (end * 1000.0) as u64
    }

    /// Start a fresh session, reseeding the RNG so runs differ.
    pub fn restart(&mut self) {
        *self = GameState::new(self.rng.seed.wrapping_add(1));
    }
}
