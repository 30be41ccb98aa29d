//! Overdrive - a vertically-scrolling arcade driving game
//!
//! Core modules:
//! - `sim`: Simulation core (steering, collisions, spawning, game state)
//! - `platform`: Input/render/clock interface boundary
//! - `highscores`: Leaderboard with sort and scroll state
//! - `persistence`: Flat-file leaderboard store
//! - `settings`: JSON-persisted preferences
//! - `ui`: HUD and leaderboard screen drawn through the render trait

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::{Leaderboard, SortKey};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 320.0;

    /// Drivable road band; leaving it is fatal for the player
    pub const ROAD_LEFT: f32 = 140.0;
    pub const ROAD_RIGHT: f32 = 340.0;

    /// Car footprint used by the overlap test
    pub const CAR_WIDTH: f32 = 14.0;
    pub const CAR_HEIGHT: f32 = 20.0;

    /// Screen anchor the player's car eases toward vertically
    pub const PLAYER_Y_POS: f32 = 240.0;
    /// Vertical easing rate toward the anchor (units/s)
    pub const PLAYER_Y_EASE: f32 = 120.0;

    /// Player forward-speed band (speeds are stored negative: the world
    /// scrolls toward the viewer)
    pub const PLAYER_MAX_SPEED: f32 = 1000.0;
    pub const PLAYER_MIN_SPEED: f32 = 400.0;
    pub const PLAYER_MAX_SPEED_SIDES: f32 = 400.0;
    pub const PLAYER_ACCEL: f32 = 800.0;
    pub const PLAYER_ACCEL_SIDES: f32 = 2000.0;

    /// Hostile traffic tuning
    pub const NPC_TARGET_DISTANCE: f32 = 50.0;
    pub const NPC_MAX_SPEED: f32 = 800.0;
    pub const NPC_MIN_SPEED: f32 = 300.0;
    pub const NPC_MAX_SPEED_SIDES: f32 = 400.0;
    pub const NPC_ACCEL: f32 = 400.0;
    pub const NPC_ACCEL_SIDES: f32 = 1000.0;
    /// Civilian traffic eases toward this cruise speed and ignores the player
    pub const CIVILIAN_CRUISE_SPEED: f32 = 500.0;

    /// Traffic population cap
    pub const MAX_NPCS: usize = 16;
    /// NPCs farther than this from the player are despawned
    pub const NPC_ACTIVE_DISTANCE: f32 = SCREEN_HEIGHT * 3.0;
    /// NPCs past this y (behind the player) are despawned
    pub const NPC_DESPAWN_Y: f32 = SCREEN_HEIGHT * 2.0;
    /// New traffic appears just past the top of the view
    pub const NPC_SPAWN_Y: f32 = -20.0;
    /// Sim-time gap between spawn attempts
    pub const SPAWN_INTERVAL: f64 = 0.5;
    pub const HOSTILE_HP: i32 = 3;
    pub const CIVILIAN_HP: i32 = 1;

    /// Velocity-exchange multiplier on collision (1.0 = perfectly elastic)
    pub const COLLISION_BOUNCE: f32 = 1.0;
    /// Vertical relative-speed threshold above which a rear-end crash kills
    pub const LETHAL_IMPACT_SPEED: f32 = 150.0;
    /// Deceleration applied to dead, drifting cars (units/s^2)
    pub const EXPLOSION_FRICTION: f32 = 600.0;
    /// Total death-animation length; sprite swaps halfway through
    pub const DEATH_ANIM_DURATION: f64 = 1.0;

    /// Projectile pool
    pub const MAX_BULLETS: usize = 8;
    pub const BULLET_SPEED: f32 = 1200.0;
    pub const BULLET_RANGE: f32 = 300.0;
    pub const SHOT_COOLDOWN: f64 = 0.25;

    /// Scoring
    pub const DISTANCE_PER_SCORE: f32 = 500.0;
    pub const SCORE_PER_DISTANCE: u32 = 10;
    pub const KILL_SCORE: u32 = 200;
    /// Score grants are suppressed for this long after a civilian kill
    pub const PENALTY_DURATION: f64 = 3.0;
    /// Bonus life every this many granted points
    pub const LIFE_BONUS_THRESHOLD: u32 = 5000;

    pub const START_LIVES: u32 = 3;
    /// Respawn is allowed regardless of remaining lives during the first
    /// seconds of a session
    pub const START_GRACE: f64 = 10.0;

    /// Uniform random values are quantized to this many steps
    pub const RAND_VAL_PRECISION: u32 = 100;
}
