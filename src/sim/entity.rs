//! Entity types
//!
//! Everything on the road shares a flat `Car` record; traffic adds a
//! `NpcKind` tag and behavior dispatches on it in free functions rather
//! than through trait objects.

use glam::Vec2;

use crate::consts::*;

/// Handle the renderer resolves to a bitmap; the core never touches pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    PlayerCar,
    EnemyCar,
    CivilianCar,
    ExplosionA,
    ExplosionB,
    Bullet,
    Background,
}

/// Positional state shared by every car on the road.
#[derive(Debug, Clone)]
pub struct Car {
    pub position: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub visible: bool,
    pub sprite: SpriteId,
    /// 0.0 = alive; otherwise the sim time of death, driving the two-phase
    /// explosion animation
    pub died_at: f64,
}

impl Car {
    pub fn new(position: Vec2, sprite: SpriteId) -> Self {
        Self {
            position,
            size: Vec2::new(CAR_WIDTH, CAR_HEIGHT),
            speed: Vec2::ZERO,
            visible: true,
            sprite,
            died_at: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.died_at != 0.0
    }

    /// Set the death timestamp. A second kill signal while already dead is
    /// a no-op.
    pub fn kill(&mut self, now: f64) {
        if !self.is_dead() {
            self.died_at = now;
        }
    }

    pub fn death_anim_done(&self, now: f64) -> bool {
        self.is_dead() && now - self.died_at >= DEATH_ANIM_DURATION
    }

    /// Sprite to draw, swapping explosion phases halfway through the
    /// death animation.
    pub fn current_sprite(&self, now: f64) -> SpriteId {
        if !self.is_dead() {
            self.sprite
        } else if now - self.died_at < DEATH_ANIM_DURATION * 0.5 {
            SpriteId::ExplosionA
        } else {
            SpriteId::ExplosionB
        }
    }
}

/// Traffic type tag. Hostiles pursue the player; civilians never react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcKind {
    Hostile,
    Civilian,
}

impl NpcKind {
    pub fn starting_health(self) -> i32 {
        match self {
            NpcKind::Hostile => HOSTILE_HP,
            NpcKind::Civilian => CIVILIAN_HP,
        }
    }

    pub fn sprite(self) -> SpriteId {
        match self {
            NpcKind::Hostile => SpriteId::EnemyCar,
            NpcKind::Civilian => SpriteId::CivilianCar,
        }
    }
}

/// A traffic vehicle.
#[derive(Debug, Clone)]
pub struct Npc {
    pub car: Car,
    pub kind: NpcKind,
    pub health: i32,
}

impl Npc {
    /// Fresh vehicle at full type max speed, just past the top of the view.
    pub fn new(kind: NpcKind, position: Vec2) -> Self {
        let mut car = Car::new(position, kind.sprite());
        car.speed = Vec2::new(0.0, -NPC_MAX_SPEED);
        Self {
            car,
            kind,
            health: kind.starting_health(),
        }
    }
}

/// Pooled projectile. Bullets are never freed; they flip between hidden and
/// active states. Velocity is implicit: every active bullet moves upward at
/// `BULLET_SPEED`.
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub position: Vec2,
    pub active: bool,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            active: false,
        }
    }
}
