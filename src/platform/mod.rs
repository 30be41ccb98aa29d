//! Platform interface boundary
//!
//! Windowing, bitmap loading, font rasterization, raw key mapping and
//! frame pacing all live outside the core. These are the only surfaces
//! the simulation needs from them.

use glam::Vec2;

use crate::sim::entity::SpriteId;

pub use crate::sim::tick::TickInput as Input;

/// Named screen anchors for UI text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MidLeft,
    Center,
    MidRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Draw sink the core renders into. Implementations own pixel formats,
/// blitting and text rasterization; the core only hands over sprite
/// handles, center positions and anchored strings.
pub trait DrawSurface {
    /// Blit a sprite centered at `position`.
    fn draw_sprite(&mut self, sprite: SpriteId, position: Vec2);
    /// Draw one line of text at a named anchor.
    fn draw_text(&mut self, text: &str, anchor: Anchor);
}

/// Headless surface that discards every draw call.
#[derive(Debug, Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn draw_sprite(&mut self, _sprite: SpriteId, _position: Vec2) {}
    fn draw_text(&mut self, _text: &str, _anchor: Anchor) {}
}

/// Monotonic time source driving the frame loop.
pub trait Clock {
    /// Elapsed seconds since an arbitrary fixed origin.
    fn now(&self) -> f64;
}

/// Wall-clock implementation backing the native binary.
#[derive(Debug)]
pub struct MonotonicClock {
    start: std::time::Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
