//! Cat Chase - a cat bouncing around a box, or chasing a mouse
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, bounce, pursuit, collisions, session state)
//! - `presentation`: Seam between the simulation and whatever draws the sprites
//! - `settings`: Data-driven game tuning

pub mod presentation;
pub mod settings;
pub mod sim;

pub use presentation::{Presenter, RecordingPresenter};
pub use settings::Settings;
pub use sim::{AimPoint, GameMode};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Bounce speed in pixels per frame
    pub const BOUNCE_SPEED: f32 = 2.0;
    /// Cat speed while chasing the mouse (pixels per frame)
    pub const CHASE_SPEED: f32 = 2.5;
    /// Mouse speed (pixels per frame)
    pub const TARGET_SPEED: f32 = 2.0;

    /// Sprite size used when an image reports no layout size yet
    pub const FALLBACK_SPRITE_SIZE: f32 = 50.0;

    /// Headless arena defaults
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
    /// Headless frame cap (bounce mode never ends on its own)
    pub const DEFAULT_MAX_FRAMES: u64 = 10_000;
}

/// Replace non-positive or non-finite sprite dimensions with the fallback size
#[inline]
pub fn sanitize_size(size: Vec2) -> Vec2 {
    let fix = |v: f32| {
        if v.is_finite() && v > 0.0 {
            v
        } else {
            consts::FALLBACK_SPRITE_SIZE
        }
    };
    Vec2::new(fix(size.x), fix(size.y))
}

/// Rescale a vector to the given length, leaving a zero vector untouched
#[inline]
pub fn with_length(v: Vec2, length: f32) -> Vec2 {
    let magnitude = v.length();
    if magnitude > 0.0 {
        v / magnitude * length
    } else {
        v
    }
}
