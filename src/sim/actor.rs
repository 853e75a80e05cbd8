//! Actor and arena geometry
//!
//! Positions are top-left corners in screen space (x right, y down), sizes
//! are in pixels, velocities in pixels per frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which sprite an actor is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The cat. Bounces in single-actor mode, chases in two-actor mode.
    Pursuer,
    /// The mouse
    Target,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pursuer => "pursuer",
            Role::Target => "target",
        }
    }
}

/// Fixed play area bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Largest top-left coordinate a sprite of `size` may occupy.
    /// Never negative, even if the sprite is larger than the arena.
    #[inline]
    pub fn max_pos(&self, size: Vec2) -> Vec2 {
        (self.size() - size).max(Vec2::ZERO)
    }

    /// Clamp a top-left position so a sprite of `size` stays inside
    #[inline]
    pub fn clamp(&self, pos: Vec2, size: Vec2) -> Vec2 {
        pos.clamp(Vec2::ZERO, self.max_pos(size))
    }

    /// Whether a sprite of `size` at `pos` lies fully inside
    pub fn contains(&self, pos: Vec2, size: Vec2) -> bool {
        let max = self.max_pos(size);
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= max.x && pos.y <= max.y
    }

    /// Top-left position that centers a sprite of `size`
    pub fn centered(&self, size: Vec2) -> Vec2 {
        self.max_pos(size) / 2.0
    }
}

/// A moving sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}
