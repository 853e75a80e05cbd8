//! Free bounce movement
//!
//! An actor drifts at constant speed and, on touching a wall, is pushed back
//! inside with a randomized new heading: the component perpendicular to the
//! wall gets a random sign, the parallel component is redrawn from
//! `[-speed, speed]`. The velocity is then rescaled so the speed never drifts.

use glam::Vec2;
use rand::Rng;

use super::actor::{Actor, Arena};
use crate::with_length;

/// Walls touched during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Uniform +1 / -1
#[inline]
fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Uniform in `[-speed, speed]`
#[inline]
fn random_component<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> f32 {
    rng.random_range(-speed..=speed)
}

/// Advance a bouncing actor by one frame.
///
/// After the call the actor lies inside `arena` and its velocity has length
/// `speed` (unless the velocity is exactly zero). The far walls are tested
/// against `arena.max_pos`, i.e. `x + width > arena.width`.
pub fn step<R: Rng + ?Sized>(actor: &mut Actor, arena: &Arena, speed: f32, rng: &mut R) -> WallHits {
    let speed = speed.abs();
    let max = arena.max_pos(actor.size);
    let mut hits = WallHits::default();

    actor.pos += actor.vel;

    if actor.pos.x < 0.0 {
        actor.pos.x = 0.0;
        actor.vel.x = actor.vel.x.abs() * random_sign(rng);
        actor.vel.y = random_component(rng, speed);
        hits.left = true;
    }
    if actor.pos.x > max.x {
        actor.pos.x = max.x;
        actor.vel.x = -actor.vel.x.abs() * random_sign(rng);
        actor.vel.y = random_component(rng, speed);
        hits.right = true;
    }
    if actor.pos.y < 0.0 {
        actor.pos.y = 0.0;
        actor.vel.y = actor.vel.y.abs() * random_sign(rng);
        actor.vel.x = random_component(rng, speed);
        hits.top = true;
    }
    if actor.pos.y > max.y {
        actor.pos.y = max.y;
        actor.vel.y = -actor.vel.y.abs() * random_sign(rng);
        actor.vel.x = random_component(rng, speed);
        hits.bottom = true;
    }

    actor.vel = with_length(actor.vel, speed);

    if hits.any() {
        log::trace!("bounce {:?} -> pos {:?} vel {:?}", hits, actor.pos, actor.vel);
    }

    hits
}

/// Initial bounce velocity: diagonal down-right at `speed` per axis
pub fn initial_velocity(speed: f32) -> Vec2 {
    Vec2::splat(speed.abs())
}
