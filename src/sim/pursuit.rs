//! Pure pursuit steering
//!
//! The pursuer heads straight for the target each frame at constant speed.
//! Walls stop it (clamp) rather than bounce it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Arena};

/// Which point of each sprite the pursuer steers between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AimPoint {
    /// Top-left corner to top-left corner (classic behaviour)
    #[default]
    Corner,
    /// Geometric center to geometric center
    Center,
}

impl AimPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            AimPoint::Corner => "corner",
            AimPoint::Center => "center",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "corner" | "top-left" => Some(AimPoint::Corner),
            "center" | "centre" => Some(AimPoint::Center),
            _ => None,
        }
    }

    #[inline]
    fn of(&self, actor: &Actor) -> Vec2 {
        match self {
            AimPoint::Corner => actor.pos,
            AimPoint::Center => actor.center(),
        }
    }
}

/// Move `pursuer` one frame toward `target`.
///
/// Coincident aim points give a zero velocity for the frame.
pub fn pursue(pursuer: &mut Actor, target: &Actor, arena: &Arena, speed: f32, aim: AimPoint) {
    let dir = (aim.of(target) - aim.of(pursuer)).normalize_or_zero();

    pursuer.vel = dir * speed.abs();
    pursuer.pos = arena.clamp(pursuer.pos + pursuer.vel, pursuer.size);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(100.0, 100.0)
    }

    fn sprite(x: f32, y: f32) -> Actor {
        Actor::new(Vec2::new(x, y), Vec2::splat(10.0), Vec2::ZERO)
    }

    #[test]
    fn test_pursue_straight_line() {
        let mut cat = sprite(0.0, 0.0);
        let mouse = sprite(10.0, 0.0);

        pursue(&mut cat, &mouse, &arena(), 5.0, AimPoint::Corner);
        assert_eq!(cat.pos, Vec2::new(5.0, 0.0));
        assert_eq!(cat.vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_pursue_diagonal_keeps_speed() {
        let mut cat = sprite(0.0, 0.0);
        let mouse = sprite(30.0, 40.0);

        pursue(&mut cat, &mouse, &arena(), 5.0, AimPoint::Corner);
        assert!((cat.pos.x - 3.0).abs() < 1e-5);
        assert!((cat.pos.y - 4.0).abs() < 1e-5);
        assert!((cat.vel.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_same_point_does_not_move() {
        let mut cat = sprite(20.0, 20.0);
        let mouse = sprite(20.0, 20.0);

        pursue(&mut cat, &mouse, &arena(), 5.0, AimPoint::Corner);
        assert_eq!(cat.pos, Vec2::new(20.0, 20.0));
        assert_eq!(cat.vel, Vec2::ZERO);
    }

    #[test]
    fn test_overshoot_is_clamped_not_reflected() {
        let mut cat = sprite(88.0, 50.0);
        let mouse = sprite(95.0, 50.0);

        pursue(&mut cat, &mouse, &arena(), 5.0, AimPoint::Corner);
        assert_eq!(cat.pos, Vec2::new(90.0, 50.0));
        // Still aiming at the mouse
        assert!(cat.vel.x > 0.0);
    }

    #[test]
    fn test_center_aim_differs_for_different_sizes() {
        // Corners coincide but centers do not
        let mut by_corner = Actor::new(Vec2::new(10.0, 10.0), Vec2::splat(10.0), Vec2::ZERO);
        let mut by_center = by_corner;
        let mouse = Actor::new(Vec2::new(10.0, 10.0), Vec2::splat(30.0), Vec2::ZERO);

        pursue(&mut by_corner, &mouse, &arena(), 2.0, AimPoint::Corner);
        pursue(&mut by_center, &mouse, &arena(), 2.0, AimPoint::Center);

        assert_eq!(by_corner.vel, Vec2::ZERO);
        assert!(by_center.vel.x > 0.0 && by_center.vel.y > 0.0);
    }

    #[test]
    fn test_aim_point_from_str() {
        assert_eq!(AimPoint::from_str("CENTER"), Some(AimPoint::Center));
        assert_eq!(AimPoint::from_str("corner"), Some(AimPoint::Corner));
        assert_eq!(AimPoint::from_str("middle"), None);
        assert_eq!(AimPoint::Center.as_str(), "center");
    }
}
