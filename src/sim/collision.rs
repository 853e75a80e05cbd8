//! Axis-aligned bounding box collision
//!
//! Sprites are treated as their layout rectangles. Boxes that only share an
//! edge do not collide; there must be a positive overlap on both axes.

use super::actor::Actor;

/// Strict overlap of two 1D intervals `[a_min, a_min + a_len)` and `[b_min, b_min + b_len)`
#[inline]
fn intervals_overlap(a_min: f32, a_len: f32, b_min: f32, b_len: f32) -> bool {
    a_min < b_min + b_len && a_min + a_len > b_min
}

/// Check whether two actors' bounding boxes overlap
pub fn detect_collision(a: &Actor, b: &Actor) -> bool {
    intervals_overlap(a.pos.x, a.size.x, b.pos.x, b.size.x)
        && intervals_overlap(a.pos.y, a.size.y, b.pos.y, b.size.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Actor {
        Actor::new(Vec2::new(x, y), Vec2::new(w, h), Vec2::ZERO)
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!detect_collision(&a, &b));

        // Corner contact only
        let c = boxed(10.0, 10.0, 10.0, 10.0);
        assert!(!detect_collision(&a, &c));
    }

    #[test]
    fn test_overlap_collides() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 0.0, 10.0, 10.0);
        assert!(detect_collision(&a, &b));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(5.0, 20.0, 10.0, 10.0);
        assert!(!detect_collision(&a, &b));
    }

    #[test]
    fn test_containment_collides() {
        let outer = boxed(0.0, 0.0, 100.0, 100.0);
        let inner = boxed(40.0, 40.0, 5.0, 5.0);
        assert!(detect_collision(&outer, &inner));
        assert!(detect_collision(&inner, &outer));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let a = boxed(3.0, 4.0, 10.0, 10.0);
        let b = boxed(8.0, 9.0, 10.0, 10.0);
        let first = detect_collision(&a, &b);
        for _ in 0..10 {
            assert_eq!(detect_collision(&a, &b), first);
        }
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -50.0f32..150.0, ay in -50.0f32..150.0,
            aw in 1.0f32..60.0, ah in 1.0f32..60.0,
            bx in -50.0f32..150.0, by in -50.0f32..150.0,
            bw in 1.0f32..60.0, bh in 1.0f32..60.0,
        ) {
            let a = boxed(ax, ay, aw, ah);
            let b = boxed(bx, by, bw, bh);
            prop_assert_eq!(detect_collision(&a, &b), detect_collision(&b, &a));
        }
    }
}
