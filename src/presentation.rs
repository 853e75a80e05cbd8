//! Presentation seam
//!
//! The simulation never touches the DOM. Each running frame it hands the new
//! sprite positions to a `Presenter`, and tells it once when the game ends.

use glam::Vec2;

use crate::sim::Role;

/// Receives sprite positions and the game-over notice
pub trait Presenter {
    /// Draw `role`'s sprite with its top-left corner at `pos`
    fn place(&mut self, role: Role, pos: Vec2);

    /// The cat caught the mouse. Called at most once per session.
    fn game_over(&mut self);
}

/// Presenter that keeps everything it is told, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    /// Every placement, in call order
    pub placements: Vec<(Role, Vec2)>,
    pub game_over_calls: u32,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent position reported for `role`
    pub fn last_position(&self, role: Role) -> Option<Vec2> {
        self.placements
            .iter()
            .rev()
            .find(|(r, _)| *r == role)
            .map(|(_, pos)| *pos)
    }

    /// Drop recorded placements (keeps the game-over count)
    pub fn clear(&mut self) {
        self.placements.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn place(&mut self, role: Role, pos: Vec2) {
        self.placements.push((role, pos));
    }

    fn game_over(&mut self) {
        self.game_over_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_position() {
        let mut p = RecordingPresenter::new();
        p.place(Role::Pursuer, Vec2::new(1.0, 2.0));
        p.place(Role::Target, Vec2::new(5.0, 5.0));
        p.place(Role::Pursuer, Vec2::new(3.0, 4.0));

        assert_eq!(p.last_position(Role::Pursuer), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(p.last_position(Role::Target), Some(Vec2::new(5.0, 5.0)));

        p.clear();
        assert_eq!(p.last_position(Role::Pursuer), None);
    }
}
