//! Per-frame simulation step
//!
//! The host scheduler calls `tick` once per display frame and keeps asking
//! for frames until it returns `FrameOutcome::Stop`.

use super::actor::Role;
use super::bounce::step;
use super::collision::detect_collision;
use super::pursuit::pursue;
use super::state::{GameMode, GamePhase, GameState};
use crate::presentation::Presenter;

/// What the scheduler should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Request another frame
    Continue,
    /// Stop scheduling frames for good
    Stop,
}

/// Advance the session by one frame and present the new positions
pub fn tick(state: &mut GameState, presenter: &mut dyn Presenter) -> FrameOutcome {
    match state.phase {
        GamePhase::Loading => return FrameOutcome::Continue,
        GamePhase::Ended => return FrameOutcome::Stop,
        GamePhase::Running => {}
    }

    state.frames += 1;

    match state.mode {
        GameMode::Bounce => {
            if let Some(cat) = state.pursuer.as_mut() {
                step(cat, &state.arena, state.speeds.bounce, &mut state.rng);
            }
        }
        GameMode::Chase => {
            let (Some(cat), Some(mouse)) = (state.pursuer.as_mut(), state.target.as_mut()) else {
                log::warn!("chase frame without both sprites, skipping");
                return FrameOutcome::Continue;
            };
            // Cat aims where the mouse is now, then the mouse moves
            pursue(cat, mouse, &state.arena, state.speeds.chase, state.aim);
            step(mouse, &state.arena, state.speeds.target, &mut state.rng);
        }
    }

    present(state, presenter);

    if state.mode == GameMode::Chase && caught(state) {
        state.phase = GamePhase::Ended;
        if !state.game_over_notified {
            state.game_over_notified = true;
            log::info!("cat caught the mouse after {} frames", state.frames);
            presenter.game_over();
        }
        return FrameOutcome::Stop;
    }

    FrameOutcome::Continue
}

/// Push every actor's current position to the presenter
pub fn present(state: &GameState, presenter: &mut dyn Presenter) {
    for (role, actor) in state.actors() {
        presenter.place(role, actor.pos);
    }
}

/// Tick until the game stops or `max_frames` frames have run.
///
/// Used where no display drives the loop. Returns the number of frames run.
pub fn run_frames(state: &mut GameState, presenter: &mut dyn Presenter, max_frames: u64) -> u64 {
    let mut ran = 0;
    while ran < max_frames {
        ran += 1;
        if tick(state, presenter) == FrameOutcome::Stop {
            break;
        }
    }
    ran
}

fn caught(state: &GameState) -> bool {
    match (state.actor(Role::Pursuer), state.actor(Role::Target)) {
        (Some(cat), Some(mouse)) => detect_collision(cat, mouse),
        _ => false,
    }
}
