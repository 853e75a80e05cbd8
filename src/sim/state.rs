//! Game session state
//!
//! Everything a running game needs lives on `GameState`: arena, sprites,
//! start gate, seeded RNG and phase.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, Arena, Role};
use super::barrier::{ReadyBarrier, ReadySizes};
use super::bounce::initial_velocity;
use super::pursuit::AimPoint;
use crate::settings::Settings;

/// Single bouncing cat, or cat chasing mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Cat bounces around forever
    Bounce,
    /// Cat chases a bouncing mouse until it catches it
    #[default]
    Chase,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Bounce => "bounce",
            GameMode::Chase => "chase",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounce" | "single" => Some(GameMode::Bounce),
            "chase" | "pursuit" => Some(GameMode::Chase),
            _ => None,
        }
    }

    /// Whether this mode has a mouse
    pub fn has_target(&self) -> bool {
        matches!(self, GameMode::Chase)
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for sprite assets
    Loading,
    /// Frames are being simulated
    Running,
    /// Cat caught the mouse (terminal)
    Ended,
}

/// Per-session speeds, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speeds {
    /// Cat speed while bouncing
    pub bounce: f32,
    /// Cat speed while chasing
    pub chase: f32,
    /// Mouse speed
    pub target: f32,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub mode: GameMode,
    pub phase: GamePhase,
    pub arena: Arena,
    pub speeds: Speeds,
    pub aim: AimPoint,
    /// The cat (present once assets are ready)
    pub pursuer: Option<Actor>,
    /// The mouse (chase mode only)
    pub target: Option<Actor>,
    /// Frames simulated while running
    pub frames: u64,
    /// Set once the game-over notice has been sent
    pub game_over_notified: bool,
    pub(crate) barrier: ReadyBarrier,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session in `Loading`
    pub fn new(mode: GameMode, arena: Arena, settings: &Settings, seed: u64) -> Self {
        Self {
            seed,
            mode,
            phase: GamePhase::Loading,
            arena,
            speeds: Speeds {
                bounce: settings.bounce_speed.abs(),
                chase: settings.chase_speed.abs(),
                target: settings.target_speed.abs(),
            },
            aim: settings.aim,
            pursuer: None,
            target: None,
            frames: 0,
            game_over_notified: false,
            barrier: ReadyBarrier::new(mode.has_target()),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Report that a sprite's image is ready with its layout size.
    ///
    /// Returns `true` exactly once: on the report that lets the game start.
    /// The host should then present the initial positions and start its
    /// frame scheduler.
    pub fn asset_ready(&mut self, role: Role, size: Vec2) -> bool {
        if self.phase != GamePhase::Loading {
            log::debug!("{} asset ready after start, ignored", role.as_str());
            return false;
        }

        log::info!("{} asset ready ({} x {})", role.as_str(), size.x, size.y);
        match self.barrier.arrive(role, size) {
            Some(sizes) => {
                self.start(sizes);
                true
            }
            None => false,
        }
    }

    fn start(&mut self, sizes: ReadySizes) {
        let pursuer_vel = match self.mode {
            GameMode::Bounce => initial_velocity(self.speeds.bounce),
            GameMode::Chase => Vec2::ZERO,
        };
        self.pursuer = Some(Actor::new(
            self.arena.centered(sizes.pursuer),
            sizes.pursuer,
            pursuer_vel,
        ));

        self.target = sizes.target.map(|size| {
            Actor::new(
                self.arena.max_pos(size),
                size,
                initial_velocity(self.speeds.target),
            )
        });

        self.phase = GamePhase::Running;
        log::info!(
            "{} game started in {} x {} arena",
            self.mode.as_str(),
            self.arena.width,
            self.arena.height
        );
    }

    /// Actor by role
    pub fn actor(&self, role: Role) -> Option<&Actor> {
        match role {
            Role::Pursuer => self.pursuer.as_ref(),
            Role::Target => self.target.as_ref(),
        }
    }

    /// Present actors in stable order: pursuer, then target
    pub fn actors(&self) -> impl Iterator<Item = (Role, &Actor)> {
        self.pursuer
            .iter()
            .map(|a| (Role::Pursuer, a))
            .chain(self.target.iter().map(|a| (Role::Target, a)))
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_bounce_starts_on_single_asset() {
        let mut state = GameState::new(GameMode::Bounce, Arena::new(100.0, 100.0), &settings(), 1);
        assert_eq!(state.phase, GamePhase::Loading);

        assert!(!state.is_running());
        assert!(state.asset_ready(Role::Pursuer, Vec2::splat(10.0)));
        assert!(state.is_running());

        let cat = state.pursuer.unwrap();
        assert_eq!(cat.pos, Vec2::splat(45.0));
        assert_eq!(cat.vel, Vec2::splat(settings().bounce_speed));
        assert!(state.target.is_none());
    }

    #[test]
    fn test_chase_waits_for_both_assets() {
        let mut state = GameState::new(GameMode::Chase, Arena::new(200.0, 100.0), &settings(), 1);

        assert!(!state.asset_ready(Role::Target, Vec2::splat(20.0)));
        assert!(!state.is_running());
        assert!(state.asset_ready(Role::Pursuer, Vec2::splat(10.0)));
        assert_eq!(state.phase, GamePhase::Running);

        let mouse = state.target.unwrap();
        assert_eq!(mouse.pos, Vec2::new(180.0, 80.0));
        assert_eq!(mouse.size, Vec2::splat(20.0));

        // Late duplicate report does not restart
        assert!(!state.asset_ready(Role::Pursuer, Vec2::splat(10.0)));
    }

    #[test]
    fn test_actors_order() {
        let mut state = GameState::new(GameMode::Chase, Arena::new(100.0, 100.0), &settings(), 1);
        state.asset_ready(Role::Pursuer, Vec2::splat(10.0));
        state.asset_ready(Role::Target, Vec2::splat(10.0));

        let roles: Vec<Role> = state.actors().map(|(role, _)| role).collect();
        assert_eq!(roles, vec![Role::Pursuer, Role::Target]);
        assert!(state.actor(Role::Target).is_some());
    }

    #[test]
    fn test_game_mode_from_str() {
        assert_eq!(GameMode::from_str("Bounce"), Some(GameMode::Bounce));
        assert_eq!(GameMode::from_str("CHASE"), Some(GameMode::Chase));
        assert_eq!(GameMode::from_str("tag"), None);
        assert!(GameMode::Chase.has_target());
        assert!(!GameMode::Bounce.has_target());
    }
}
