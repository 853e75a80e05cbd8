//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per scheduled frame
//! - Seeded RNG only
//! - Stable presentation order (pursuer, then target)
//! - No DOM or platform dependencies

pub mod actor;
pub mod barrier;
pub mod bounce;
pub mod collision;
pub mod pursuit;
pub mod state;
pub mod tick;

pub use actor::{Actor, Arena, Role};
pub use barrier::{ReadyBarrier, ReadySizes};
pub use bounce::{WallHits, step};
pub use collision::detect_collision;
pub use pursuit::{AimPoint, pursue};
pub use state::{GameMode, GamePhase, GameState, Speeds};
pub use tick::{FrameOutcome, present, run_frames, tick};
