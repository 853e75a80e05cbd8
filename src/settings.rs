//! Game settings
//!
//! Persisted in LocalStorage on the web, read from an optional JSON file
//! natively. Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{AimPoint, Arena, GameMode};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Forced game mode. `None` picks chase when a mouse sprite exists.
    pub mode: Option<GameMode>,

    // === Speeds (pixels per frame) ===
    /// Cat speed while bouncing alone
    pub bounce_speed: f32,
    /// Cat speed while chasing
    pub chase_speed: f32,
    /// Mouse speed
    pub target_speed: f32,
    /// Where the cat aims on the mouse
    pub aim: AimPoint,

    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,

    // === Headless runs ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Frame cap for headless runs
    pub max_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: None,

            bounce_speed: BOUNCE_SPEED,
            chase_speed: CHASE_SPEED,
            target_speed: TARGET_SPEED,
            aim: AimPoint::Corner,

            seed: None,

            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            sprite_width: FALLBACK_SPRITE_SIZE,
            sprite_height: FALLBACK_SPRITE_SIZE,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, sanitizing speeds
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Force speeds non-negative and finite
    pub fn sanitize(&mut self) {
        let fix = |v: f32, default: f32| if v.is_finite() { v.abs() } else { default };
        self.bounce_speed = fix(self.bounce_speed, BOUNCE_SPEED);
        self.chase_speed = fix(self.chase_speed, CHASE_SPEED);
        self.target_speed = fix(self.target_speed, TARGET_SPEED);
    }

    /// Mode to play, given whether the page offers a mouse sprite
    pub fn effective_mode(&self, target_available: bool) -> GameMode {
        match self.mode {
            Some(GameMode::Chase) if !target_available => {
                log::warn!("chase mode requested but no mouse sprite, bouncing instead");
                GameMode::Bounce
            }
            Some(mode) => mode,
            None if target_available => GameMode::Chase,
            None => GameMode::Bounce,
        }
    }

    /// Arena for headless runs
    pub fn headless_arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "cat_chase_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_speed() {
        let settings = Settings::default();
        assert_eq!(settings.bounce_speed, 2.0);
        assert_eq!(settings.aim, AimPoint::Corner);
        assert_eq!(settings.mode, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "mode": "bounce", "seed": 7 }"#).unwrap();
        assert_eq!(settings.mode, Some(GameMode::Bounce));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.chase_speed, CHASE_SPEED);
    }

    #[test]
    fn test_negative_speeds_sanitized() {
        let settings =
            Settings::from_json(r#"{ "bounce_speed": -3.0, "aim": "center" }"#).unwrap();
        assert_eq!(settings.bounce_speed, 3.0);
        assert_eq!(settings.aim, AimPoint::Center);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "mode": "tag" }"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.mode = Some(GameMode::Chase);
        settings.seed = Some(123);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_effective_mode() {
        let auto = Settings::default();
        assert_eq!(auto.effective_mode(true), GameMode::Chase);
        assert_eq!(auto.effective_mode(false), GameMode::Bounce);

        let mut forced = Settings::default();
        forced.mode = Some(GameMode::Bounce);
        assert_eq!(forced.effective_mode(true), GameMode::Bounce);
        // A mouse sprite on the page is unused (and hidden) when bouncing
        assert!(!forced.effective_mode(true).has_target());
        forced.mode = Some(GameMode::Chase);
        assert_eq!(forced.effective_mode(false), GameMode::Bounce);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_from(Some(std::path::Path::new("/nonexistent/cat.json")));
        assert_eq!(settings, Settings::default());
    }
}
