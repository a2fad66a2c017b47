//! Invitation configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock invitation. Files only need to name what they override:
//!
//! ```json
//! {
//!   "details": { "city": "上海站", "city_subtitle": "SHANGHAI" },
//!   "timing": { "star_refresh_ms": 2000 }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_tracks, EventDetails, Track, TrackCatalog};
use crate::error::{InvitationError, InvitationResult};
use crate::viewport::DEFAULT_NARROW_BREAKPOINT;

/// Delay before the player auto-expands after an RSVP on narrow viewports.
pub const DEFAULT_AUTO_EXPAND_DELAY_MS: u64 = 1000;

/// Period of the ambient star drift.
pub const DEFAULT_STAR_REFRESH_MS: u64 = 3000;

/// Top-level configuration for a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    pub details: EventDetails,
    pub tracks: Vec<Track>,
    pub timing: TimingConfig,
    pub layout: LayoutConfig,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            details: EventDetails::default(),
            tracks: default_tracks(),
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

/// Timer periods and delays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub star_refresh_ms: u64,
    pub auto_expand_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            star_refresh_ms: DEFAULT_STAR_REFRESH_MS,
            auto_expand_delay_ms: DEFAULT_AUTO_EXPAND_DELAY_MS,
        }
    }
}

impl TimingConfig {
    pub fn star_refresh(&self) -> Duration {
        Duration::from_millis(self.star_refresh_ms)
    }

    pub fn auto_expand_delay(&self) -> Duration {
        Duration::from_millis(self.auto_expand_delay_ms)
    }
}

/// Breakpoint and density settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub narrow_breakpoint_px: u32,
    pub stars_wide: usize,
    pub stars_narrow: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT,
            stars_wide: 8,
            stars_narrow: 5,
        }
    }
}

impl LayoutConfig {
    /// Number of star markers for the given viewport class.
    pub fn star_count(&self, narrow: bool) -> usize {
        if narrow {
            self.stars_narrow
        } else {
            self.stars_wide
        }
    }
}

impl InvitationConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json(text: &str) -> InvitationResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> InvitationResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!("Loaded invitation config from {:?}", path);
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> InvitationResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Reject values the card cannot work with.
    pub fn validate(&self) -> InvitationResult<()> {
        if self.tracks.is_empty() {
            return Err(InvitationError::EmptyCatalog);
        }
        if self.layout.narrow_breakpoint_px == 0 {
            return Err(InvitationError::InvalidConfig(
                "narrow_breakpoint_px must be positive".to_string(),
            ));
        }
        if self.timing.star_refresh_ms == 0 {
            return Err(InvitationError::InvalidConfig(
                "star_refresh_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the first track's source (used by `--audio`).
    pub fn override_audio(&mut self, source: impl Into<String>) {
        if let Some(first) = self.tracks.first_mut() {
            first.source = source.into();
        }
    }

    pub fn catalog(&self) -> InvitationResult<TrackCatalog> {
        TrackCatalog::new(self.tracks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = InvitationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.star_refresh(), Duration::from_secs(3));
        assert_eq!(config.timing.auto_expand_delay(), Duration::from_secs(1));
        assert_eq!(config.layout.star_count(true), 5);
        assert_eq!(config.layout.star_count(false), 8);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = InvitationConfig::from_json("{}").unwrap();
        assert_eq!(config, InvitationConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            InvitationConfig::from_json(r#"{ "timing": { "star_refresh_ms": 1500 } }"#).unwrap();
        assert_eq!(config.timing.star_refresh_ms, 1500);
        assert_eq!(config.timing.auto_expand_delay_ms, DEFAULT_AUTO_EXPAND_DELAY_MS);
    }

    #[test]
    fn test_empty_tracks_rejected() {
        let result = InvitationConfig::from_json(r#"{ "tracks": [] }"#);
        assert!(matches!(result, Err(InvitationError::EmptyCatalog)));
    }

    #[test]
    fn test_zero_breakpoint_rejected() {
        let result =
            InvitationConfig::from_json(r#"{ "layout": { "narrow_breakpoint_px": 0 } }"#);
        assert!(matches!(result, Err(InvitationError::InvalidConfig(_))));
    }

    #[test]
    fn test_override_audio() {
        let mut config = InvitationConfig::default();
        config.override_audio("/tmp/other.mp3");
        assert_eq!(config.tracks[0].source, "/tmp/other.mp3");
    }
}
