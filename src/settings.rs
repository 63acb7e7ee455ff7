//! Game settings and preferences
//!
//! Controls which power-meter front-end the player uses and how forgiving
//! the accuracy model is. Read from an optional JSON file; any key left out
//! keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::sim::power::{HoldToCharge, OscillatingBar, PowerInput};

/// Power input front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PowerInputMode {
    /// Hold the button; the meter fills and wraps back to zero past full
    #[default]
    HoldToCharge,
    /// Click to start a bouncing bar, click again to lock it in
    OscillatingBar,
}

impl PowerInputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerInputMode::HoldToCharge => "Hold to charge",
            PowerInputMode::OscillatingBar => "Oscillating bar",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hold" | "hold-to-charge" => Some(PowerInputMode::HoldToCharge),
            "bar" | "oscillating" | "oscillating-bar" => Some(PowerInputMode::OscillatingBar),
            _ => None,
        }
    }
}

/// Meter range (fractions of full power) with no accuracy penalty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerfectZone {
    pub start: f32,
    pub end: f32,
}

impl PerfectZone {
    /// Distance from `level` to the nearest edge of the zone (0 inside)
    pub fn distance(&self, level: f32) -> f32 {
        if level < self.start {
            self.start - level
        } else if level > self.end {
            level - self.end
        } else {
            0.0
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which power meter the player uses
    pub power_input: PowerInputMode,
    /// Meter fraction gained per tick while holding (hold-to-charge)
    pub charge_rate: f32,
    /// Meter fraction travelled per tick (oscillating bar)
    pub bar_speed: f32,
    /// Sweet spot of the oscillating bar
    pub perfect_zone: PerfectZone,
    /// Meter distance outside the perfect zone over which accuracy drops to zero
    pub accuracy_falloff: f32,
    /// Aim error (radians) at zero accuracy
    pub max_angle_error: f32,
    /// Seed for the accuracy error RNG
    pub seed: u64,
    /// Course loaded when a session starts
    pub start_course: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            power_input: PowerInputMode::HoldToCharge,
            // 0.3 per tick on a 20-power meter
            charge_rate: 0.015,
            bar_speed: 0.02,
            perfect_zone: PerfectZone {
                start: 0.85,
                end: 0.95,
            },
            accuracy_falloff: 0.5,
            max_angle_error: 0.25,
            seed: 0x5EED_F00D,
            start_course: "meadow".to_string(),
        }
    }
}

impl Settings {
    /// Create settings for a power input mode (everything else default)
    pub fn with_power_input(mode: PowerInputMode) -> Self {
        Self {
            power_input: mode,
            ..Self::default()
        }
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a file, falling back to defaults if it is missing or broken
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default settings ({}): {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Build the power meter front-end selected by these settings
    pub fn build_power_input(&self) -> Box<dyn PowerInput> {
        match self.power_input {
            PowerInputMode::HoldToCharge => Box::new(HoldToCharge::new(self.charge_rate)),
            PowerInputMode::OscillatingBar => Box::new(OscillatingBar::new(
                self.bar_speed,
                self.perfect_zone,
                self.accuracy_falloff,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "power_input": "OscillatingBar", "seed": 7 }"#)
            .expect("valid settings");
        assert_eq!(settings.power_input, PowerInputMode::OscillatingBar);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.start_course, "meadow");
        assert_eq!(settings.charge_rate, Settings::default().charge_rate);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ power_input: "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/definitely/not/here/fairway.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(
            PowerInputMode::from_str("Bar"),
            Some(PowerInputMode::OscillatingBar)
        );
        assert_eq!(
            PowerInputMode::from_str("hold"),
            Some(PowerInputMode::HoldToCharge)
        );
        assert_eq!(PowerInputMode::from_str("telepathy"), None);
    }

    #[test]
    fn test_perfect_zone_distance() {
        let zone = PerfectZone {
            start: 0.8,
            end: 0.9,
        };
        assert_eq!(zone.distance(0.85), 0.0);
        assert!((zone.distance(0.5) - 0.3).abs() < 1e-6);
        assert!((zone.distance(1.0) - 0.1).abs() < 1e-6);
    }
}
