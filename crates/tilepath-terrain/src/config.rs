//! Noise configuration and the raw-noise → passability mapping.

use std::fmt;

use tilepath_core::MAX_PASSABILITY;

/// Passability assigned to the middle tier of [`PassabilityMode::Tiered`].
pub const ROUGH_PASSABILITY: u8 = 50;

/// How a raw noise value is turned into a 0–100 passability weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PassabilityMode {
    /// Below the iso value is free, everything else is a wall.
    #[default]
    BlackWhite,
    /// Free below the iso value, rough within `transition_width` above it,
    /// wall beyond.
    Tiered,
    /// Linear ramp across a band of `transition_width` centred on the iso
    /// value, quantized into `step_count + 2` levels.
    Smooth,
}

/// Parameters of the octave noise field and its passability mapping.
///
/// A plain value record: nothing here is derived or cached, so it can be
/// serialized and compared as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NoiseConfig {
    pub seed: u32,
    /// Input scale of the first octave. Zero disables noise entirely and
    /// yields a fully passable grid.
    pub frequency: f32,
    /// Output scale of the first octave.
    pub amplitude: f32,
    /// Frequency multiplier applied after each octave.
    pub octave_frequency: f32,
    /// Amplitude multiplier applied after each octave.
    pub octave_amplitude: f32,
    pub octave_count: u32,
    pub mode: PassabilityMode,
    /// Intermediate levels of [`PassabilityMode::Smooth`].
    pub step_count: u32,
    /// Band width used by [`PassabilityMode::Tiered`] and
    /// [`PassabilityMode::Smooth`].
    pub transition_width: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.1,
            amplitude: 1.0,
            octave_frequency: 2.0,
            octave_amplitude: 0.5,
            octave_count: 4,
            mode: PassabilityMode::BlackWhite,
            step_count: 3,
            transition_width: 0.2,
        }
    }
}

impl NoiseConfig {
    /// A configuration that produces an open, fully passable grid.
    pub fn flat() -> Self {
        Self {
            frequency: 0.0,
            ..Self::default()
        }
    }

    /// Whether noise evaluation is skipped.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.frequency == 0.0
    }

    /// Check that the configuration describes a usable field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
            ("octave_frequency", self.octave_frequency),
            ("octave_amplitude", self.octave_amplitude),
            ("transition_width", self.transition_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field: name, value });
            }
        }
        if self.frequency < 0.0 {
            return Err(ConfigError::NegativeFrequency(self.frequency));
        }
        if !self.is_flat() && self.octave_count == 0 {
            return Err(ConfigError::NoOctaves);
        }
        if self.mode != PassabilityMode::BlackWhite && self.transition_width <= 0.0 {
            return Err(ConfigError::TransitionWidth(self.transition_width));
        }
        Ok(())
    }

    /// Map a raw noise `value` to a passability weight relative to
    /// `iso_value`.
    pub fn passability(&self, value: f32, iso_value: f32) -> u8 {
        match self.mode {
            PassabilityMode::BlackWhite => {
                if value < iso_value {
                    MAX_PASSABILITY
                } else {
                    0
                }
            }
            PassabilityMode::Tiered => {
                if value < iso_value {
                    MAX_PASSABILITY
                } else if value < iso_value + self.transition_width {
                    ROUGH_PASSABILITY
                } else {
                    0
                }
            }
            PassabilityMode::Smooth => {
                let w = self.transition_width;
                let t = ((iso_value + w / 2.0 - value) / w).clamp(0.0, 1.0);
                let levels = (self.step_count + 1) as f32;
                let q = (t * levels).round() / levels;
                (q * f32::from(MAX_PASSABILITY)).round() as u8
            }
        }
    }
}

/// Errors reported by [`NoiseConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A float parameter is NaN or infinite.
    NotFinite { field: &'static str, value: f32 },
    NegativeFrequency(f32),
    /// Noise is enabled but no octave would be sampled.
    NoOctaves,
    /// The transition band of a non-binary mode is empty.
    TransitionWidth(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field, value } => {
                write!(f, "noise config: {field} must be finite, got {value}")
            }
            Self::NegativeFrequency(v) => {
                write!(f, "noise config: frequency must not be negative, got {v}")
            }
            Self::NoOctaves => write!(f, "noise config: octave_count must be at least 1"),
            Self::TransitionWidth(v) => {
                write!(f, "noise config: transition_width must be positive, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = NoiseConfig {
            seed: 9,
            mode: PassabilityMode::Smooth,
            ..NoiseConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"smooth\""));
        let back: NoiseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let c: NoiseConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(c.seed, 5);
        assert_eq!(c.octave_count, NoiseConfig::default().octave_count);
    }
}
