use std::fmt;

use serde::{Deserialize, Serialize};
use tilepath_core::Point;
use tilepath_paths::SearchConfig;
use tilepath_terrain::{ConfigError, NoiseConfig};

/// Everything needed to set up a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub size: Point,
    pub noise: NoiseConfig,
    /// Noise values below this are free terrain.
    pub iso_value: f32,
    pub search: SearchConfig,
    /// Advance searches one expansion per tick and show the frontier,
    /// instead of solving each route at once.
    pub stepwise: bool,
    /// Mark the remaining route in the display buffer.
    pub show_path: bool,
    /// Seed for endpoint picking.
    pub seed: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            size: Point::new(20, 20),
            noise: NoiseConfig::default(),
            iso_value: 0.5,
            search: SearchConfig::default(),
            stepwise: false,
            show_path: true,
            seed: 0,
        }
    }
}

impl PlaygroundConfig {
    pub fn validate(&self) -> Result<(), PlaygroundError> {
        if self.size.x <= 0 || self.size.y <= 0 {
            return Err(PlaygroundError::EmptyGrid(self.size));
        }
        let m = self.search.heuristic_multiplier;
        if !m.is_finite() || m < 0.0 {
            return Err(PlaygroundError::HeuristicMultiplier(m));
        }
        if !self.iso_value.is_finite() {
            return Err(PlaygroundError::IsoValue(self.iso_value));
        }
        self.noise.validate().map_err(PlaygroundError::Noise)
    }
}

/// Errors reported when building a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub enum PlaygroundError {
    EmptyGrid(Point),
    HeuristicMultiplier(f32),
    IsoValue(f32),
    Noise(ConfigError),
}

impl fmt::Display for PlaygroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid(size) => write!(f, "grid size must be positive, got {size}"),
            Self::HeuristicMultiplier(m) => {
                write!(f, "heuristic multiplier must be finite and >= 0, got {m}")
            }
            Self::IsoValue(v) => write!(f, "iso value must be finite, got {v}"),
            Self::Noise(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for PlaygroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Noise(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(PlaygroundConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let c = PlaygroundConfig {
            size: Point::new(0, 5),
            ..PlaygroundConfig::default()
        };
        assert_eq!(c.validate(), Err(PlaygroundError::EmptyGrid(Point::new(0, 5))));

        let mut c = PlaygroundConfig::default();
        c.search.heuristic_multiplier = -1.0;
        assert_eq!(c.validate(), Err(PlaygroundError::HeuristicMultiplier(-1.0)));

        let mut c = PlaygroundConfig::default();
        c.noise.octave_count = 0;
        let err = c.validate().unwrap_err();
        assert_eq!(err, PlaygroundError::Noise(ConfigError::NoOctaves));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn json_with_partial_fields() {
        let c: PlaygroundConfig = serde_json::from_str(
            r#"{
                "size": {"x": 32, "y": 16},
                "noise": {"seed": 4, "mode": "tiered"},
                "search": {"algorithm": "dijkstra4"},
                "stepwise": true
            }"#,
        )
        .unwrap();
        assert_eq!(c.size, Point::new(32, 16));
        assert_eq!(c.noise.seed, 4);
        assert_eq!(c.noise.mode, tilepath_terrain::PassabilityMode::Tiered);
        assert_eq!(c.search.algorithm, tilepath_paths::Algorithm::Dijkstra4);
        assert_eq!(c.search.heuristic_multiplier, 1.0);
        assert!(c.stepwise);
        assert!(c.show_path);

        let back: PlaygroundConfig =
            serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
