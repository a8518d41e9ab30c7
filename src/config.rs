//! Configuration of the simulation, read from RON.
//!
//! Every field is optional in the file; missing fields take the values of the classic ball demo.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Region, RegionError, Rgb, MAX_SPEED};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size of the drawing surface the region is placed on.
    pub surface: SurfaceConfig,
    pub region: RegionConfig,
    /// Clamped to `MIN_BALLS..=MAX_BALLS` when the simulation is created.
    pub ball_count: usize,
    pub diameter: i32,
    pub max_speed: i32,
    pub frame_delay_ms: u64,
    /// Fixed seed for reproducible runs. A random seed is chosen if absent.
    pub seed: Option<u64>,
    /// Colors assigned to the balls in turn.
    pub palette: Vec<Rgb>,
}

impl Config {
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Checks the settings that are not validated by the region and ball constructors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::ZeroFrameDelay);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            region: RegionConfig::default(),
            ball_count: 5,
            diameter: 25,
            max_speed: MAX_SPEED,
            frame_delay_ms: 40,
            seed: None,
            palette: vec![
                Rgb::new(30, 60, 180),
                Rgb::new(180, 40, 40),
                Rgb::new(40, 140, 60),
                Rgb::new(150, 90, 20),
                Rgb::new(110, 40, 150),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 500,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RegionConfig {
    pub fn build(&self) -> Result<Region, RegionError> {
        Region::new(self.left, self.top, self.right, self.bottom)
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            left: 100,
            top: 100,
            right: 500,
            bottom: 400,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("frame_delay_ms must be at least 1")]
    ZeroFrameDelay,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.region.build().unwrap(), Region::new(100, 100, 500, 400).unwrap());
        assert_eq!(config.ball_count, 5);
        assert_eq!(config.diameter, 25);
        assert_eq!(config.max_speed, 7);
        assert_eq!(config.frame_delay(), Duration::from_millis(40));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_empty() {
        assert_eq!(Config::from_ron("()").unwrap(), Config::default());
    }

    #[test]
    fn test_config_partial() {
        let config = Config::from_ron(
            r#"(
                region: (right: 300),
                ball_count: 12,
                seed: Some(7),
                palette: [(r: 1, g: 2, b: 3)],
            )"#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                region: RegionConfig {
                    right: 300,
                    ..RegionConfig::default()
                },
                ball_count: 12,
                seed: Some(7),
                palette: vec![Rgb::new(1, 2, 3)],
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_config_invalid() {
        assert!(matches!(
            Config::from_ron("(ball_count: \"many\")"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_zero_frame_delay() {
        assert!(matches!(
            Config::from_ron("(frame_delay_ms: 0)"),
            Err(ConfigError::ZeroFrameDelay)
        ));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_missing_file() {
        let path = std::env::temp_dir().join("box-bounce-missing-config.ron");
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_config_load() {
        let path = std::env::temp_dir().join(format!("box-bounce-{}.ron", std::process::id()));
        std::fs::write(&path, "(diameter: 12, frame_delay_ms: 20)").unwrap();
        let config = Config::load(&path);
        let _ = std::fs::remove_file(&path);

        let config = config.unwrap();
        assert_eq!(config.diameter, 12);
        assert_eq!(config.frame_delay(), Duration::from_millis(20));
    }
}
