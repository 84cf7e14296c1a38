//! TOML description of a run.
//!
//! ```toml
//! [grid]
//! spatial_points = 300
//! time_points = 1000
//! length = 100.0
//! final_time = 52.0
//!
//! [fields]
//! seabed = { kind = "gaussian", amplitude = 1.0, center = 60.0, width = 10.0 }
//! displacement = { kind = "gaussian", amplitude = 2.0, center = 15.0, width = 15.0, offset = 1.3 }
//! velocity = 0.0
//!
//! [output]
//! mode = "plot"
//! path = "travelwave.png"
//! ```
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, WaveError};
use crate::field::FieldSpec;
use crate::integrator::Problem;
use crate::output::OutputMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub spatial_points: usize,
    pub time_points: usize,
    pub length: f64,
    pub final_time: f64,
}

impl GridConfig {
    fn validate(&self) -> Result<()> {
        if self.spatial_points < 2 {
            return Err(WaveError::Config(format!(
                "spatial_points must be at least 2, got {}",
                self.spatial_points
            )));
        }
        if self.time_points < 1 {
            return Err(WaveError::Config("time_points must be at least 1".into()));
        }
        if !(self.length.is_finite() && self.length > 0.) {
            return Err(WaveError::Config(format!("length must be positive, got {}", self.length)));
        }
        if !(self.final_time.is_finite() && self.final_time >= 0.) {
            return Err(WaveError::Config(format!(
                "final_time must be non-negative, got {}",
                self.final_time
            )));
        }
        Ok(())
    }
}

/// Each field is a number or a profile table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldsConfig {
    pub seabed: toml::Value,
    pub displacement: toml::Value,
    #[serde(default = "default_velocity")]
    pub velocity: toml::Value,
}

fn default_velocity() -> toml::Value {
    toml::Value::Float(0.)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_chart_path")]
    pub path: PathBuf,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_mode() -> String {
    "plot".to_string()
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("travelwave.png")
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    400
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig {
            mode: default_mode(),
            path: default_chart_path(),
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default = "default_interval")]
    pub interval_ms: u32,
    #[serde(default = "default_time_per_frame")]
    pub time_per_frame: f64,
    #[serde(default = "default_animation_path")]
    pub path: PathBuf,
}

fn default_frames() -> usize {
    100
}

fn default_interval() -> u32 {
    150
}

fn default_time_per_frame() -> f64 {
    1.
}

fn default_animation_path() -> PathBuf {
    PathBuf::from("travelwave.gif")
}

impl Default for AnimationConfig {
    fn default() -> AnimationConfig {
        AnimationConfig {
            frames: default_frames(),
            interval_ms: default_interval(),
            time_per_frame: default_time_per_frame(),
            path: default_animation_path(),
        }
    }
}

impl AnimationConfig {
    fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(WaveError::Config("animation needs at least one frame".into()));
        }
        if self.interval_ms == 0 {
            return Err(WaveError::Config("interval_ms must be positive".into()));
        }
        if !(self.time_per_frame.is_finite() && self.time_per_frame > 0.) {
            return Err(WaveError::Config(format!(
                "time_per_frame must be positive, got {}",
                self.time_per_frame
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    pub fields: FieldsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationConfig>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WaveError::Config(format!("failed to read config file '{}': {}", path.display(), e))
        })?;
        content.parse()
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.mode()?;
        if self.output.width == 0 || self.output.height == 0 {
            return Err(WaveError::Config(format!(
                "image dimensions must be positive (width={}, height={})",
                self.output.width,
                self.output.height
            )));
        }
        if let Some(ref animation) = self.animation {
            animation.validate()?;
        }
        self.problem()?;

        let requested_dt = self.grid.final_time / self.grid.time_points as f64;
        if requested_dt > self.grid.length / self.grid.spatial_points as f64 {
            warn!(requested_dt,
                  "time step is larger than the grid spacing; it may be refined for stability");
        }
        Ok(())
    }

    pub fn mode(&self) -> Result<OutputMode> {
        self.output.mode.parse()
    }

    /// Builds the problem; field values other than numbers and profiles are refused.
    pub fn problem(&self) -> Result<Problem> {
        let seabed = FieldSpec::from_value("seabed", &self.fields.seabed)?;
        let displacement = FieldSpec::from_value("displacement", &self.fields.displacement)?;
        let velocity = FieldSpec::from_value("velocity", &self.fields.velocity)?;
        Ok(Problem::new(self.grid.spatial_points,
                        self.grid.time_points,
                        self.grid.length,
                        self.grid.final_time)
            .seabed(seabed)
            .displacement(displacement)
            .velocity(velocity))
    }
}

impl FromStr for Config {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(s).map_err(|e| WaveError::Config(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

fn gaussian(amplitude: f64, center: f64, width: f64, offset: f64) -> toml::Value {
    let mut t = toml::map::Map::new();
    t.insert("kind".into(), "gaussian".into());
    t.insert("amplitude".into(), amplitude.into());
    t.insert("center".into(), center.into());
    t.insert("width".into(), width.into());
    if offset != 0. {
        t.insert("offset".into(), offset.into());
    }
    toml::Value::Table(t)
}

/// A hump of water released at `x = 15` travelling over a seabed ridge at `x = 60`.
impl Default for Config {
    fn default() -> Config {
        Config {
            grid: GridConfig {
                spatial_points: 300,
                time_points: 1000,
                length: 100.,
                final_time: 52.,
            },
            fields: FieldsConfig {
                seabed: gaussian(1., 60., 10., 0.),
                displacement: gaussian(2., 15., 15., 1.3),
                velocity: default_velocity(),
            },
            output: OutputConfig::default(),
            animation: None,
        }
    }
}
