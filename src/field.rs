//! Turning field descriptions (seabed, initial displacement, initial velocity)
//! into arrays sampled on the spatial grid.
use std::f64::consts::PI;
use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};
use crate::grid::SpatialGrid;

/// A field given either as one value for the whole domain or as a function of `x`.
///
/// The choice is made once, when the problem is built; `sample` is the only place
/// that looks at the variant.
pub enum FieldSpec {
    Constant(f64),
    Sampled(Box<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl FieldSpec {
    pub fn constant(value: f64) -> FieldSpec {
        FieldSpec::Constant(value)
    }

    pub fn sampled<F>(f: F) -> FieldSpec
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        FieldSpec::Sampled(Box::new(f))
    }

    /// Evaluates the field at every point of `grid`.
    pub fn sample(&self, grid: &SpatialGrid) -> Array1<f64> {
        match *self {
            FieldSpec::Constant(c) => Array1::from_elem(grid.len(), c),
            FieldSpec::Sampled(ref f) => grid.points().mapv(|x| f(x)),
        }
    }

    /// Builds a spec from an untyped configuration value.
    ///
    /// Numbers become constants and tables are read as a [`Profile`]; anything
    /// else is refused with `UnsupportedSpecType`.
    pub fn from_value(field: &str, value: &toml::Value) -> Result<FieldSpec> {
        match *value {
            toml::Value::Integer(i) => Ok(FieldSpec::Constant(i as f64)),
            toml::Value::Float(f) => Ok(FieldSpec::Constant(f)),
            toml::Value::Table(_) => value
                .clone()
                .try_into::<Profile>()
                .map(FieldSpec::from)
                .map_err(|e| unsupported(field, e.message().trim())),
            ref other => Err(unsupported(field, other.type_str())),
        }
    }

    /// Parses a command line argument: a number, `gaussian:A:C:W[:OFFSET]` or
    /// `cosine:A:C:HALF_WIDTH`.
    pub fn parse(field: &str, arg: &str) -> Result<FieldSpec> {
        let arg = arg.trim();
        if let Ok(c) = arg.parse::<f64>() {
            return Ok(FieldSpec::Constant(c));
        }
        let mut parts = arg.split(':');
        let kind = parts.next().unwrap_or_default().to_ascii_lowercase();
        let params = parts.map(|p| p.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| unsupported(field, arg))?;
        let profile = match (kind.as_str(), params.as_slice()) {
            ("gaussian", &[amplitude, center, width]) => Profile::Gaussian {
                amplitude,
                center,
                width,
                offset: 0.,
            },
            ("gaussian", &[amplitude, center, width, offset]) => Profile::Gaussian {
                amplitude,
                center,
                width,
                offset,
            },
            ("cosine", &[amplitude, center, half_width]) |
            ("cosine_bump", &[amplitude, center, half_width]) => Profile::CosineBump {
                amplitude,
                center,
                half_width,
            },
            _ => return Err(unsupported(field, arg)),
        };
        Ok(profile.into())
    }
}

fn unsupported(field: &str, found: &str) -> WaveError {
    WaveError::UnsupportedSpecType {
        field: field.to_string(),
        found: found.to_string(),
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FieldSpec::Constant(c) => f.debug_tuple("Constant").field(&c).finish(),
            FieldSpec::Sampled(_) => f.write_str("Sampled(..)"),
        }
    }
}

impl From<f64> for FieldSpec {
    fn from(value: f64) -> FieldSpec {
        FieldSpec::Constant(value)
    }
}

impl From<Profile> for FieldSpec {
    fn from(profile: Profile) -> FieldSpec {
        FieldSpec::sampled(move |x| profile.eval(x))
    }
}

/// Analytic shapes used for seabeds and initial humps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Profile {
    /// `offset + amplitude * exp(-(x - center)² / width)`
    Gaussian {
        amplitude: f64,
        center: f64,
        width: f64,
        #[serde(default)]
        offset: f64,
    },
    /// Half a cosine period of height `amplitude` on `(center - half_width, center + half_width)`,
    /// zero elsewhere.
    CosineBump {
        amplitude: f64,
        center: f64,
        half_width: f64,
    },
}

impl Profile {
    pub fn eval(&self, x: f64) -> f64 {
        match *self {
            Profile::Gaussian { amplitude, center, width, offset } => {
                offset + amplitude * (-(x - center).powi(2) / width).exp()
            }
            Profile::CosineBump { amplitude, center, half_width } => {
                if (x - center).abs() < half_width {
                    amplitude * (PI * (x - center) / (2. * half_width)).cos()
                } else {
                    0.
                }
            }
        }
    }
}
