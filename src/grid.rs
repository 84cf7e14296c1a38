use ndarray::Array1;

use crate::error::{Result, WaveError};

/// `mx + 1` uniformly spaced points covering `[0, length]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialGrid {
    x: Array1<f64>,
    dx: f64,
}

impl SpatialGrid {
    pub fn new(intervals: usize, length: f64) -> Result<SpatialGrid> {
        if intervals < 2 {
            return Err(WaveError::InvalidGrid(format!(
                "need at least 2 spatial intervals, got {}",
                intervals
            )));
        }
        if !(length.is_finite() && length > 0.) {
            return Err(WaveError::InvalidGrid(format!(
                "domain length must be positive, got {}",
                length
            )));
        }
        let x = Array1::linspace(0., length, intervals + 1);
        let dx = x[1] - x[0];
        Ok(SpatialGrid { x, dx })
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.x
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Number of grid points, `mx + 1`.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn length(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

/// `mt + 1` uniformly spaced time levels covering `[0, final_time]`.
///
/// Only the step count and spacing are stored; `points` materializes the levels
/// when someone needs them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalGrid {
    steps: usize,
    final_time: f64,
    dt: f64,
}

impl TemporalGrid {
    pub fn new(steps: usize, final_time: f64) -> Result<TemporalGrid> {
        if steps < 1 {
            return Err(WaveError::InvalidGrid("need at least 1 time step".into()));
        }
        if !(final_time.is_finite() && final_time >= 0.) {
            return Err(WaveError::InvalidGrid(format!(
                "final time must be non-negative, got {}",
                final_time
            )));
        }
        Ok(TemporalGrid {
            steps,
            final_time,
            dt: final_time / steps as f64,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn final_time(&self) -> f64 {
        self.final_time
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn points(&self) -> Array1<f64> {
        Array1::linspace(0., self.final_time, self.steps + 1)
    }
}
