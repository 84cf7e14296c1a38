//! Courant number check and the depth precondition.
use ndarray::ArrayView1;
use tracing::info;

use crate::error::{Result, WaveError};
use crate::grid::TemporalGrid;

/// `hmax * dt / dx`
#[inline]
pub fn courant_number(hmax: f64, dx: f64, dt: f64) -> f64 {
    hmax * dt / dx
}

/// Outcome of the stability check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement {
    pub time: TemporalGrid,
    /// Step count the caller asked for.
    pub requested_steps: usize,
    pub courant: f64,
}

impl Refinement {
    /// Whether the guard replaced the requested time grid.
    pub fn refined(&self) -> bool {
        self.time.steps() != self.requested_steps
    }
}

/// Makes the time grid satisfy `hmax * dt / dx <= 1`.
///
/// If the requested grid is too coarse the step count is replaced by
/// `ceil(T / (dx / hmax))`. This happens at most once per solve and overrides
/// whatever resolution the caller asked for.
pub fn enforce(hmax: f64, dx: f64, time: TemporalGrid) -> Result<Refinement> {
    let requested_steps = time.steps();
    let courant = courant_number(hmax, dx, time.dt());
    if courant <= 1. {
        return Ok(Refinement { time, requested_steps, courant });
    }

    let steps = (time.final_time() / (dx / hmax)).ceil() as usize;
    let refined = TemporalGrid::new(steps, time.final_time())?;
    let courant = courant_number(hmax, dx, refined.dt());
    info!(requested_steps,
          effective_steps = steps,
          courant,
          "time step refined for stability");
    Ok(Refinement {
        time: refined,
        requested_steps,
        courant,
    })
}

/// Refuses a seabed that reaches the still-water level `h_0`.
pub fn check_depth(seabed: ArrayView1<f64>, still_water: f64) -> Result<()> {
    let seabed_max = seabed.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    if seabed_max >= still_water {
        return Err(WaveError::InsufficientDepth {
            seabed_max,
            still_water,
        });
    }
    Ok(())
}
