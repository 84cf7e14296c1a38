//! Handing a finished solve to the caller or to a renderer.
use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

use crate::error::{Result, WaveError};
use crate::integrator::{Problem, Solution};

/// What to do with the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Return `(x, seabed, displacement)`.
    Data,
    /// Draw the final state and return nothing.
    Plot,
}

impl FromStr for OutputMode {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<OutputMode> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("data") {
            Ok(OutputMode::Data)
        } else if s.eq_ignore_ascii_case("plot") {
            Ok(OutputMode::Plot)
        } else {
            Err(WaveError::UnsupportedMode(s.to_string()))
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            OutputMode::Data => "data",
            OutputMode::Plot => "plot",
        })
    }
}

/// The three arrays of a static chart plus what is needed to frame it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub x: Array1<f64>,
    pub displacement: Array1<f64>,
    pub seabed: Array1<f64>,
    /// Highest initial displacement; fixes the top of the y axis.
    pub peak_displacement: f64,
    pub final_time: f64,
}

/// Axis ranges of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PlotRequest {
    pub fn from_solution(solution: Solution) -> PlotRequest {
        PlotRequest {
            x: solution.x,
            displacement: solution.displacement,
            seabed: solution.seabed,
            peak_displacement: solution.peak_displacement,
            final_time: solution.final_time,
        }
    }

    /// 4% padding on x around the domain, 8% on y between the seabed minimum
    /// and the peak initial displacement.
    pub fn axis_limits(&self) -> AxisLimits {
        axis_limits(&self.x, &self.seabed, self.peak_displacement)
    }
}

pub fn axis_limits(x: &Array1<f64>, seabed: &Array1<f64>, peak: f64) -> AxisLimits {
    let xmin = x.fold(f64::INFINITY, |a, &b| a.min(b));
    let xmax = x.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let xrange = (xmax - xmin).abs();

    let smin = seabed.fold(f64::INFINITY, |a, &b| a.min(b));
    let yrange = (peak - smin).abs();

    AxisLimits {
        x: (xmin - 0.04 * xrange, xmax + 0.04 * xrange),
        y: (smin - 0.08 * yrange, peak + 0.08 * yrange),
    }
}

/// Something that can draw a static chart of a solution.
pub trait Renderer {
    fn render(&mut self, request: &PlotRequest) -> Result<()>;
}

/// Dispatches a finished solve on `mode`.
///
/// `Data` gives the solution back and leaves the renderer alone; `Plot` calls
/// the renderer exactly once and returns `None`.
pub fn emit<R: Renderer + ?Sized>(mode: OutputMode,
                                  solution: Solution,
                                  renderer: &mut R)
                                  -> Result<Option<Solution>> {
    match mode {
        OutputMode::Data => Ok(Some(solution)),
        OutputMode::Plot => {
            renderer.render(&PlotRequest::from_solution(solution))?;
            Ok(None)
        }
    }
}

/// Solves `problem` and dispatches on the textual `mode`.
///
/// The mode is parsed after integration, so an unknown mode costs a full solve
/// but still produces no output and never reaches the renderer.
pub fn run<R: Renderer + ?Sized>(problem: &Problem,
                                 mode: &str,
                                 renderer: &mut R)
                                 -> Result<Option<Solution>> {
    let solution = problem.solve()?;
    let mode = mode.parse::<OutputMode>()?;
    emit(mode, solution, renderer)
}
