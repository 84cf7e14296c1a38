//! Frame-by-frame animation of a problem.
//!
//! Frame `i` is the solution at `t = i * time_per_frame`. Each frame is solved
//! from `t = 0`: the time step `T / mt` depends on the frame's final time, so
//! reusing the previous frame's state would change the numbers.
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info};

use crate::error::Result;
use crate::integrator::{Problem, Solution};
use crate::output::{axis_limits, AxisLimits};
use crate::plot::{draw_chart, ensure_parent, render_error, DEFAULT_SIZE};

pub const DEFAULT_INTERVAL_MS: u32 = 150;

/// Receives the frames of an animation in order.
pub trait FrameSink {
    fn frame(&mut self, index: usize, solution: &Solution) -> Result<()>;
}

impl FrameSink for Vec<Solution> {
    fn frame(&mut self, _index: usize, solution: &Solution) -> Result<()> {
        self.push(solution.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Animation<'a> {
    problem: &'a Problem,
    frames: usize,
    time_per_frame: f64,
    interval_ms: u32,
}

impl<'a> Animation<'a> {
    /// `frames` frames, one time unit apart, 150 ms each.
    pub fn new(problem: &'a Problem, frames: usize) -> Animation<'a> {
        Animation {
            problem,
            frames,
            time_per_frame: 1.,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    pub fn time_per_frame(mut self, dt: f64) -> Animation<'a> {
        self.time_per_frame = dt;
        self
    }

    pub fn interval_ms(mut self, ms: u32) -> Animation<'a> {
        self.interval_ms = ms;
        self
    }

    pub fn len(&self) -> usize {
        self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    pub fn interval(&self) -> u32 {
        self.interval_ms
    }

    /// Solves frame `index` from scratch.
    pub fn frame(&self, index: usize) -> Result<Solution> {
        self.problem.at(index as f64 * self.time_per_frame).solve()
    }

    pub fn frames(&self) -> impl Iterator<Item = Result<Solution>> + '_ {
        (0..self.frames).map(move |i| self.frame(i))
    }

    /// Feeds every frame to `sink`; stops at the first error.
    pub fn play<S: FrameSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        for (i, frame) in self.frames().enumerate() {
            let solution = frame?;
            debug!(frame = i, t = solution.final_time, steps = solution.effective_steps, "frame");
            sink.frame(i, &solution)?;
        }
        Ok(self.frames)
    }
}

/// Writes frames into an animated GIF with a fixed delay between frames.
///
/// The axes are fixed by the first frame.
pub struct GifSink {
    root: DrawingArea<BitMapBackend<'static>, Shift>,
    limits: Option<AxisLimits>,
}

impl GifSink {
    pub fn new<P: AsRef<Path>>(path: P, interval_ms: u32) -> Result<GifSink> {
        GifSink::with_size(path, DEFAULT_SIZE, interval_ms)
    }

    pub fn with_size<P: AsRef<Path>>(path: P, size: (u32, u32), interval_ms: u32) -> Result<GifSink> {
        let path = path.as_ref();
        ensure_parent(path)?;
        let backend = BitMapBackend::gif(path, size, interval_ms).map_err(render_error)?;
        info!(path = %path.display(), interval_ms, "writing animation");
        Ok(GifSink {
            root: backend.into_drawing_area(),
            limits: None,
        })
    }
}

impl FrameSink for GifSink {
    fn frame(&mut self, _index: usize, solution: &Solution) -> Result<()> {
        let limits = *self.limits.get_or_insert_with(|| {
            axis_limits(&solution.x, &solution.seabed, solution.peak_displacement)
        });
        draw_chart(&self.root,
                   &solution.x,
                   &solution.seabed,
                   &solution.displacement,
                   solution.final_time,
                   limits)?;
        self.root.present().map_err(render_error)
    }
}
