//! Finite difference method for the 1D long-wave equation over a variable seabed.
//!
//! Solves `u_tt = (h(x) u_x)_x` on `[0, L]` where `h = h_0 - h_sb(x)` is the water
//! depth above the seabed `h_sb` and `h_0` is the lowest initial surface level.
//! The scheme is the explicit three-level leapfrog with open boundaries, so waves
//! leave the domain instead of bouncing back.
//!
//! ```no_run
//! use fdm_travelwave::{FieldSpec, Problem};
//!
//! let solution = Problem::new(300, 1000, 100., 52.)
//!     .seabed(FieldSpec::sampled(|x| (-(x - 60f64).powi(2) / 10.).exp()))
//!     .displacement(FieldSpec::sampled(|x| 1.3 + 2. * (-(x - 15f64).powi(2) / 15.).exp()))
//!     .velocity(0.)
//!     .solve()
//!     .unwrap();
//! println!("{} steps", solution.effective_steps);
//! ```
pub mod animation;
pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod integrator;
pub mod output;
pub mod plot;
pub mod ring;
pub mod stability;
pub mod stencil;

pub use animation::{Animation, FrameSink, GifSink};
pub use config::Config;
pub use error::{Result, WaveError};
pub use field::{FieldSpec, Profile};
pub use grid::{SpatialGrid, TemporalGrid};
pub use integrator::{Integrator, Problem, Solution};
pub use output::{emit, run, OutputMode, PlotRequest, Renderer};
pub use plot::ChartRenderer;
pub use stencil::{seed_step, wave_step};
