//! Time marching from the initial state to the final time.
use ndarray::Array1;
use tracing::{debug, trace};

use crate::error::Result;
use crate::field::FieldSpec;
use crate::grid::{SpatialGrid, TemporalGrid};
use crate::ring::TimeLevels;
use crate::stability::{self, Refinement};
use crate::stencil::{seed_step, wave_step};

/// Everything needed to set up a run.
#[derive(Debug)]
pub struct Problem {
    /// Number of intervals in space, `mx`.
    pub spatial_points: usize,
    /// Requested number of time steps, `mt`. The stability guard may raise it.
    pub time_points: usize,
    pub length: f64,
    pub final_time: f64,
    pub seabed: FieldSpec,
    pub displacement: FieldSpec,
    pub velocity: FieldSpec,
}

impl Problem {
    /// Flat seabed at zero, unit still-water level at rest.
    pub fn new(spatial_points: usize, time_points: usize, length: f64, final_time: f64) -> Problem {
        Problem {
            spatial_points,
            time_points,
            length,
            final_time,
            seabed: FieldSpec::Constant(0.),
            displacement: FieldSpec::Constant(1.),
            velocity: FieldSpec::Constant(0.),
        }
    }

    pub fn seabed<F: Into<FieldSpec>>(mut self, seabed: F) -> Problem {
        self.seabed = seabed.into();
        self
    }

    pub fn displacement<F: Into<FieldSpec>>(mut self, displacement: F) -> Problem {
        self.displacement = displacement.into();
        self
    }

    pub fn velocity<F: Into<FieldSpec>>(mut self, velocity: F) -> Problem {
        self.velocity = velocity.into();
        self
    }

    /// Same problem with another final time.
    pub fn at(&self, final_time: f64) -> ProblemAt {
        ProblemAt { problem: self, final_time }
    }

    /// Integrates from `t = 0` to `final_time`.
    pub fn solve(&self) -> Result<Solution> {
        Ok(Integrator::new(self)?.run())
    }
}

/// A borrowed [`Problem`] with its final time replaced.
#[derive(Debug, Clone, Copy)]
pub struct ProblemAt<'a> {
    problem: &'a Problem,
    final_time: f64,
}

impl<'a> ProblemAt<'a> {
    pub fn solve(&self) -> Result<Solution> {
        Ok(Integrator::with_final_time(self.problem, self.final_time)?.run())
    }
}

/// The state at the final time together with the grid it lives on.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub x: Array1<f64>,
    pub seabed: Array1<f64>,
    pub displacement: Array1<f64>,
    pub requested_steps: usize,
    /// Steps actually marched; larger than `requested_steps` when the stability
    /// guard refined the time grid.
    pub effective_steps: usize,
    pub dt: f64,
    /// Highest initial displacement.
    pub peak_displacement: f64,
    pub final_time: f64,
}

impl Solution {
    pub fn refined(&self) -> bool {
        self.effective_steps != self.requested_steps
    }

    /// Consumes the solution into `(x, seabed, displacement)`.
    pub fn into_arrays(self) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
        (self.x, self.seabed, self.displacement)
    }
}

/// Leapfrog integrator holding three time levels.
#[derive(Debug)]
pub struct Integrator {
    grid: SpatialGrid,
    time: Refinement,
    seabed: Array1<f64>,
    /// `h_0 - h_sb`
    speed: Vec<f64>,
    /// Initial velocity, dropped after the first step.
    velocity: Option<Vec<f64>>,
    levels: TimeLevels,
    lambda: f64,
    step: usize,
    peak: f64,
}

impl Integrator {
    pub fn new(problem: &Problem) -> Result<Integrator> {
        Integrator::with_final_time(problem, problem.final_time)
    }

    fn with_final_time(problem: &Problem, final_time: f64) -> Result<Integrator> {
        let grid = SpatialGrid::new(problem.spatial_points, problem.length)?;
        let time = TemporalGrid::new(problem.time_points, final_time)?;

        let seabed = problem.seabed.sample(&grid);
        let displacement = problem.displacement.sample(&grid);
        let velocity = problem.velocity.sample(&grid);

        let still_water = displacement.fold(f64::INFINITY, |a, &b| a.min(b));
        let peak = displacement.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        stability::check_depth(seabed.view(), still_water)?;

        let speed: Vec<f64> = seabed.iter().map(|&s| still_water - s).collect();
        let hmax = speed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let time = stability::enforce(hmax, grid.dx(), time)?;
        let lambda = time.time.dt() / grid.dx();
        debug!(points = grid.len(),
               dx = grid.dx(),
               dt = time.time.dt(),
               steps = time.time.steps(),
               still_water,
               hmax,
               "integrator ready");

        Ok(Integrator {
            grid,
            time,
            seabed,
            speed,
            velocity: Some(velocity.to_vec()),
            levels: TimeLevels::new(displacement.to_vec()),
            lambda,
            step: 0,
            peak,
        })
    }

    /// Index of the newest time level.
    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn steps(&self) -> usize {
        self.time.time.steps()
    }

    pub fn dt(&self) -> f64 {
        self.time.time.dt()
    }

    pub fn time(&self) -> f64 {
        self.step as f64 * self.dt()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps()
    }

    /// Displacement at the newest time level.
    pub fn current(&self) -> &[f64] {
        self.levels.current()
    }

    /// Advances one time level. Returns `false` once the final time is reached.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let dt = self.dt();
        {
            let (prev, cur, next) = self.levels.split();
            match self.velocity.take() {
                Some(v0) => seed_step(cur, &v0, next, &self.speed, dt, self.lambda),
                None => wave_step(prev, cur, next, &self.speed, self.lambda),
            }
        }
        self.levels.advance();
        self.step += 1;
        trace!(step = self.step, "advanced");
        true
    }

    pub fn run(mut self) -> Solution {
        while self.step() {}
        self.into_solution()
    }

    fn into_solution(self) -> Solution {
        Solution {
            x: self.grid.points().clone(),
            seabed: self.seabed,
            displacement: Array1::from(self.levels.into_current()),
            requested_steps: self.time.requested_steps,
            effective_steps: self.time.time.steps(),
            dt: self.time.time.dt(),
            peak_displacement: self.peak,
            final_time: self.time.time.final_time(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::WaveError;

    #[test]
    fn constant_fields_stay_constant() {
        let sol = Problem::new(50, 200, 10., 5.)
            .seabed(0.4)
            .displacement(1.2)
            .velocity(0.)
            .solve()
            .unwrap();
        assert_eq!(sol.displacement.len(), 51);
        assert!(sol.displacement.iter().all(|&u| u == 1.2));
    }

    #[test]
    fn first_step_is_the_seed_formula() {
        let problem = Problem::new(20, 10, 1., 0.1)
            .seabed(FieldSpec::sampled(|x| 0.1 * x))
            .displacement(FieldSpec::sampled(|x| 2. + (-(x - 0.5f64).powi(2) * 20.).exp()))
            .velocity(FieldSpec::sampled(|x| x));
        let mut it = Integrator::new(&problem).unwrap();
        let grid = SpatialGrid::new(20, 1.).unwrap();
        let u0 = problem.displacement.sample(&grid);
        let v0 = problem.velocity.sample(&grid);
        let h0 = u0.fold(f64::INFINITY, |a, &b| a.min(b));
        let h: Vec<f64> = problem.seabed.sample(&grid).iter().map(|s| h0 - s).collect();

        assert!(it.step());
        let dt = it.dt();
        let c = (dt / grid.dx()).powi(2);
        let u1 = it.current();
        for i in 1..20 {
            let expected = u0[i] + dt * v0[i] +
                           0.5 * c *
                           (0.5 * (h[i] + h[i + 1]) * (u0[i + 1] - u0[i]) -
                            0.5 * (h[i] + h[i - 1]) * (u0[i] - u0[i - 1]));
            assert!((u1[i] - expected).abs() < 1e-14);
        }
    }

    #[test]
    fn stepping_stops_at_final_time() {
        let problem = Problem::new(10, 7, 1., 0.7);
        let mut it = Integrator::new(&problem).unwrap();
        let mut n = 0;
        while it.step() {
            n += 1;
        }
        assert_eq!(n, 7);
        assert!(it.is_finished());
        assert!((it.time() - 0.7).abs() < 1e-12);
        assert!(!it.step());
    }

    #[test]
    fn single_step_returns_the_seeded_level() {
        let problem = Problem::new(10, 1, 1., 0.01).velocity(1.);
        let sol = problem.solve().unwrap();
        assert!((sol.displacement[5] - 1.01).abs() < 1e-15);
    }

    #[test]
    fn insufficient_depth_is_refused() {
        let problem = Problem::new(100, 100, 100., 10.)
            .seabed(FieldSpec::sampled(|x| if x > 50. { 1.5 } else { 0. }))
            .displacement(1.);
        match problem.solve() {
            Err(WaveError::InsufficientDepth { seabed_max, still_water }) => {
                assert_eq!(seabed_max, 1.5);
                assert_eq!(still_water, 1.);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn refinement_is_reported() {
        // h = 1, dx = 0.1, dt = 0.2
        let sol = Problem::new(10, 10, 1., 2.).solve().unwrap();
        assert!(sol.refined());
        assert_eq!(sol.requested_steps, 10);
        assert!(sol.effective_steps >= 20);
        assert!(sol.dt / 0.1 <= 1. + 1e-12);

        let sol = Problem::new(10, 40, 1., 2.).solve().unwrap();
        assert!(!sol.refined());
        assert_eq!(sol.effective_steps, 40);
    }

    #[test]
    fn zero_final_time_returns_initial_state() {
        let problem = Problem::new(100, 50, 100., 0.)
            .displacement(FieldSpec::sampled(|x| 1. + (-(x - 15f64).powi(2) / 15.).exp()));
        let sol = problem.solve().unwrap();
        let grid = SpatialGrid::new(100, 100.).unwrap();
        assert_eq!(sol.displacement, problem.displacement.sample(&grid));
    }

    #[test]
    fn override_final_time() {
        let problem = Problem::new(40, 100, 40., 10.)
            .displacement(FieldSpec::sampled(|x| 1. + (-(x - 20f64).powi(2) / 4.).exp()));
        let at = problem.at(3.).solve().unwrap();
        let fresh = Problem::new(40, 100, 40., 3.)
            .displacement(FieldSpec::sampled(|x| 1. + (-(x - 20f64).powi(2) / 4.).exp()))
            .solve()
            .unwrap();
        assert_eq!(at, fresh);
    }
}
