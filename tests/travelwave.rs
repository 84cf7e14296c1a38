extern crate fdm_travelwave;
extern crate rand;

use fdm_travelwave::{run, Config, FieldSpec, OutputMode, PlotRequest, Problem, Profile, Renderer,
                     Result, WaveError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn max(a: &ndarray::Array1<f64>) -> f64 {
    a.fold(f64::NEG_INFINITY, |m, &x| m.max(x))
}

fn min(a: &ndarray::Array1<f64>) -> f64 {
    a.fold(f64::INFINITY, |m, &x| m.min(x))
}

fn demo(final_time: f64) -> Problem {
    Problem::new(300, 1000, 100., final_time)
        .seabed(FieldSpec::sampled(|x| (-(x - 60f64).powi(2) / 10.).exp()))
        .displacement(FieldSpec::sampled(|x| 1.3 + 2. * (-(x - 15f64).powi(2) / 15.).exp()))
        .velocity(0.)
}

#[derive(Default)]
struct Recorder {
    requests: Vec<PlotRequest>,
}

impl Renderer for Recorder {
    fn render(&mut self, request: &PlotRequest) -> Result<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}

#[test]
fn tsunami_demo_runs_to_completion() {
    let initial = demo(0.).solve().unwrap();
    let sol = demo(52.).solve().unwrap();

    assert_eq!(sol.x.len(), 301);
    assert_eq!(sol.seabed.len(), 301);
    assert_eq!(sol.displacement.len(), 301);
    assert!(!sol.refined());
    assert_eq!(sol.effective_steps, 1000);
    assert!(max(&sol.seabed) < min(&initial.displacement));
    assert!(sol.displacement.iter().all(|u| u.is_finite()));
    assert!((sol.peak_displacement - 3.3).abs() < 1e-12);
}

#[test]
fn pulse_leaves_through_open_boundaries() {
    let peak = 1.5;
    let sol = Problem::new(200, 400, 100., 100.)
        .seabed(0.)
        .displacement(Profile::Gaussian {
            amplitude: peak - 1.,
            center: 50.,
            width: 10.,
            offset: 1.,
        })
        .velocity(0.)
        .solve()
        .unwrap();

    assert!(max(&sol.displacement) <= peak + 1e-2);
    // both halves are gone; what remains is a small residue around still water
    let residue = sol.displacement.fold(0f64, |m, &u| m.max((u - 1.).abs()));
    assert!(residue < 0.1, "residue {}", residue);
}

#[test]
fn halves_travel_outwards() {
    let sol = Problem::new(200, 400, 100., 20.)
        .displacement(Profile::Gaussian {
            amplitude: 0.5,
            center: 50.,
            width: 10.,
            offset: 1.,
        })
        .solve()
        .unwrap();
    // wave speed is 1: the halves sit near x = 30 and x = 70
    let u = &sol.displacement;
    assert!(u[60] > u[100]);
    assert!(u[140] > u[100]);
    assert!((u[60] - u[140]).abs() < 1e-9);
}

#[test]
fn unstable_request_is_refined() {
    // hmax = 1, dx = 0.1, dt = 0.2
    let sol = Problem::new(10, 10, 1., 2.).solve().unwrap();
    assert!(sol.refined());
    assert_eq!(sol.effective_steps, (2. / (0.1 / 1f64)).ceil() as usize);
    assert!(1. * sol.dt / 0.1 <= 1. + 1e-12);
}

#[test]
fn insufficient_depth_produces_no_output() {
    let problem = Problem::new(100, 100, 100., 10.)
        .seabed(FieldSpec::sampled(|x| if (x - 60.).abs() < 1e-9 { 1.4 } else { 0.2 }))
        .displacement(Profile::Gaussian {
            amplitude: 1.,
            center: 20.,
            width: 10.,
            offset: 1.3,
        });
    let mut r = Recorder::default();
    for mode in &["data", "plot"] {
        match run(&problem, mode, &mut r) {
            Err(WaveError::InsufficientDepth { seabed_max, still_water }) => {
                assert_eq!(seabed_max, 1.4);
                assert!((still_water - 1.3).abs() < 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
    assert!(r.requests.is_empty());
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let a: f64 = rng.gen_range(0.1..2.);
        let c: f64 = rng.gen_range(10.0..90.);
        let s: f64 = rng.gen_range(0.1..0.9);
        let build = || {
            Problem::new(150, 300, 100., 30.)
                .seabed(Profile::CosineBump { amplitude: s, center: 100. - c, half_width: 8. })
                .displacement(Profile::Gaussian { amplitude: a, center: c, width: 12., offset: 1. })
                .velocity(FieldSpec::sampled(move |x| 0.01 * (x / 100.)))
        };
        let first = build().solve().unwrap();
        let second = build().solve().unwrap();
        assert_eq!(first, second);
        assert!(first.displacement.iter().all(|u| u.is_finite()));
    }
}

#[test]
fn mode_dispatch() {
    let problem = demo(5.);

    let mut r = Recorder::default();
    let (x, seabed, u) = run(&problem, "DATA", &mut r).unwrap().unwrap().into_arrays();
    assert_eq!((x.len(), seabed.len(), u.len()), (301, 301, 301));
    assert!(r.requests.is_empty());

    assert!(run(&problem, "plot", &mut r).unwrap().is_none());
    assert_eq!(r.requests.len(), 1);
    assert_eq!(r.requests[0].final_time, 5.);
    assert_eq!(r.requests[0].displacement, u);

    match run(&problem, "table", &mut r) {
        Err(WaveError::UnsupportedMode(m)) => assert_eq!(m, "table"),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(r.requests.len(), 1);
}

#[test]
fn demo_config_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/tsunami.toml");
    let config = Config::from_file(path).unwrap();
    assert_eq!(config.mode().unwrap(), OutputMode::Plot);
    assert_eq!(config.animation.as_ref().unwrap().frames, 100);

    let mut config = config;
    config.grid.final_time = 5.;
    assert_eq!(config.problem().unwrap().solve().unwrap(), demo(5.).solve().unwrap());
}

#[test]
fn missing_config_file() {
    assert!(matches!(Config::from_file("/nonexistent/travelwave.toml"), Err(WaveError::Config(_))));
}
