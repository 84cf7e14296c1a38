//! A hump of water released at `x = 15` crossing a seabed ridge at `x = 60`.
//!
//! Writes `tsunami.png` with the state at `t = 52` and `tsunami.gif` with the
//! first 100 time units.
extern crate fdm_travelwave;

use fdm_travelwave::{run, Animation, ChartRenderer, FieldSpec, GifSink, Problem, Profile};

fn main() -> fdm_travelwave::Result<()> {
    let problem = Problem::new(300, 1000, 100., 52.)
        .seabed(Profile::Gaussian {
            amplitude: 1.,
            center: 60.,
            width: 10.,
            offset: 0.,
        })
        .displacement(FieldSpec::sampled(|x| 1.3 + 2. * (-(x - 15f64).powi(2) / 15.).exp()))
        .velocity(0.);

    let mut chart = ChartRenderer::new("tsunami.png");
    run(&problem, "plot", &mut chart)?;

    let shallow = Problem::new(400, 1000, 100., 0.)
        .seabed(Profile::CosineBump {
            amplitude: 0.7,
            center: 60.,
            half_width: 8.,
        })
        .displacement(Profile::Gaussian {
            amplitude: 2.,
            center: 15.,
            width: 15.,
            offset: 1.,
        })
        .velocity(0.);
    let animation = Animation::new(&shallow, 100);
    let mut gif = GifSink::with_size("tsunami.gif", (1000, 500), animation.interval())?;
    animation.play(&mut gif)?;
    Ok(())
}
