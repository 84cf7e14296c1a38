extern crate fdm_travelwave;

fn main() {
    let u = vec![1., 2., 3., 4.];
    let v = vec![3., 2., 1., 4.];
    let h = vec![1., 1., 1., 1.];
    let mut w = vec![0.; 4];

    let dt = 1.;
    let dx = 2.;

    fdm_travelwave::wave_step(&u, &v, &mut w, &h, dt / dx);

    println!("{:?}", w);
}
