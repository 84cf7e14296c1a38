//! Finite difference kernels for `u_tt = (h u_x)_x` with open boundaries.
//!
//! The spatial operator is the conservative central difference
//!
//! ```text
//! D(v)[i] = ½(h[i] + h[i+1])(v[i+1] - v[i]) - ½(h[i] + h[i-1])(v[i] - v[i-1])
//! ```
//!
//! and `lambda` is always `τ/h` (time step over space step).

/// Conservative second difference of `v` weighted by the face averages of `h`.
#[inline]
fn flux_difference(v: &[f64], h: &[f64], i: usize) -> f64 {
    0.5 * (h[i] + h[i + 1]) * (v[i + 1] - v[i]) - 0.5 * (h[i] + h[i - 1]) * (v[i] - v[i - 1])
}

/// Writes the outgoing-wave boundary values of `w` from the current level `v`.
///
/// One-sided differences let waves leave through both ends without reflection:
/// `w[0] = v[0] + h[0] λ (v[1] - v[0])` and
/// `w[n] = v[n] - h[n] λ (v[n] - v[n-1])`.
pub fn open_boundary(v: &[f64], w: &mut [f64], h: &[f64], lambda: f64) {
    let n = v.len();
    debug_assert!(n >= 2);
    let last = n - 1;
    w[0] = v[0] + h[0] * lambda * (v[1] - v[0]);
    w[last] = v[last] - h[last] * lambda * (v[last] - v[last - 1]);
}

/// Computes the first time level from the initial displacement and velocity.
///
/// - `u0`: displacement at step `0`
/// - `v0`: velocity at step `0`
/// - `w`: computed displacement at step `1`
/// - `h`: wave speed coefficient at each point
/// - `dt`: time step
/// - `lambda`: τ/h
pub fn seed_step(u0: &[f64], v0: &[f64], w: &mut [f64], h: &[f64], dt: f64, lambda: f64) {
    let n = u0.len();
    assert!(n >= 3);
    assert_eq!(v0.len(), n);
    assert_eq!(w.len(), n);
    assert_eq!(h.len(), n);

    let c = 0.5 * lambda * lambda;
    for i in 1..n - 1 {
        w[i] = u0[i] + dt * v0[i] + c * flux_difference(u0, h, i);
    }
    open_boundary(u0, w, h, lambda);
}

/// Performs one step of the leapfrog scheme.
///
/// The discretization is the standard central 2nd order difference in both space and time
/// in the interior, with open boundaries at both ends.
///
/// - `u`: value at step `n - 1`
/// - `v`: value at step `n`
/// - `w`: computed value at step `n + 1`
/// - `h`: wave speed coefficient at each point
/// - `lambda`: τ/h, where τ is the time step and h is the space step
pub fn wave_step(u: &[f64], v: &[f64], w: &mut [f64], h: &[f64], lambda: f64) {
    let n = v.len();
    assert!(n >= 3);
    assert_eq!(u.len(), n);
    assert_eq!(w.len(), n);
    assert_eq!(h.len(), n);

    let c = lambda * lambda;
    for i in 1..n - 1 {
        w[i] = 2. * v[i] - u[i] + c * flux_difference(v, h, i);
    }
    open_boundary(v, w, h, lambda);
}
