//! Spherical formation.

use std::f64::consts::PI;

use glam::DVec3;

use crate::options::SphereOptions;

/// Sphere surface point for `index` out of `total` items.
///
/// `phi` walks from the south pole towards the north pole in equal steps of
/// `cos(phi)`; `theta` winds `sqrt(total * pi)` times faster, which spreads
/// the points roughly evenly over the surface.
pub(crate) fn position(
    index: usize,
    total: usize,
    opts: &SphereOptions,
) -> DVec3 {
    let n = total as f64;
    let phi = (-1.0 + 2.0 * index as f64 / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    let r = opts.radius;

    DVec3::new(
        r * theta.cos() * phi.sin(),
        r * theta.sin() * phi.sin(),
        r * phi.cos(),
    )
}
