//! Helix formation wound around the vertical axis.

use std::f64::consts::PI;

use glam::DVec3;

use crate::options::{HelixOptions, HelixVariant};

/// Helix slot for `index` out of `total` items.
///
/// The single strand advances the angle once per item. The double strand
/// advances once per pair and puts the odd member of each pair half a turn
/// around, so the two strands interleave. In both cases the helix is
/// vertically centered on `y = 0`.
pub(crate) fn position(
    index: usize,
    total: usize,
    opts: &HelixOptions,
) -> DVec3 {
    let (step, steps, phase) = match opts.variant {
        HelixVariant::Single => (index, total, 0.0),
        HelixVariant::Double => {
            let strand = if index % 2 == 0 { 0.0 } else { PI };
            (index / 2, total.div_ceil(2), strand)
        }
    };

    let angle = step as f64 * opts.angle_step + phase;
    let y = (step as f64 - steps as f64 / 2.0) * opts.vertical_step;
    DVec3::new(opts.radius * angle.cos(), y, opts.radius * angle.sin())
}
