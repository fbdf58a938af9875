//! Volumetric grid formation.

use glam::DVec3;

use crate::options::GridOptions;

/// Lattice cell for `index` out of `total` items.
///
/// Each layer holds `columns * rows` cells. Every axis is centered on the
/// origin and successive layers step along -z.
pub(crate) fn position(
    index: usize,
    total: usize,
    opts: &GridOptions,
) -> DVec3 {
    let columns = opts.columns.max(1);
    let rows = opts.rows.max(1);
    let per_layer = columns * rows;
    let layers = total.div_ceil(per_layer);

    let col = index % columns;
    let row = (index / columns) % rows;
    let layer = index / per_layer;

    let x = (col as f64 - centre(columns)) * opts.spacing;
    let y = -(row as f64 - centre(rows)) * opts.spacing;
    let z = -(layer as f64 - centre(layers)) * opts.spacing;
    DVec3::new(x, y, z)
}

fn centre(count: usize) -> f64 {
    count.saturating_sub(1) as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_layer_matches_five_by_five_lattice() {
        let opts = GridOptions::default();
        let s = opts.spacing;
        // A single full layer is centered at z = 0.
        assert_eq!(position(0, 25, &opts), DVec3::new(-2.0 * s, 2.0 * s, 0.0));
        assert_eq!(position(12, 25, &opts), DVec3::ZERO);
        assert_eq!(position(24, 25, &opts), DVec3::new(2.0 * s, -2.0 * s, 0.0));
    }

    #[test]
    fn layers_step_along_negative_z() {
        let opts = GridOptions::default();
        let s = opts.spacing;
        let front = position(0, 75, &opts);
        let middle = position(25, 75, &opts);
        let back = position(50, 75, &opts);
        assert_eq!(front.z, s);
        assert_eq!(middle.z, 0.0);
        assert_eq!(back.z, -s);
    }

    #[test]
    fn single_item_sits_at_top_left_of_centered_layer() {
        let opts = GridOptions::default();
        let p = position(0, 1, &opts);
        assert_eq!(p.z, 0.0);
        assert!(p.is_finite());
    }
}
