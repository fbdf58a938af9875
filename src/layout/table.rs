//! Fixed-column table formation.

use glam::DVec3;

use crate::options::TableOptions;

/// Table slot for `index` out of `total` items.
///
/// Columns fill left to right, rows top to bottom. Both axes are offset by
/// half the column/row count so the table is roughly centered on the
/// origin; the table lies in the `z = 0` plane.
pub(crate) fn position(
    index: usize,
    total: usize,
    opts: &TableOptions,
) -> DVec3 {
    let columns = opts.columns.max(1);
    let rows = total.div_ceil(columns);
    let col = index % columns;
    let row = index / columns;

    let x = (col as f64 - columns as f64 / 2.0) * opts.spacing_x;
    let y = -(row as f64 - rows as f64 / 2.0) * opts.spacing_y;
    DVec3::new(x, y, 0.0)
}
