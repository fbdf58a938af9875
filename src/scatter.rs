//! Random initial placement.
//!
//! Tiles start scattered through a cube around the origin and fly into
//! their first formation from there. Scatter happens once, when the tiles
//! are created; formations never depend on it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::layout::Position;
use crate::options::ScatterOptions;

/// `count` positions drawn uniformly from `[-extent, extent)` on each axis.
pub fn scatter<R: Rng>(
    count: usize,
    extent: f64,
    rng: &mut R,
) -> Vec<Position> {
    (0..count)
        .map(|_| {
            Position::new(
                (rng.random::<f64>() * 2.0 - 1.0) * extent,
                (rng.random::<f64>() * 2.0 - 1.0) * extent,
                (rng.random::<f64>() * 2.0 - 1.0) * extent,
            )
        })
        .collect()
}

/// Scatter using the configured extent, seeded when a seed is set.
#[must_use]
pub fn scatter_with(count: usize, opts: &ScatterOptions) -> Vec<Position> {
    if let Some(seed) = opts.seed {
        scatter(count, opts.extent, &mut StdRng::seed_from_u64(seed))
    } else {
        scatter(count, opts.extent, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_stay_inside_extent() {
        let opts = ScatterOptions::default();
        let positions = scatter_with(500, &opts);
        assert_eq!(positions.len(), 500);
        for p in positions {
            assert!(p.abs().max_element() <= opts.extent, "{p}");
        }
    }

    #[test]
    fn test_seeded_scatter_is_reproducible() {
        let opts = ScatterOptions {
            extent: 100.0,
            seed: Some(7),
        };
        assert_eq!(scatter_with(20, &opts), scatter_with(20, &opts));
    }

    #[test]
    fn test_zero_extent_collapses_to_origin() {
        let opts = ScatterOptions {
            extent: 0.0,
            seed: Some(1),
        };
        assert!(scatter_with(5, &opts)
            .iter()
            .all(|p| *p == Position::ZERO));
    }
}
