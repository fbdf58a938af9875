//! Formation geometry.
//!
//! Pure functions mapping `(kind, index, total)` to a 3D position, and the
//! [`FormationSet`] that caches the four position lists for the current
//! item count.
//!
//! All generators are deterministic and never return NaN or infinity:
//! an index outside `0..total` (which includes every index when
//! `total == 0`) or any non-finite intermediate collapses to the origin.

mod formation;
mod grid;
mod helix;
mod sphere;
mod table;

use std::fmt;
use std::str::FromStr;

pub use formation::{Formation, FormationSet};
use glam::DVec3;

use crate::error::TilescapeError;
use crate::options::LayoutOptions;

/// A 3D position produced by the geometry generator.
pub type Position = DVec3;

/// The four named spatial arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationKind {
    /// Flat fixed-column grid in the `z = 0` plane.
    Table,
    /// Points spread over a sphere surface.
    Sphere,
    /// Strand(s) wound around the vertical axis.
    Helix,
    /// Volumetric lattice.
    Grid,
}

impl FormationKind {
    /// Every kind, in menu order.
    pub const ALL: [FormationKind; 4] = [
        FormationKind::Table,
        FormationKind::Sphere,
        FormationKind::Helix,
        FormationKind::Grid,
    ];

    /// Lowercase name used by the formation selector.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormationKind::Table => "table",
            FormationKind::Sphere => "sphere",
            FormationKind::Helix => "helix",
            FormationKind::Grid => "grid",
        }
    }
}

impl fmt::Display for FormationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormationKind {
    type Err = TilescapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FormationKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TilescapeError::UnknownFormation(s.to_owned()))
    }
}

/// Target position of item `index` out of `total` under `kind`.
#[must_use]
pub fn position_for(
    kind: FormationKind,
    index: usize,
    total: usize,
    opts: &LayoutOptions,
) -> Position {
    if index >= total {
        return Position::ZERO;
    }
    let p = match kind {
        FormationKind::Table => table::position(index, total, &opts.table),
        FormationKind::Sphere => sphere::position(index, total, &opts.sphere),
        FormationKind::Helix => helix::position(index, total, &opts.helix),
        FormationKind::Grid => grid::position(index, total, &opts.grid),
    };
    if p.is_finite() {
        p
    } else {
        Position::ZERO
    }
}

/// Every target position of `kind` for `total` items, in index order.
#[must_use]
pub fn positions_for(
    kind: FormationKind,
    total: usize,
    opts: &LayoutOptions,
) -> Vec<Position> {
    (0..total)
        .map(|i| position_for(kind, i, total, opts))
        .collect()
}
