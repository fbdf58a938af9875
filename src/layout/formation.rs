//! Cached position lists for all four formations.

use super::{positions_for, FormationKind, Position};
use crate::options::LayoutOptions;

/// A named arrangement: one target position per item, in item order.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    kind: FormationKind,
    positions: Vec<Position>,
}

impl Formation {
    /// Compute the formation of `kind` for `total` items.
    #[must_use]
    pub fn build(
        kind: FormationKind,
        total: usize,
        opts: &LayoutOptions,
    ) -> Self {
        Self {
            kind,
            positions: positions_for(kind, total, opts),
        }
    }

    /// Which arrangement this is.
    #[must_use]
    pub fn kind(&self) -> FormationKind {
        self.kind
    }

    /// Target positions, indexed by item.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions (equals the item count it was built for).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the formation has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// All four formations for one item count.
///
/// Built eagerly and read-only afterwards; a new item count means a new
/// set.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationSet {
    total: usize,
    table: Formation,
    sphere: Formation,
    helix: Formation,
    grid: Formation,
}

impl FormationSet {
    /// Compute every formation for `total` items.
    #[must_use]
    pub fn rebuild(total: usize, opts: &LayoutOptions) -> Self {
        log::debug!("rebuilding formations for {total} items");
        Self {
            total,
            table: Formation::build(FormationKind::Table, total, opts),
            sphere: Formation::build(FormationKind::Sphere, total, opts),
            helix: Formation::build(FormationKind::Helix, total, opts),
            grid: Formation::build(FormationKind::Grid, total, opts),
        }
    }

    /// The formation of the given kind.
    #[must_use]
    pub fn get(&self, kind: FormationKind) -> &Formation {
        match kind {
            FormationKind::Table => &self.table,
            FormationKind::Sphere => &self.sphere,
            FormationKind::Helix => &self.helix,
            FormationKind::Grid => &self.grid,
        }
    }

    /// Item count the set was built for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether the set was built for zero items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Every formation, in [`FormationKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Formation> + '_ {
        FormationKind::ALL.into_iter().map(|kind| self.get(kind))
    }
}

impl Default for FormationSet {
    fn default() -> Self {
        Self::rebuild(0, &LayoutOptions::default())
    }
}
