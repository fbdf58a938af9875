use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which helix winding the helix formation uses.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum HelixVariant {
    /// One strand; the angle advances once per item.
    #[default]
    Single,
    /// Two interleaved strands half a turn apart; the angle advances once
    /// per item pair.
    Double,
}

/// Fixed-column table formation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Table", inline)]
#[serde(default)]
pub struct TableOptions {
    /// Number of columns; rows follow from the item count.
    #[schemars(title = "Columns", range(min = 1, max = 200))]
    pub columns: usize,
    /// Horizontal distance between column centers.
    #[schemars(title = "Column Spacing", range(min = 0.0, max = 1000.0), extend("step" = 5.0))]
    pub spacing_x: f64,
    /// Vertical distance between row centers.
    #[schemars(title = "Row Spacing", range(min = 0.0, max = 1000.0), extend("step" = 5.0))]
    pub spacing_y: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            columns: 20,
            spacing_x: 150.0,
            spacing_y: 180.0,
        }
    }
}

/// Helix formation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
pub struct HelixOptions {
    /// Single or double strand.
    #[schemars(title = "Variant")]
    pub variant: HelixVariant,
    /// Distance from the vertical axis.
    #[schemars(title = "Radius", range(min = 0.0, max = 4000.0), extend("step" = 10.0))]
    pub radius: f64,
    /// Angle advanced per step, in radians.
    #[schemars(title = "Angle Step", range(min = 0.0, max = 3.2), extend("step" = 0.01))]
    pub angle_step: f64,
    /// Height advanced per step.
    #[schemars(title = "Vertical Step", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub vertical_step: f64,
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            variant: HelixVariant::Single,
            radius: 900.0,
            angle_step: 0.3,
            vertical_step: 20.0,
        }
    }
}

/// Volumetric grid formation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Grid", inline)]
#[serde(default)]
pub struct GridOptions {
    /// Cells along x per layer.
    #[schemars(title = "Columns", range(min = 1, max = 100))]
    pub columns: usize,
    /// Cells along y per layer.
    #[schemars(title = "Rows", range(min = 1, max = 100))]
    pub rows: usize,
    /// Distance between neighboring cells on every axis.
    #[schemars(title = "Spacing", range(min = 0.0, max = 2000.0), extend("step" = 10.0))]
    pub spacing: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 5,
            spacing: 400.0,
        }
    }
}

/// Sphere formation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sphere", inline)]
#[serde(default)]
pub struct SphereOptions {
    /// Sphere radius.
    #[schemars(title = "Radius", range(min = 0.0, max = 4000.0), extend("step" = 10.0))]
    pub radius: f64,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self { radius: 800.0 }
    }
}

/// Parameters for all four formations.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
pub struct LayoutOptions {
    /// Table formation.
    pub table: TableOptions,
    /// Helix formation.
    pub helix: HelixOptions,
    /// Grid formation.
    pub grid: GridOptions,
    /// Sphere formation.
    pub sphere: SphereOptions,
}
