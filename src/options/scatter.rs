use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scatter", inline)]
#[serde(default)]
/// Random initial placement applied before the first transition.
pub struct ScatterOptions {
    /// Half-width of the cube items are scattered in, centered on the
    /// origin.
    #[schemars(title = "Extent", range(min = 0.0, max = 10000.0), extend("step" = 100.0))]
    pub extent: f64,
    /// Fixed RNG seed for reproducible scatter. `None` seeds from the OS.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            extent: 2000.0,
            seed: None,
        }
    }
}
