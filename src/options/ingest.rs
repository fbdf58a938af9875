use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ingest", inline)]
#[serde(default)]
/// Column mapping for ingested rows.
pub struct IngestOptions {
    /// Leading rows to skip (header rows).
    #[schemars(title = "Header Rows", range(min = 0, max = 10))]
    pub header_rows: usize,
    /// Column holding the tile label.
    #[schemars(title = "Label Column")]
    pub label_column: usize,
    /// Column holding the image reference.
    #[schemars(title = "Image Column")]
    pub image_column: usize,
    /// Column holding the formatted numeric value.
    #[schemars(title = "Value Column")]
    pub value_column: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_rows: 1,
            label_column: 0,
            image_column: 1,
            value_column: 5,
        }
    }
}
