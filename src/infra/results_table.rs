// ============================================================
// Layer 6 - Results Table Reader
// ============================================================
// Reads the per-epoch metrics CSV the detection library writes
// during training.
//
// Example (the library pads headers and cells with spaces):
//
//                    epoch,      train/box_loss,  ...,   metrics/precision(B),      metrics/recall(B), ...,        val/box_loss, ...
//                        1,              1.2345,  ...,                0.51234,                0.40211, ...,              1.4321, ...
//
// Only the columns the visualizer plots are required; the
// rest (cls/dfl losses, learning rates, ...) are ignored.
//
// Reference: csv crate documentation (serde deserialization)

use std::path::Path;
use serde::Deserialize;

use crate::domain::error::PipelineError;

/// One row of results.csv
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EpochRecord {
    pub epoch: u32,

    #[serde(rename = "train/box_loss")]
    pub train_box_loss: f64,

    #[serde(rename = "val/box_loss")]
    pub val_box_loss: f64,

    #[serde(rename = "metrics/precision(B)")]
    pub precision: f64,

    #[serde(rename = "metrics/recall(B)")]
    pub recall: f64,

    #[serde(rename = "metrics/mAP50(B)", default)]
    pub map50: Option<f64>,

    #[serde(rename = "metrics/mAP50-95(B)", default)]
    pub map50_95: Option<f64>,
}

/// The full table, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    rows: Vec<EpochRecord>,
}

impl ResultsTable {
    /// Parse the CSV at `path`. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref().to_path_buf();
        let wrap = |source: csv::Error| PipelineError::ResultsTable {
            path: path.clone(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(wrap)?;

        let rows = reader
            .deserialize::<EpochRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;

        tracing::debug!("Read {} epochs from '{}'", rows.len(), path.display());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[EpochRecord] {
        &self.rows
    }

    /// `(epoch, value)` pairs for one column
    pub fn column<F>(&self, pick: F) -> Vec<(f64, f64)>
    where
        F: Fn(&EpochRecord) -> f64,
    {
        self.rows
            .iter()
            .map(|r| (f64::from(r.epoch), pick(r)))
            .collect()
    }
}
