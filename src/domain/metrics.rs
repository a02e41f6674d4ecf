// ============================================================
// Layer 3 - Validation Metrics
// ============================================================
// The four box-detection scalars reported after validation.
// Each field is read from its own column of the library's
// summary row.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    /// Box precision (P) over all classes
    pub precision: f64,
    /// Box recall (R) over all classes
    pub recall:    f64,
    /// Mean average precision at IoU 0.50
    pub map50:     f64,
    /// Mean average precision averaged over IoU 0.50..0.95
    pub map50_95:  f64,
}

impl ValidationMetrics {
    pub fn new(precision: f64, recall: f64, map50: f64, map50_95: f64) -> Self {
        Self { precision, recall, map50, map50_95 }
    }
}
