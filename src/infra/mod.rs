// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Filesystem-facing pieces shared by the use cases:
//
//   run_layout.rs    - where a run's weights, results.csv and
//                      rendered charts live on disk
//
//   results_table.rs - parses the per-epoch results.csv written
//                      by the detection library during training
//
//   charts.rs        - renders ChartSpecs to SVG with plotters
//                      and optionally opens them in a viewer
//
// Reference: Rust Book §7 (Modules), §9 (Error Handling)

/// Run directory conventions
pub mod run_layout;

/// Results CSV reader
pub mod results_table;

/// SVG line chart renderer
pub mod charts;
