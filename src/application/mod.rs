// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// One use case per pipeline action. Each borrows the shared
// PipelineConfig plus the trait objects it needs, runs its
// steps, and returns a value for Layer 1 to print.
//
// Rules for this layer:
//   - No printing to stdout (that's Layer 1)
//   - No process spawning (that's Layer 5)
//   - No CSV or SVG handling (that's Layer 6)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Train the detector
pub mod train_use_case;

// Validate the best checkpoint
pub mod evaluate_use_case;

// Predict on an image / video / stream
pub mod infer_use_case;

// Chart the training curves
pub mod visualize_use_case;

#[cfg(test)]
pub mod testing;
