// ============================================================
// Layer 5 - Detection Library Layer
// ============================================================
// Everything that knows about the external YOLO tooling lives
// here. The rest of the crate only sees the DetectionBackend
// trait from Layer 3.
//
//   ultralytics.rs - builds and runs `yolo detect <mode> ...`
//                    invocations for train / val / predict
//
//   val_summary.rs - reads precision, recall, mAP@50 and
//                    mAP@50-95 out of `yolo val` output
//
// Reference: Ultralytics CLI docs, Rust Book §12 (std::process)

/// `yolo` command-line backend implementing DetectionBackend
pub mod ultralytics;

/// Parser for the validation summary row
pub mod val_summary;
