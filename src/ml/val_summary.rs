// ============================================================
// Layer 5 - Validation Summary Parser
// ============================================================
// `yolo val` prints a per-class table and finishes with an
// aggregate row for all classes:
//
//                  Class     Images  Instances      Box(P          R      mAP50  mAP50-95)
//                    all        128        929      0.641      0.537      0.605      0.446
//                   weed        128        512      0.702      0.581      0.655      0.488
//
// The `all` row holds the four numbers we report. Columns
// are whitespace separated; the last four are P, R, mAP50
// and mAP50-95 in that order.

use crate::domain::metrics::ValidationMetrics;

/// Find the `all` row in validation output and read its metrics.
/// Returns None when no well-formed row is present.
pub fn parse_val_summary(output: &str) -> Option<ValidationMetrics> {
    output.lines().find_map(parse_all_row)
}

fn parse_all_row(line: &str) -> Option<ValidationMetrics> {
    let mut fields = line.split_whitespace();
    if fields.next()? != "all" {
        return None;
    }

    let numbers: Vec<f64> = fields.map(str::parse).collect::<Result<_, _>>().ok()?;
    // images, instances, P, R, mAP50, mAP50-95
    if numbers.len() < 6 {
        return None;
    }

    let tail = &numbers[numbers.len() - 4..];
    Some(ValidationMetrics::new(tail[0], tail[1], tail[2], tail[3]))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Ultralytics 8.3.0 🚀 Python-3.11.4 torch-2.3.0 CUDA:0 (NVIDIA A10, 22732MiB)
val: Scanning /data/weeds/labels/val.cache... 128 images, 0 backgrounds, 0 corrupt
                 Class     Images  Instances      Box(P          R      mAP50  mAP50-95)
                   all        128        929      0.641      0.537      0.605      0.446
                  weed        128        512      0.702      0.581      0.655      0.488
Speed: 0.2ms preprocess, 4.1ms inference, 0.0ms loss, 1.3ms postprocess per image
";

    #[test]
    fn test_reads_each_metric_from_its_own_column() {
        let m = parse_val_summary(SAMPLE).unwrap();
        assert_eq!(m.precision, 0.641);
        assert_eq!(m.recall,    0.537);
        assert_eq!(m.map50,     0.605);
        assert_eq!(m.map50_95,  0.446);
    }

    #[test]
    fn test_no_summary_row() {
        assert!(parse_val_summary("Speed: 0.2ms preprocess\n").is_none());
        assert!(parse_val_summary("").is_none());
    }

    #[test]
    fn test_ignores_malformed_all_rows() {
        // "all" appearing as prose, or with too few columns
        assert!(parse_val_summary("all done\n").is_none());
        assert!(parse_val_summary("all 1 2 3\n").is_none());
    }
}
