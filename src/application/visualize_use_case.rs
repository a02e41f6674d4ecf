// ============================================================
// Layer 2 - VisualizeUseCase
// ============================================================
// Turns results.csv into two training-curve charts:
//
//   box_loss_curve.svg          train vs. val box loss
//   precision_recall_curve.svg  precision vs. recall
//
// A missing results.csv is not an error; the caller is told
// and nothing is drawn. The table is only ever read.

use std::path::PathBuf;

use crate::domain::{
    chart::{ChartSpec, Series},
    config::PipelineConfig,
    error::PipelineError,
    traits::ChartRenderer,
};
use crate::infra::{results_table::ResultsTable, run_layout::RunLayout};

pub const LOSS_CHART_FILE: &str = "box_loss_curve.svg";
pub const PR_CHART_FILE: &str   = "precision_recall_curve.svg";

#[derive(Debug, Clone, PartialEq)]
pub enum VisualizeOutcome {
    /// Paths of the charts that were written
    Rendered(Vec<PathBuf>),
    /// results.csv was not there
    ResultsMissing(PathBuf),
}

/// Train/val box loss against epoch
pub fn loss_chart(table: &ResultsTable) -> ChartSpec {
    ChartSpec::new("Box Loss Curve", "Epoch", "Loss")
        .with_series(Series::new("Train Box Loss", table.column(|r| r.train_box_loss)))
        .with_series(Series::new("Val Box Loss",   table.column(|r| r.val_box_loss)))
}

/// Precision and recall against epoch
pub fn precision_recall_chart(table: &ResultsTable) -> ChartSpec {
    ChartSpec::new("Precision & Recall Curve", "Epoch", "Score")
        .with_series(Series::new("Precision", table.column(|r| r.precision)))
        .with_series(Series::new("Recall",    table.column(|r| r.recall)))
}

fn fmt_optional(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.3}")).unwrap_or_else(|| "n/a".to_string())
}

pub struct VisualizeUseCase<'a> {
    config:   &'a PipelineConfig,
    renderer: &'a dyn ChartRenderer,
}

impl<'a> VisualizeUseCase<'a> {
    pub fn new(config: &'a PipelineConfig, renderer: &'a dyn ChartRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn execute(&self) -> Result<VisualizeOutcome, PipelineError> {
        let layout  = RunLayout::from_config(self.config);
        let results = layout.results_csv();

        if !results.is_file() {
            tracing::warn!("No results table at '{}'", results.display());
            return Ok(VisualizeOutcome::ResultsMissing(results));
        }

        let table = ResultsTable::load(&results)?;
        match table.rows().last() {
            Some(last) => tracing::info!(
                "{} epochs; last: precision={:.3} recall={:.3} mAP50={} mAP50-95={}",
                table.rows().len(),
                last.precision,
                last.recall,
                fmt_optional(last.map50),
                fmt_optional(last.map50_95),
            ),
            None => tracing::warn!("'{}' has no epochs yet; charts will be empty", results.display()),
        }

        let charts = [
            (loss_chart(&table),             LOSS_CHART_FILE),
            (precision_recall_chart(&table), PR_CHART_FILE),
        ];

        let mut written = Vec::with_capacity(charts.len());
        for (chart, file) in &charts {
            written.push(self.renderer.render(chart, &layout.chart_path(file))?);
        }
        Ok(VisualizeOutcome::Rendered(written))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{seed_results, test_config, RecordingRenderer};
    use std::fs;

    #[test]
    fn test_three_epoch_table_gives_two_labelled_charts() {
        let tmp      = tempfile::tempdir().unwrap();
        let cfg      = test_config(tmp.path());
        seed_results(&cfg);
        let renderer = RecordingRenderer::default();

        let outcome = VisualizeUseCase::new(&cfg, &renderer).execute().unwrap();

        let run_dir = cfg.run_dir();
        assert_eq!(
            outcome,
            VisualizeOutcome::Rendered(vec![
                run_dir.join(LOSS_CHART_FILE),
                run_dir.join(PR_CHART_FILE),
            ])
        );

        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 2);

        let (loss, _) = &rendered[0];
        assert_eq!(loss.title, "Box Loss Curve");
        assert_eq!((loss.x_label.as_str(), loss.y_label.as_str()), ("Epoch", "Loss"));
        assert_eq!(loss.series.len(), 2);
        assert_eq!(loss.series[0].label, "Train Box Loss");
        assert_eq!(loss.series[0].points, vec![(1.0, 0.9), (2.0, 0.7), (3.0, 0.5)]);
        assert_eq!(loss.series[1].label, "Val Box Loss");
        assert_eq!(loss.series[1].points, vec![(1.0, 1.0), (2.0, 0.8), (3.0, 0.6)]);

        let (pr, _) = &rendered[1];
        assert_eq!(pr.title, "Precision & Recall Curve");
        assert_eq!((pr.x_label.as_str(), pr.y_label.as_str()), ("Epoch", "Score"));
        assert_eq!(pr.series[0].label, "Precision");
        assert_eq!(pr.series[0].points, vec![(1.0, 0.5), (2.0, 0.6), (3.0, 0.7)]);
        assert_eq!(pr.series[1].label, "Recall");
        assert_eq!(pr.series[1].points, vec![(1.0, 0.4), (2.0, 0.5), (3.0, 0.6)]);
        assert!(pr.series.iter().all(|s| s.points.len() == 3));
    }

    #[test]
    fn test_visualizing_twice_is_identical_and_read_only() {
        let tmp      = tempfile::tempdir().unwrap();
        let cfg      = test_config(tmp.path());
        let csv_path = seed_results(&cfg);
        let before   = fs::read(&csv_path).unwrap();
        let renderer = RecordingRenderer::default();
        let use_case = VisualizeUseCase::new(&cfg, &renderer);

        let first  = use_case.execute().unwrap();
        let second = use_case.execute().unwrap();

        assert_eq!(first, second);
        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 4);
        assert_eq!(rendered[0], rendered[2]);
        assert_eq!(rendered[1], rendered[3]);
        assert_eq!(fs::read(&csv_path).unwrap(), before);
    }

    #[test]
    fn test_missing_results_renders_nothing() {
        let tmp      = tempfile::tempdir().unwrap();
        let cfg      = test_config(tmp.path());
        let renderer = RecordingRenderer::default();

        let outcome = VisualizeUseCase::new(&cfg, &renderer).execute().unwrap();

        assert_eq!(
            outcome,
            VisualizeOutcome::ResultsMissing(cfg.run_dir().join("results.csv"))
        );
        assert!(renderer.rendered().is_empty());
    }

    #[test]
    fn test_malformed_results_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = test_config(tmp.path());
        fs::create_dir_all(cfg.run_dir()).unwrap();
        fs::write(cfg.run_dir().join("results.csv"), "epoch,foo\n1,2\n").unwrap();
        let renderer = RecordingRenderer::default();

        let err = VisualizeUseCase::new(&cfg, &renderer).execute().unwrap_err();
        assert!(matches!(err, PipelineError::ResultsTable { .. }));
        assert!(renderer.rendered().is_empty());
    }
}
