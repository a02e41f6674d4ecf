// ============================================================
// Layer 6 - Chart Rendering
// ============================================================
// Draws a ChartSpec as an SVG line chart with plotters:
//
//   ┌──────────── title ────────────┐
//   │  y_label                ┌────┐│
//   │    │  ╲___   series 1   │ ── ││ ← legend
//   │    │      ╲__ series 2  │ ── ││
//   │    └──────────── x_label└────┘│
//   └───────────────────────────────┘
//
// When `open` is set the written file is handed to the
// platform's default viewer. A viewer that fails to start
// only produces a warning.
//
// Reference: plotters crate documentation (ChartBuilder, LineSeries)

use std::{
    io,
    path::{Path, PathBuf},
    process::Command,
};
use plotters::prelude::*;

use crate::domain::{chart::ChartSpec, error::PipelineError, traits::ChartRenderer};

const CHART_SIZE: (u32, u32) = (960, 640);

pub struct SvgChartRenderer {
    open: bool,
}

impl SvgChartRenderer {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    fn draw(&self, chart: &ChartSpec, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_range, y_range) = chart.bounds();
        let mut ctx = ChartBuilder::on(&root)
            .caption(chart.title.as_str(), ("sans-serif", 28))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d(x_range, y_range)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .draw()?;

        for (idx, series) in chart.series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            ctx.draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }

        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<PathBuf, PipelineError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.draw(chart, path).map_err(|e| PipelineError::Chart {
            path:    path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Wrote '{}' to '{}'", chart.title, path.display());

        if self.open {
            if let Err(e) = open_in_viewer(path) {
                tracing::warn!("Could not open '{}': {}", path.display(), e);
            }
        }

        Ok(path.to_path_buf())
    }
}

/// Spawn the platform's "open this file" command without waiting for it.
fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path).spawn().map(|_| ())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::Series;
    use std::fs;

    #[test]
    fn test_writes_svg_with_title_axes_and_legend() {
        let tmp   = tempfile::tempdir().unwrap();
        let path  = tmp.path().join("charts").join("box_loss_curve.svg");
        let chart = ChartSpec::new("Box Loss Curve", "Epoch", "Loss")
            .with_series(Series::new("Train Box Loss", vec![(1.0, 1.2), (2.0, 1.0), (3.0, 0.9)]))
            .with_series(Series::new("Val Box Loss",   vec![(1.0, 1.3), (2.0, 1.1), (3.0, 1.0)]));

        let written = SvgChartRenderer::new(false).render(&chart, &path).unwrap();

        assert_eq!(written, path);
        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"), "not an SVG document");
        for text in ["Box Loss Curve", "Epoch", "Loss", "Train Box Loss", "Val Box Loss"] {
            assert!(svg.contains(text), "missing '{text}'");
        }
    }
}
