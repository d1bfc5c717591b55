//! Profit comparison chart.
//!
//! Banks are placed on the x axis in the order the store returned them, with
//! their rounded profit on the y axis, drawn as a line with circle markers.
//! Tick labels under the x axis are turned 90 degrees; plotters only rotates
//! text in quarter turns, so the 45 degree slant of a matplotlib chart is
//! approximated by vertical names.

use anyhow::Context;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::reports::offers::ComputedResult;

pub const DEFAULT_CHART_FILE: &str = "banks_profit.svg";
pub const CHART_TITLE: &str = "Profit Comparison for Different Banks";

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const CHART_SIZE: (u32, u32) = (1000, 500);
/// Axis bounds must stay finite for plotters to lay out ticks
const Y_LIMIT: f64 = f64::MAX / 4.0;

/// Something that can present the profit comparison
pub trait ChartRenderer {
    /// Render `results` and return where the chart was written.
    fn render(&self, results: &[ComputedResult]) -> Result<PathBuf>;
}

/// Writes the chart as an SVG file
pub struct SvgChart {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgChart {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: CHART_SIZE,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SvgChart {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_FILE)
    }
}

/// y range covering every finite profit, padded by 10% (at least 1.0) and
/// kept within `±Y_LIMIT`
fn profit_range(results: &[ComputedResult]) -> (f64, f64) {
    let finite = results.iter().map(|r| r.profit).filter(|p| p.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p), hi.max(p))
    });
    if min > max {
        return (0.0, 1.0);
    }
    // Halved span cannot overflow even for profits near ±f64::MAX
    let pad = ((max / 2.0 - min / 2.0) * 0.2).max(1.0);
    ((min - pad).max(-Y_LIMIT), (max + pad).min(Y_LIMIT))
}

impl ChartRenderer for SvgChart {
    fn render(&self, results: &[ComputedResult]) -> Result<PathBuf> {
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        let (y_min, y_max) = profit_range(results);
        let count = names.len() as i32;

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(110)
            .y_label_area_size(80)
            .build_cartesian_2d(-1i32..count, y_min..y_max)?;

        let label_for = |x: &i32| -> String {
            usize::try_from(*x)
                .ok()
                .and_then(|i| names.get(i))
                .map(|name| name.to_string())
                .unwrap_or_default()
        };

        chart
            .configure_mesh()
            .x_desc("Bank")
            .y_desc("Profit")
            .x_labels(names.len() + 3)
            .x_label_formatter(&label_for)
            .x_label_style(
                ("sans-serif", 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()?;

        let points: Vec<(i32, f64)> = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.profit.is_finite())
            .map(|(i, r)| (i as i32, r.profit))
            .collect();

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            SKY_BLUE.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, SKY_BLUE.filled())),
        )?;

        root.present()
            .context(format!("Failed to write chart to {:?}", self.path))?;
        info!("Chart written to {:?}", self.path);

        Ok(self.path.clone())
    }
}
