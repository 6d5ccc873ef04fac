//! Bar charts of assessed footprints.

use anyhow::Result;
use carbonmine_core::Assessment;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

const COLORS: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];

/// Turns a company name into something safe to use in a file name.
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let stem = stem.trim_matches('_').to_string();
    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

/// Chart path for the assessment at `index`. The position keeps charts for
/// companies whose names sanitise to the same stem apart.
fn breakdown_path(output_dir: &Path, index: usize, name: &str) -> PathBuf {
    output_dir.join(format!("breakdown_{:02}_{}.png", index + 1, file_stem(name)))
}

/// Draws one bar per emission category for a single assessment.
pub fn plot_breakdown(output_dir: &Path, index: usize, assessment: &Assessment) -> Result<PathBuf> {
    let path = breakdown_path(output_dir, index, &assessment.company_name);
    let impacts = assessment.breakdown.impacts();
    let labels: Vec<String> = impacts.iter().map(|i| i.metric.clone()).collect();
    let values: Vec<f64> = impacts.iter().map(|i| i.value).collect();

    let title = if assessment.company_name.is_empty() {
        "Emissions by Category".to_string()
    } else {
        format!("Emissions by Category: {}", assessment.company_name)
    };
    draw_bars(&path, &title, &labels, &values)?;
    Ok(path)
}

/// Draws one bar per company, comparing totals.
pub fn plot_totals(output_dir: &Path, assessments: &[Assessment]) -> Result<PathBuf> {
    let path = output_dir.join("totals.png");
    let labels: Vec<String> = assessments.iter().map(|a| a.company_name.clone()).collect();
    let values: Vec<f64> = assessments.iter().map(|a| a.result.total_t_co2e).collect();
    draw_bars(&path, "Total Footprint by Company", &labels, &values)?;
    Ok(path)
}

fn draw_bars(path: &Path, title: &str, labels: &[String], values: &[f64]) -> Result<()> {
    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = values.iter().cloned().fold(0.0, f64::max);
    let min_value = values.iter().cloned().fold(0.0, f64::min);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
    let y_min = min_value * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 36).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..values.len() as u32).into_segmented(), y_min..y_max)?;

    let label_for = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(values.len())
        .x_label_formatter(&label_for)
        .y_desc("t CO2e / year")
        .draw()?;

    for (i, value) in values.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        chart.draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(12)
                .data(std::iter::once((i as u32, *value))),
        )?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stems_are_filesystem_safe() {
        assert_eq!(file_stem("Black Ridge Colliery"), "black_ridge_colliery");
        assert_eq!(file_stem("  Seam #4 / North "), "seam__4___north");
        assert_eq!(file_stem(""), "unnamed");
        assert_eq!(file_stem("???"), "unnamed");
    }

    #[test]
    fn colliding_names_get_distinct_chart_paths() {
        let dir = Path::new("charts");
        let first = breakdown_path(dir, 0, "North Pit");
        let second = breakdown_path(dir, 1, "north-pit");
        assert_ne!(first, second);
        assert_eq!(first, dir.join("breakdown_01_north_pit.png"));
        assert_eq!(second, dir.join("breakdown_02_north_pit.png"));
        assert_ne!(breakdown_path(dir, 2, ""), breakdown_path(dir, 3, ""));
    }
}
