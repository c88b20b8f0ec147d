//! Text rendering of projection results
//!
//! All rounding and percent formatting happens here; the engine hands over
//! raw values.

use crate::assumptions::Scenario;
use crate::projection::{ChartSeries, EpsTable, ProjectionResult, ScenarioSummary};

/// Rows of the plotted chart grid
pub const CHART_HEIGHT: usize = 12;

/// Widest plot area in characters; longer horizons are sampled
pub const CHART_MAX_WIDTH: usize = 60;

fn marker(scenario: Scenario) -> char {
    match scenario {
        Scenario::Bear => '.',
        Scenario::Base => 'o',
        Scenario::Bull => '*',
    }
}

/// EPS table with every value to two decimals
pub fn format_eps_table(table: &EpsTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6} {:>12} {:>12} {:>12}\n",
        "Year", "Bear EPS", "Base EPS", "Bull EPS"
    ));
    out.push_str(&"-".repeat(45));
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2}\n",
            row.year, row.bear_eps, row.base_eps, row.bull_eps
        ));
    }
    out
}

/// One summary row: EPS and price to 2 decimals, P/E to 1, return as `{:.1}%`
pub fn format_summary_row(summary: &ScenarioSummary) -> String {
    format!(
        "{:<8} {:>10.2} {:>9.1} {:>12.2} {:>15}",
        summary.scenario.name(),
        summary.final_eps,
        summary.exit_pe,
        summary.final_price,
        format!("{:.1}%", summary.total_return_pct),
    )
}

pub fn format_summary_table(summaries: &[ScenarioSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>10} {:>9} {:>12} {:>15}\n",
        "Scenario", "Final EPS", "Exit P/E", "Final Price", "Total Return %"
    ));
    out.push_str(&"-".repeat(58));
    out.push('\n');
    for summary in summaries {
        out.push_str(&format_summary_row(summary));
        out.push('\n');
    }
    out
}

/// Plot the series on a character grid with year on the x axis.
///
/// Where series overlap the later one (bull over base over bear) wins.
pub fn render_chart(series: &[ChartSeries]) -> String {
    let points = series.iter().map(|s| s.points.len()).max().unwrap_or(0);
    if points == 0 {
        return String::new();
    }

    let values = series.iter().flat_map(|s| s.points.iter().map(|&(_, v)| v));
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = if max > min { max - min } else { 1.0 };

    let stride = points.div_ceil(CHART_MAX_WIDTH);
    let columns = points.div_ceil(stride);
    let mut grid = vec![vec![' '; columns]; CHART_HEIGHT];

    for s in series {
        for (col, &(_, value)) in s.points.iter().step_by(stride).enumerate() {
            let level = ((value - min) / span * (CHART_HEIGHT - 1) as f64).round() as usize;
            let row = CHART_HEIGHT - 1 - level.min(CHART_HEIGHT - 1);
            grid[row][col] = marker(s.scenario);
        }
    }

    let mut out = String::new();
    for (i, line) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{:>10.2}", max)
        } else if i == CHART_HEIGHT - 1 {
            format!("{:>10.2}", min)
        } else {
            " ".repeat(10)
        };
        out.push_str(&format!("{} |{}\n", label, line.iter().collect::<String>()));
    }
    out.push_str(&format!("{} +{}\n", " ".repeat(10), "-".repeat(columns)));

    let first_year = series.iter().find_map(|s| s.points.first()).map(|p| p.0).unwrap_or(1);
    let last_year = series.iter().find_map(|s| s.points.last()).map(|p| p.0).unwrap_or(1);
    out.push_str(&format!("{} Year {} to {}\n", " ".repeat(11), first_year, last_year));

    let legend: Vec<String> = series
        .iter()
        .map(|s| format!("{} {}", marker(s.scenario), s.scenario.name()))
        .collect();
    out.push_str(&format!("{} {}\n", " ".repeat(11), legend.join("   ")));
    out
}

/// Full text report: EPS table, final-year summary and optionally the chart
pub fn render_report(result: &ProjectionResult, include_chart: bool) -> String {
    let mut out = String::new();
    out.push_str("Projected EPS (per year)\n");
    out.push_str("========================\n");
    out.push_str(&format_eps_table(&result.table));

    out.push_str("\nFinal Year Summary\n");
    out.push_str("==================\n");
    out.push_str(&format_summary_table(&result.summaries));

    if include_chart {
        out.push_str("\nEPS Projection Chart\n");
        out.push_str("====================\n");
        out.push_str(&render_chart(&result.chart_series()));
    }
    out
}
