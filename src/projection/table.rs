//! Projection output structures

use serde::{Deserialize, Serialize};

use super::summary::ScenarioSummary;
use crate::assumptions::{ProjectionRequest, Scenario};

/// A single row of the EPS table for one projected year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsRow {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Bear EPS")]
    pub bear_eps: f64,
    #[serde(rename = "Base EPS")]
    pub base_eps: f64,
    #[serde(rename = "Bull EPS")]
    pub bull_eps: f64,
}

impl EpsRow {
    pub fn eps(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Bear => self.bear_eps,
            Scenario::Base => self.base_eps,
            Scenario::Bull => self.bull_eps,
        }
    }
}

/// Year-by-year EPS for all three scenarios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpsTable {
    pub rows: Vec<EpsRow>,
}

impl EpsTable {
    /// Zip three equal-length trajectories into rows numbered from year 1
    pub fn from_trajectories(bear: &[f64], base: &[f64], bull: &[f64]) -> Self {
        let rows = bear
            .iter()
            .zip(base)
            .zip(bull)
            .enumerate()
            .map(|(i, ((&bear_eps, &base_eps), &bull_eps))| EpsRow {
                year: i as u32 + 1,
                bear_eps,
                base_eps,
                bull_eps,
            })
            .collect();
        Self { rows }
    }

    /// Add a row
    pub fn add_row(&mut self, row: EpsRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// EPS column for one scenario
    pub fn column(&self, scenario: Scenario) -> Vec<f64> {
        self.rows.iter().map(|r| r.eps(scenario)).collect()
    }
}

/// One line of the EPS chart, keyed by year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub scenario: Scenario,
    pub points: Vec<(u32, f64)>,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Inputs the result was computed from
    pub request: ProjectionRequest,

    /// Per-year EPS table
    pub table: EpsTable,

    /// Final-year summaries in bear, base, bull order
    pub summaries: [ScenarioSummary; 3],
}

impl ProjectionResult {
    pub fn summary(&self, scenario: Scenario) -> &ScenarioSummary {
        match scenario {
            Scenario::Bear => &self.summaries[0],
            Scenario::Base => &self.summaries[1],
            Scenario::Bull => &self.summaries[2],
        }
    }

    /// Series for a line chart with year on the x axis
    pub fn chart_series(&self) -> Vec<ChartSeries> {
        Scenario::ALL
            .iter()
            .map(|&scenario| ChartSeries {
                scenario,
                points: self
                    .table
                    .rows
                    .iter()
                    .map(|r| (r.year, r.eps(scenario)))
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_trajectories_numbers_years() {
        let table = EpsTable::from_trajectories(&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], EpsRow { year: 1, bear_eps: 1.0, base_eps: 3.0, bull_eps: 5.0 });
        assert_eq!(table.rows[1].year, 2);
        assert_eq!(table.column(Scenario::Bull), vec![5.0, 6.0]);
    }
}
