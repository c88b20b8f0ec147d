//! Scenario projection engine

use log::{debug, info};

use super::eps::project_eps;
use super::summary::{compute_scenario_summary, ScenarioSummary};
use super::table::{EpsTable, ProjectionResult};
use crate::assumptions::{ProjectionRequest, Scenario};
use crate::error::Result;

/// Runs the bear, base and bull projections for one input snapshot
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    request: ProjectionRequest,
}

impl ProjectionEngine {
    /// Create a new projection engine for the given inputs
    pub fn new(request: ProjectionRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &ProjectionRequest {
        &self.request
    }

    /// Project one scenario: its EPS trajectory and final-year summary.
    ///
    /// Does not validate the request; `project` does that once up front.
    pub fn project_scenario(&self, scenario: Scenario) -> Result<(Vec<f64>, ScenarioSummary)> {
        let globals = &self.request.globals;
        let assumptions = self.request.scenarios.get(scenario);

        let trajectory = project_eps(globals.starting_eps, assumptions.growth_rate_pct, globals.years);
        let summary = compute_scenario_summary(
            scenario,
            &trajectory,
            assumptions.exit_pe,
            globals.current_price,
        )?;

        debug!(
            "{} case: growth={}% exit P/E={} final EPS={} final price={} return={}%",
            scenario,
            assumptions.growth_rate_pct,
            assumptions.exit_pe,
            summary.final_eps,
            summary.final_price,
            summary.total_return_pct,
        );

        Ok((trajectory, summary))
    }

    /// Validate the inputs and run all three scenarios
    pub fn project(&self) -> Result<ProjectionResult> {
        self.request.validate()?;

        let (bear, bear_summary) = self.project_scenario(Scenario::Bear)?;
        let (base, base_summary) = self.project_scenario(Scenario::Base)?;
        let (bull, bull_summary) = self.project_scenario(Scenario::Bull)?;

        info!(
            "Projected {} years from EPS {} at price {}",
            self.request.globals.years,
            self.request.globals.starting_eps,
            self.request.globals.current_price,
        );

        Ok(ProjectionResult {
            request: self.request,
            table: EpsTable::from_trajectories(&bear, &base, &bull),
            summaries: [bear_summary, base_summary, bull_summary],
        })
    }
}

/// Shorthand for `ProjectionEngine::new(*request).project()`
pub fn run_projection(request: &ProjectionRequest) -> Result<ProjectionResult> {
    ProjectionEngine::new(*request).project()
}
