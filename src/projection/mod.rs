//! Projection engine for EPS trajectories and scenario summaries

mod eps;
mod summary;
mod table;
mod engine;

pub use eps::project_eps;
pub use summary::{compute_scenario_summary, ScenarioSummary};
pub use table::{ChartSeries, EpsRow, EpsTable, ProjectionResult};
pub use engine::{run_projection, ProjectionEngine};
