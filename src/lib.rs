//! Stock Projection - EPS and implied price under bear, base and bull scenarios
//!
//! This library provides:
//! - Compound EPS projection over a fixed horizon
//! - Final-year price from an exit P/E and total return against the current price
//! - CSV export of the per-year EPS table
//! - Text rendering of the tables and an EPS chart

pub mod error;
pub mod assumptions;
pub mod projection;
pub mod export;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use assumptions::{GlobalAssumptions, ProjectionRequest, Scenario, ScenarioAssumptions, ScenarioSet};
pub use projection::{
    compute_scenario_summary, project_eps, run_projection, EpsTable, ProjectionEngine,
    ProjectionResult, ScenarioSummary,
};
