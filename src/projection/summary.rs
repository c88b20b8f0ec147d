//! Final-year price and return for one scenario

use serde::{Deserialize, Serialize};

use crate::assumptions::Scenario;
use crate::error::{ProjectionError, Result};

/// Terminal values of one scenario. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    pub final_eps: f64,
    pub exit_pe: f64,
    pub final_price: f64,
    /// Total return over the horizon in percent (46.9 = 46.9%)
    pub total_return_pct: f64,
}

/// Price the last year of a trajectory at the exit multiple and compare it
/// with the current price.
///
/// Fails with `NonPositiveCurrentPrice` instead of returning an infinite or
/// NaN return when `current_price` is zero, negative or not finite, and with
/// `NonFiniteResult` when EPS growth has overflowed to infinity.
pub fn compute_scenario_summary(
    scenario: Scenario,
    trajectory: &[f64],
    exit_pe: f64,
    current_price: f64,
) -> Result<ScenarioSummary> {
    let final_eps = *trajectory.last().ok_or(ProjectionError::EmptyTrajectory)?;
    if !current_price.is_finite() || current_price <= 0.0 {
        return Err(ProjectionError::NonPositiveCurrentPrice(current_price));
    }

    let final_price = final_eps * exit_pe;
    let total_return_pct = (final_price / current_price - 1.0) * 100.0;
    if !final_price.is_finite() || !total_return_pct.is_finite() {
        return Err(ProjectionError::NonFiniteResult {
            scenario,
            final_eps,
            exit_pe,
        });
    }

    Ok(ScenarioSummary {
        scenario,
        final_eps,
        exit_pe,
        final_price,
        total_return_pct,
    })
}
