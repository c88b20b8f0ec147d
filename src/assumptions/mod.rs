//! Projection inputs: global assumptions shared by every scenario and the
//! per-scenario growth and exit multiple

pub mod loader;

pub use loader::{load_request, load_request_from_reader};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ProjectionError, Result};

/// Longest horizon accepted by request validation
pub const MAX_HORIZON_YEARS: u32 = 1000;

/// Named growth scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Bear,
    Base,
    Bull,
}

impl Scenario {
    /// All scenarios in display order
    pub const ALL: [Scenario; 3] = [Scenario::Bear, Scenario::Base, Scenario::Bull];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Bear => "Bear",
            Scenario::Base => "Base",
            Scenario::Bull => "Bull",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Growth and exit multiple for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioAssumptions {
    /// Annual EPS growth in percent (8.0 = 8%)
    pub growth_rate_pct: f64,

    /// Price-to-earnings multiple applied to final-year EPS
    pub exit_pe: f64,
}

impl ScenarioAssumptions {
    pub fn new(growth_rate_pct: f64, exit_pe: f64) -> Self {
        Self { growth_rate_pct, exit_pe }
    }

    /// Default inputs for a scenario
    pub fn default_for(scenario: Scenario) -> Self {
        match scenario {
            Scenario::Bear => Self::new(3.0, 15.0),
            Scenario::Base => Self::new(8.0, 20.0),
            Scenario::Bull => Self::new(12.0, 25.0),
        }
    }

    fn validate(&self, scenario: Scenario) -> Result<()> {
        if !self.growth_rate_pct.is_finite() || self.growth_rate_pct <= -100.0 {
            return Err(ProjectionError::GrowthRateAtOrBelowFloor {
                scenario,
                growth_rate_pct: self.growth_rate_pct,
            });
        }
        if !self.exit_pe.is_finite() {
            return Err(ProjectionError::NonFiniteExitMultiple {
                scenario,
                exit_pe: self.exit_pe,
            });
        }
        Ok(())
    }
}

/// Inputs shared by all three scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalAssumptions {
    pub current_price: f64,

    /// Trailing twelve month EPS the projection compounds from
    pub starting_eps: f64,

    /// Number of years to project
    pub years: u32,
}

impl Default for GlobalAssumptions {
    fn default() -> Self {
        Self {
            current_price: 100.0,
            starting_eps: 5.0,
            years: 5,
        }
    }
}

/// The three scenarios, always present together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSet {
    pub bear: ScenarioAssumptions,
    pub base: ScenarioAssumptions,
    pub bull: ScenarioAssumptions,
}

impl ScenarioSet {
    pub fn get(&self, scenario: Scenario) -> &ScenarioAssumptions {
        match scenario {
            Scenario::Bear => &self.bear,
            Scenario::Base => &self.base,
            Scenario::Bull => &self.bull,
        }
    }

    pub fn get_mut(&mut self, scenario: Scenario) -> &mut ScenarioAssumptions {
        match scenario {
            Scenario::Bear => &mut self.bear,
            Scenario::Base => &mut self.base,
            Scenario::Bull => &mut self.bull,
        }
    }

    /// Iterate scenarios in bear, base, bull order
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &ScenarioAssumptions)> {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self {
            bear: ScenarioAssumptions::default_for(Scenario::Bear),
            base: ScenarioAssumptions::default_for(Scenario::Base),
            bull: ScenarioAssumptions::default_for(Scenario::Bull),
        }
    }
}

/// Immutable snapshot of every input the engine needs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub globals: GlobalAssumptions,

    #[serde(flatten)]
    pub scenarios: ScenarioSet,
}

impl ProjectionRequest {
    pub fn new(globals: GlobalAssumptions, scenarios: ScenarioSet) -> Self {
        Self { globals, scenarios }
    }

    /// Check the input constraints before projecting.
    ///
    /// A current price of zero would make the total return a division by
    /// zero, so it is rejected rather than reported as infinity. Growth at or
    /// below -100% is rejected for the same reason: EPS would collapse to zero
    /// or flip sign every year.
    pub fn validate(&self) -> Result<()> {
        let g = &self.globals;
        if !g.current_price.is_finite() || g.current_price <= 0.0 {
            return Err(ProjectionError::NonPositiveCurrentPrice(g.current_price));
        }
        if !g.starting_eps.is_finite() || g.starting_eps < 0.0 {
            return Err(ProjectionError::NegativeStartingEps(g.starting_eps));
        }
        if g.years == 0 || g.years > MAX_HORIZON_YEARS {
            return Err(ProjectionError::InvalidHorizon {
                years: g.years,
                max: MAX_HORIZON_YEARS,
            });
        }
        for (scenario, assumptions) in self.scenarios.iter() {
            assumptions.validate(scenario)?;
        }
        Ok(())
    }
}
