//! Error types for projection and export

use thiserror::Error;

use crate::assumptions::Scenario;

/// Errors raised while validating inputs, projecting, or exporting
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Current price must be strictly positive to compute a return
    #[error("current price must be greater than zero, got {0}")]
    NonPositiveCurrentPrice(f64),

    /// Starting EPS must be a finite, non-negative number
    #[error("starting EPS must be zero or greater, got {0}")]
    NegativeStartingEps(f64),

    /// Horizon outside 1..=MAX_HORIZON_YEARS
    #[error("projection horizon must be between 1 and {max} years, got {years}")]
    InvalidHorizon { years: u32, max: u32 },

    /// Growth at or below -100% collapses the compounding base
    #[error("{scenario} growth rate must be above -100%, got {growth_rate_pct}%")]
    GrowthRateAtOrBelowFloor {
        scenario: Scenario,
        growth_rate_pct: f64,
    },

    #[error("{scenario} exit P/E must be a finite number, got {exit_pe}")]
    NonFiniteExitMultiple { scenario: Scenario, exit_pe: f64 },

    /// Final price or return overflowed the f64 range
    #[error("{scenario} final price or return is not finite (final EPS {final_eps}, exit P/E {exit_pe})")]
    NonFiniteResult {
        scenario: Scenario,
        final_eps: f64,
        exit_pe: f64,
    },

    /// A summary needs at least one projected year
    #[error("EPS trajectory is empty")]
    EmptyTrajectory,

    /// CSV header did not match the export layout
    #[error("unexpected CSV header: expected `{expected}`, found `{found}`")]
    UnexpectedHeader { expected: String, found: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ProjectionError>;
