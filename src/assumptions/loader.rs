//! JSON loader for projection requests
//!
//! Every field is optional; missing fields fall back to the default inputs.
//!
//! ```json
//! { "current_price": 120.0, "years": 10, "base": { "growth_rate_pct": 9.0, "exit_pe": 22.0 } }
//! ```

use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{GlobalAssumptions, ProjectionRequest, ScenarioAssumptions, ScenarioSet};
use crate::error::Result;

/// Config file layout. Unknown or misspelled keys are an error rather than
/// being dropped in favour of the defaults.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    current_price: f64,
    starting_eps: f64,
    years: u32,
    bear: ScenarioAssumptions,
    base: ScenarioAssumptions,
    bull: ScenarioAssumptions,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let defaults = ProjectionRequest::default();
        Self {
            current_price: defaults.globals.current_price,
            starting_eps: defaults.globals.starting_eps,
            years: defaults.globals.years,
            bear: defaults.scenarios.bear,
            base: defaults.scenarios.base,
            bull: defaults.scenarios.bull,
        }
    }
}

impl From<ConfigFile> for ProjectionRequest {
    fn from(config: ConfigFile) -> Self {
        ProjectionRequest::new(
            GlobalAssumptions {
                current_price: config.current_price,
                starting_eps: config.starting_eps,
                years: config.years,
            },
            ScenarioSet {
                bear: config.bear,
                base: config.base,
                bull: config.bull,
            },
        )
    }
}

/// Load a request from a JSON file
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<ProjectionRequest> {
    let path = path.as_ref();
    debug!("Loading projection request from {}", path.display());
    let file = File::open(path)?;
    load_request_from_reader(BufReader::new(file))
}

/// Load a request from any reader (e.g., string buffer, stdin)
pub fn load_request_from_reader<R: Read>(reader: R) -> Result<ProjectionRequest> {
    let config: ConfigFile = serde_json::from_reader(reader)?;
    Ok(config.into())
}
