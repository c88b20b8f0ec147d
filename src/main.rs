//! Stock Projection CLI
//!
//! Projects EPS and implied price for the bear, base and bull cases and
//! prints the tables and chart. Inputs come from defaults, then an optional
//! JSON config file, then command-line flags.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use stock_projection::{
    assumptions::load_request,
    export::{write_eps_csv_file, EXPORT_FILE_NAME},
    report::render_report,
    ProjectionEngine, ProjectionRequest, Scenario,
};

#[derive(Parser, Debug)]
#[command(name = "stock_projection")]
#[command(about = "Project EPS and stock price under bear, base and bull scenarios")]
struct Args {
    /// JSON file with projection inputs; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Current share price
    #[arg(long)]
    current_price: Option<f64>,

    /// Starting EPS (TTM)
    #[arg(long)]
    starting_eps: Option<f64>,

    /// Years to project
    #[arg(long)]
    years: Option<u32>,

    /// Bear EPS growth (%)
    #[arg(long, allow_hyphen_values = true)]
    bear_growth: Option<f64>,

    /// Bear exit P/E
    #[arg(long)]
    bear_pe: Option<f64>,

    /// Base EPS growth (%)
    #[arg(long, allow_hyphen_values = true)]
    base_growth: Option<f64>,

    /// Base exit P/E
    #[arg(long)]
    base_pe: Option<f64>,

    /// Bull EPS growth (%)
    #[arg(long, allow_hyphen_values = true)]
    bull_growth: Option<f64>,

    /// Bull exit P/E
    #[arg(long)]
    bull_pe: Option<f64>,

    /// Write the EPS table as CSV (default file: stock_projection.csv)
    #[arg(long, num_args = 0..=1, default_missing_value = EXPORT_FILE_NAME)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Skip the text chart
    #[arg(long)]
    no_chart: bool,
}

impl Args {
    /// Apply flag overrides on top of a base request
    fn apply(&self, mut request: ProjectionRequest) -> ProjectionRequest {
        let globals = &mut request.globals;
        if let Some(v) = self.current_price {
            globals.current_price = v;
        }
        if let Some(v) = self.starting_eps {
            globals.starting_eps = v;
        }
        if let Some(v) = self.years {
            globals.years = v;
        }

        let overrides = [
            (Scenario::Bear, self.bear_growth, self.bear_pe),
            (Scenario::Base, self.base_growth, self.base_pe),
            (Scenario::Bull, self.bull_growth, self.bull_pe),
        ];
        for (scenario, growth, pe) in overrides {
            let assumptions = request.scenarios.get_mut(scenario);
            if let Some(v) = growth {
                assumptions.growth_rate_pct = v;
            }
            if let Some(v) = pe {
                assumptions.exit_pe = v;
            }
        }
        request
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let base = match &args.config {
        Some(path) => load_request(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ProjectionRequest::default(),
    };
    let request = args.apply(base);
    info!("Running projection: {:?}", request);

    let result = ProjectionEngine::new(request)
        .project()
        .context("invalid projection inputs")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result, !args.no_chart));
    }

    if let Some(path) = &args.csv {
        write_eps_csv_file(&result.table, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !args.json {
            println!("\nEPS table written to: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "stock_projection",
            "--current-price", "80",
            "--years", "10",
            "--bear-growth", "-5",
            "--bull-pe", "30",
        ])
        .unwrap();
        let request = args.apply(ProjectionRequest::default());

        assert_eq!(request.globals.current_price, 80.0);
        assert_eq!(request.globals.starting_eps, 5.0);
        assert_eq!(request.globals.years, 10);
        assert_eq!(request.scenarios.bear.growth_rate_pct, -5.0);
        assert_eq!(request.scenarios.bear.exit_pe, 15.0);
        assert_eq!(request.scenarios.bull.exit_pe, 30.0);
    }

    #[test]
    fn test_csv_flag_default_path() {
        let args = Args::try_parse_from(["stock_projection", "--csv"]).unwrap();
        assert_eq!(args.csv, Some(PathBuf::from(EXPORT_FILE_NAME)));

        let args = Args::try_parse_from(["stock_projection", "--csv", "out.csv"]).unwrap();
        assert_eq!(args.csv, Some(PathBuf::from("out.csv")));

        let args = Args::try_parse_from(["stock_projection"]).unwrap();
        assert!(args.csv.is_none());
    }
}
