//! # Hull CLI
//!
//! Command-line front end for `hull_core`. Every number it prints comes from
//! the engine; this crate only parses arguments, reads JSON files and
//! renders results.
//!
//! ```text
//! hull_cli analyze --length 216 --beam 36 --depth 18 --thickness 0.75 --crew 700
//! hull_cli analyze --input request.json --json
//! hull_cli righting-arm --step 10
//! hull_cli compare
//! ```

mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;

use hull_core::calculations::stability::{righting_arm_curve, RightingArmInput};
use hull_core::loads::{lrfd_dead_live, lrfd_dead_only, service_combination};
use hull_core::{
    calculate, reference_designs, run_complete_analysis, AnalysisInput, AnalysisResult, AnalysisSettings,
    ComplianceThresholds, CrewStation, HullError, HullGeometry, LoadCase, LoadCombination, MaterialSpec,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Concrete canoe hull analysis")]
struct Cli {
    /// Log filter (e.g. "debug", "hull_core=debug"); overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the complete analysis and compliance checks for one hull.
    Analyze {
        #[command(flatten)]
        hull: HullArgs,

        /// Read a full JSON analysis request instead of the hull, mix and
        /// crew flags. Settings and threshold flags still apply.
        #[arg(long, conflicts_with_all = REQUEST_FIELD_ARGS)]
        input: Option<PathBuf>,

        /// Factor the bending loads through a load combination.
        #[arg(long, value_enum)]
        combination: Option<CombinationArg>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the righting-arm (GZ) curve for one hull.
    RightingArm {
        #[command(flatten)]
        hull: HullArgs,

        /// Heel angle increment (degrees).
        #[arg(long, default_value_t = 5.0)]
        step: f64,

        /// Largest heel angle (degrees, at most 90).
        #[arg(long, default_value_t = 90.0)]
        max_heel: f64,

        #[arg(long)]
        json: bool,
    },
    /// Analyse the reference designs side by side.
    Compare {
        #[arg(long)]
        json: bool,
    },
}

/// Flags that a `--input` request file already carries.
const REQUEST_FIELD_ARGS: [&str; 13] = [
    "length",
    "beam",
    "depth",
    "thickness",
    "density",
    "flexural",
    "compressive",
    "crew",
    "stations",
    "crew_kg",
    "gear",
    "gear_kg",
    "hull_weight",
];

/// Hull, mix, crew and threshold flags shared by the single-hull commands.
/// Defaults describe an 18 ft competition hull with four paddlers.
#[derive(Args, Debug)]
struct HullArgs {
    /// Overall length (in)
    #[arg(long, default_value_t = 216.0)]
    length: f64,
    /// Beam (in)
    #[arg(long, default_value_t = 36.0)]
    beam: f64,
    /// Depth (in)
    #[arg(long, default_value_t = 18.0)]
    depth: f64,
    /// Wall thickness (in)
    #[arg(long, default_value_t = 0.75)]
    thickness: f64,
    /// Concrete unit weight (pcf)
    #[arg(long, default_value_t = 60.0)]
    density: f64,
    /// Modulus of rupture (psi)
    #[arg(long, default_value_t = 1500.0)]
    flexural: f64,
    /// 28-day compressive strength (psi)
    #[arg(long)]
    compressive: Option<f64>,
    /// Crew weight lumped at midship (lbs)
    #[arg(long, default_value_t = 700.0)]
    crew: f64,
    /// Paddler at POSITION_IN:WEIGHT_LBS from the bow; repeatable.
    #[arg(long = "station", value_parser = parse_station, conflicts_with = "crew")]
    stations: Vec<CrewStation>,
    /// Crew centre of gravity above the keel (in)
    #[arg(long)]
    crew_kg: Option<f64>,
    /// Gear weight at midship (lbs)
    #[arg(long, default_value_t = 0.0)]
    gear: f64,
    /// Gear centre of gravity above the keel (in)
    #[arg(long, default_value_t = 0.0)]
    gear_kg: f64,
    /// Measured hull weight (lbs), replaces the estimate
    #[arg(long)]
    hull_weight: Option<f64>,
    /// JSON file with analysis settings (partial files allowed)
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long)]
    min_freeboard: Option<f64>,
    #[arg(long)]
    min_gm: Option<f64>,
    #[arg(long)]
    min_safety_factor: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CombinationArg {
    /// D + L
    Service,
    /// 1.4D
    #[value(name = "lrfd-1")]
    Lrfd1,
    /// 1.2D + 1.6L
    #[value(name = "lrfd-2")]
    Lrfd2,
}

impl CombinationArg {
    fn combination(self) -> LoadCombination {
        match self {
            CombinationArg::Service => service_combination(),
            CombinationArg::Lrfd1 => lrfd_dead_only(),
            CombinationArg::Lrfd2 => lrfd_dead_live(),
        }
    }
}

fn parse_station(s: &str) -> Result<CrewStation, String> {
    let (position, weight) = s
        .split_once(':')
        .ok_or_else(|| format!("expected POSITION_IN:WEIGHT_LBS, got '{}'", s))?;
    let position_in = position
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad station position '{}': {}", position, e))?;
    let weight_lbs = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad station weight '{}': {}", weight, e))?;
    Ok(CrewStation::new(position_in, weight_lbs))
}

impl HullArgs {
    fn to_input(&self) -> Result<AnalysisInput> {
        let geometry = HullGeometry::new(self.length, self.beam, self.depth, self.thickness).map_err(engine_error)?;

        let mut material = MaterialSpec::new(self.density, self.flexural);
        if let Some(fc) = self.compressive {
            material = material.with_compressive_strength(fc);
        }

        let mut load_case = if self.stations.is_empty() {
            LoadCase::midspan(self.crew)
        } else {
            LoadCase::with_stations(self.stations.clone())
        }
        .with_gear(self.gear, self.gear_kg);
        if let Some(kg) = self.crew_kg {
            load_case = load_case.with_crew_kg(kg);
        }
        if let Some(w) = self.hull_weight {
            load_case = load_case.with_hull_weight(w);
        }

        let mut input = AnalysisInput::new("CLI", geometry, material, load_case);
        self.apply_overrides(&mut input)?;
        Ok(input)
    }

    /// Settings file and threshold flags take precedence over a request file.
    fn apply_overrides(&self, input: &mut AnalysisInput) -> Result<()> {
        if let Some(path) = &self.settings {
            input.settings = load_settings(path)?;
        }
        if let Some(v) = self.min_freeboard {
            input.thresholds.min_freeboard_in = v;
        }
        if let Some(v) = self.min_gm {
            input.thresholds.min_gm_in = v;
        }
        if let Some(v) = self.min_safety_factor {
            input.thresholds.min_safety_factor = v;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_tracing(cli.log_level.as_deref())?;

    match cli.command {
        Command::Analyze {
            hull,
            input,
            combination,
            json,
        } => handle_analyze(&hull, input.as_deref(), combination, json),
        Command::RightingArm {
            hull,
            step,
            max_heel,
            json,
        } => handle_righting_arm(&hull, step, max_heel, json),
        Command::Compare { json } => handle_compare(json),
    }
}

fn handle_analyze(hull: &HullArgs, input: Option<&Path>, combination: Option<CombinationArg>, json: bool) -> Result<()> {
    let mut request = match input {
        Some(path) => {
            let mut request = load_request(path)?;
            hull.apply_overrides(&mut request)?;
            request
        }
        None => hull.to_input()?,
    };
    if let Some(c) = combination {
        request.load_combination = Some(c.combination());
    }
    debug!(label = %request.label, "analysis request ready");

    let result = calculate(&request).map_err(engine_error)?;
    if json {
        print_json(&result)
    } else {
        report::print_analysis(&request, &result);
        Ok(())
    }
}

fn handle_righting_arm(hull: &HullArgs, step: f64, max_heel: f64, json: bool) -> Result<()> {
    let request = hull.to_input()?;
    let result = calculate(&request).map_err(engine_error)?;
    let curve = righting_arm_curve(
        &RightingArmInput::new(
            result.stability.gm_in,
            result.stability.bm_in,
            result.hydrostatics.freeboard_in,
            request.geometry.beam_in(),
            result.displacement_lbs,
        )
        .with_range(max_heel, step),
    );

    if json {
        print_json(&curve)
    } else {
        report::print_righting_arm(&result, &curve);
        Ok(())
    }
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    id: &'a str,
    name: &'a str,
    result: AnalysisResult,
}

fn handle_compare(json: bool) -> Result<()> {
    let thresholds = ComplianceThresholds::default();
    let rows = reference_designs()
        .iter()
        .map(|d| {
            run_complete_analysis(&d.geometry, &d.material, &d.load_case, &thresholds)
                .map(|result| ComparisonRow {
                    id: d.id,
                    name: d.name,
                    result,
                })
                .map_err(engine_error)
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        print_json(&rows)
    } else {
        let table: Vec<_> = rows.iter().map(|r| (r.name, &r.result)).collect();
        report::print_comparison(&table);
        Ok(())
    }
}

fn load_request(path: &Path) -> Result<AnalysisInput> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read request {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse request {}", path.display()))
}

fn load_settings(path: &Path) -> Result<AnalysisSettings> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read settings {}", path.display()))?;
    AnalysisSettings::from_json_str(&text)
        .map_err(engine_error)
        .with_context(|| format!("invalid settings in {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Echo the structured error to stderr as JSON before handing it to anyhow.
fn engine_error(err: HullError) -> anyhow::Error {
    if let Ok(json) = serde_json::to_string_pretty(&err) {
        eprintln!("{}", json);
    }
    anyhow::Error::new(err)
}

/// Logs go to stderr so `--json` output stays clean.
fn configure_tracing(log_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = match log_level {
        Some(level) => EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_station() {
        let s = parse_station("60:175").unwrap();
        assert_eq!(s, CrewStation::new(60.0, 175.0));
        assert!(parse_station("60").is_err());
        assert!(parse_station("sixty:175").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
