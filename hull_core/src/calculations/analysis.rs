//! # Complete Hull Analysis
//!
//! The single entry point that runs weight, hydrostatics, stability, section
//! and bending in order and grades the hull against the three compliance
//! limits. Every consumer (CLI, reports, batch drivers) goes through here;
//! none of them recompute the physics.
//!
//! All three checks are always evaluated so a failing hull still shows every
//! margin.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::analysis::run_complete_analysis;
//! use hull_core::geometry::HullGeometry;
//! use hull_core::loads::LoadCase;
//! use hull_core::materials::MaterialSpec;
//! use hull_core::settings::ComplianceThresholds;
//!
//! let geometry = HullGeometry::new(216.0, 36.0, 18.0, 0.75).unwrap();
//! let material = MaterialSpec::new(60.0, 1500.0);
//! let result = run_complete_analysis(
//!     &geometry,
//!     &material,
//!     &LoadCase::midspan(700.0),
//!     &ComplianceThresholds::default(),
//! )
//! .unwrap();
//!
//! assert!(result.overall_pass);
//! assert!((result.stability.gm_in - 15.7).abs() < 0.1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::hydrostatics::{hydrostatics, HydrostaticsResult};
use super::stability::{stability, StabilityInput, StabilityResult};
use super::structural::{section_modulus, structural, structural_with_stations, StructuralResult};
use crate::equations::section::SectionProperties;
use crate::errors::HullResult;
use crate::geometry::{estimate_weight_breakdown, HullGeometry, WeightEstimate};
use crate::loads::{CrewLoad, CrewStation, FactoredLoads, LoadCase, LoadCombination, LoadType};
use crate::materials::MaterialSpec;
use crate::settings::{AnalysisSettings, ComplianceThresholds, TYPICAL_WATERPLANE_COEFF};

/// A complete, JSON-serializable analysis request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Design C",
///   "geometry": { "length_in": 216.0, "beam_in": 36.0, "depth_in": 18.0, "thickness_in": 0.5 },
///   "material": { "density_pcf": 60.0, "flexural_strength_psi": 1500.0 },
///   "load_case": { "crew": { "type": "Midspan", "weight_lbs": 700.0 } },
///   "load_combination": null
/// }
/// ```
///
/// `thresholds` and `settings` fall back to their defaults when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub label: String,
    pub geometry: HullGeometry,
    pub material: MaterialSpec,
    #[serde(default)]
    pub load_case: LoadCase,
    #[serde(default)]
    pub thresholds: ComplianceThresholds,
    #[serde(default)]
    pub settings: AnalysisSettings,
    /// Factor the bending loads through this combination
    #[serde(default)]
    pub load_combination: Option<LoadCombination>,
}

impl AnalysisInput {
    pub fn new(label: impl Into<String>, geometry: HullGeometry, material: MaterialSpec, load_case: LoadCase) -> Self {
        AnalysisInput {
            label: label.into(),
            geometry,
            material,
            load_case,
            thresholds: ComplianceThresholds::default(),
            settings: AnalysisSettings::default(),
            load_combination: None,
        }
    }
}

/// Every intermediate value of one analysis plus the compliance verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Geometric weight estimate (always computed, even when overridden)
    pub weight: WeightEstimate,
    /// Hull weight actually used: measured if supplied, else estimated (lbs)
    pub hull_weight_lbs: f64,
    /// Hull + crew + gear (lbs)
    pub displacement_lbs: f64,
    pub hydrostatics: HydrostaticsResult,
    pub stability: StabilityResult,
    pub section: SectionProperties,
    pub structural: StructuralResult,

    pub freeboard_pass: bool,
    pub stability_pass: bool,
    pub structural_pass: bool,
    pub overall_pass: bool,

    /// Combination name when the bending check used factored loads
    pub load_combination: Option<String>,
    /// Factored dead/live totals behind the bending check, if any
    pub factored_loads: Option<FactoredLoads>,
    /// Non-fatal advisories
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// Names of the failing checks, in report order.
    pub fn failed_checks(&self) -> Vec<&'static str> {
        [
            ("freeboard", self.freeboard_pass),
            ("stability", self.stability_pass),
            ("structural", self.structural_pass),
        ]
        .into_iter()
        .filter(|(_, pass)| !pass)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Analyse with default settings and service (unfactored) loads.
pub fn run_complete_analysis(
    geometry: &HullGeometry,
    material: &MaterialSpec,
    load_case: &LoadCase,
    thresholds: &ComplianceThresholds,
) -> HullResult<AnalysisResult> {
    run_with_settings(geometry, material, load_case, thresholds, &AnalysisSettings::default())
}

/// Analyse with explicit settings and service (unfactored) loads.
pub fn run_with_settings(
    geometry: &HullGeometry,
    material: &MaterialSpec,
    load_case: &LoadCase,
    thresholds: &ComplianceThresholds,
    settings: &AnalysisSettings,
) -> HullResult<AnalysisResult> {
    run(geometry, material, load_case, thresholds, settings, None)
}

/// Analyse with the bending loads factored through `combination`.
///
/// Only the structural check sees factored loads. Flotation and stability
/// describe the real floating hull and use service loads.
pub fn run_factored_analysis(
    geometry: &HullGeometry,
    material: &MaterialSpec,
    load_case: &LoadCase,
    thresholds: &ComplianceThresholds,
    settings: &AnalysisSettings,
    combination: &LoadCombination,
) -> HullResult<AnalysisResult> {
    run(geometry, material, load_case, thresholds, settings, Some(combination))
}

/// Run an [`AnalysisInput`].
pub fn calculate(input: &AnalysisInput) -> HullResult<AnalysisResult> {
    debug!(label = %input.label, "running hull analysis");
    match &input.load_combination {
        Some(combination) => run_factored_analysis(
            &input.geometry,
            &input.material,
            &input.load_case,
            &input.thresholds,
            &input.settings,
            combination,
        ),
        None => run_with_settings(
            &input.geometry,
            &input.material,
            &input.load_case,
            &input.thresholds,
            &input.settings,
        ),
    }
}

fn run(
    geometry: &HullGeometry,
    material: &MaterialSpec,
    load_case: &LoadCase,
    thresholds: &ComplianceThresholds,
    settings: &AnalysisSettings,
    combination: Option<&LoadCombination>,
) -> HullResult<AnalysisResult> {
    settings.validate()?;
    material.validate()?;
    thresholds.validate()?;
    load_case.validate(geometry.length_in())?;
    if let Some(c) = combination {
        c.validate()?;
    }

    let mut warnings: Vec<String> = material.check_mix().iter().map(ToString::to_string).collect();

    if !settings.waterplane_coeff_is_typical() {
        let (lo, hi) = TYPICAL_WATERPLANE_COEFF;
        let msg = format!(
            "Waterplane coefficient {:.3} is outside the typical canoe range {:.2}-{:.2}",
            settings.waterplane_coeff, lo, hi
        );
        warn!("{}", msg);
        warnings.push(msg);
    }

    // Weight
    let weight = estimate_weight_breakdown(
        geometry,
        material.density_pcf,
        settings.prismatic_coeff,
        settings.overhead_factor,
    )?;
    let hull_weight_lbs = match load_case.hull_weight_lbs {
        Some(measured) => {
            let diff_pct = (measured - weight.weight_lbs).abs() / weight.weight_lbs * 100.0;
            if diff_pct > settings.weight_tolerance_pct {
                let msg = format!(
                    "Measured hull weight {:.1} lbs differs from the {:.1} lbs estimate by {:.0}%",
                    measured, weight.weight_lbs, diff_pct
                );
                warn!("{}", msg);
                warnings.push(msg);
            }
            measured
        }
        None => weight.weight_lbs,
    };

    let crew_weight_lbs = load_case.crew_weight_lbs();
    let displacement_lbs = hull_weight_lbs + crew_weight_lbs + load_case.gear_weight_lbs;
    debug!(
        estimated_lbs = weight.weight_lbs,
        hull_weight_lbs, displacement_lbs, "weight"
    );

    // Flotation
    let hydro = hydrostatics(
        displacement_lbs,
        settings.water_density_pcf,
        geometry.length_in(),
        geometry.beam_in(),
        settings.waterplane_coeff,
        geometry.depth_in(),
    );
    if hydro.swamped {
        let msg = format!(
            "Hull is swamped: draft {:.2} in exceeds depth {:.2} in",
            hydro.draft_in,
            geometry.depth_in()
        );
        warn!("{}", msg);
        warnings.push(msg);
    }
    debug!(draft_in = hydro.draft_in, freeboard_in = hydro.freeboard_in, "hydrostatics");

    // Stability
    let stab = stability(
        &StabilityInput::new(
            hydro.draft_in,
            geometry.length_in(),
            geometry.beam_in(),
            settings.waterplane_coeff,
            hydro.displacement_ft3,
        )
        .with_hull(hull_weight_lbs, settings.hull_kg_fraction * geometry.depth_in())
        .with_crew(crew_weight_lbs, load_case.crew_kg_in)
        .with_gear(load_case.gear_weight_lbs, load_case.gear_kg_in),
    );
    debug!(kb_in = stab.kb_in, bm_in = stab.bm_in, kg_in = stab.kg_in, gm_in = stab.gm_in, "stability");

    // Bending
    let section = section_modulus(geometry.beam_in(), geometry.depth_in(), geometry.thickness_in())?;
    let (structural_result, factored_loads) = bending(
        geometry,
        material,
        load_case,
        hull_weight_lbs,
        section.section_modulus_in3,
        combination,
    )?;
    debug!(
        moment_ft_lb = structural_result.max_moment_ft_lb,
        stress_psi = structural_result.bending_stress_psi,
        safety_factor = ?structural_result.safety_factor,
        "structural"
    );

    let freeboard_pass = hydro.freeboard_in >= thresholds.min_freeboard_in;
    let stability_pass = stab.gm_in >= thresholds.min_gm_in;
    let structural_pass = structural_result.passes(thresholds.min_safety_factor);

    Ok(AnalysisResult {
        weight,
        hull_weight_lbs,
        displacement_lbs,
        hydrostatics: hydro,
        stability: stab,
        section,
        structural: structural_result,
        freeboard_pass,
        stability_pass,
        structural_pass,
        overall_pass: freeboard_pass && stability_pass && structural_pass,
        load_combination: combination.map(|c| c.name.clone()),
        factored_loads,
        warnings,
    })
}

/// Bending check with hull as dead load and crew + gear as live load,
/// scaled by `combination` when one is given.
fn bending(
    geometry: &HullGeometry,
    material: &MaterialSpec,
    load_case: &LoadCase,
    hull_weight_lbs: f64,
    section_modulus_in3: f64,
    combination: Option<&LoadCombination>,
) -> HullResult<(StructuralResult, Option<FactoredLoads>)> {
    let scale = |load_type: LoadType, value: f64| combination.map_or(value, |c| c.apply(load_type, value));

    let dead = scale(LoadType::Dead, hull_weight_lbs);
    let gear = scale(LoadType::Live, load_case.gear_weight_lbs);
    let length_in = geometry.length_in();
    let f_r = material.flexural_strength_psi;

    let result = match &load_case.crew {
        CrewLoad::Midspan { weight_lbs } => {
            let live = scale(LoadType::Live, *weight_lbs) + gear;
            structural(dead, live, length_in, section_modulus_in3, f_r)
        }
        CrewLoad::Stations { stations } => {
            let mut points: Vec<CrewStation> = stations
                .iter()
                .map(|s| CrewStation::new(s.position_in, scale(LoadType::Live, s.weight_lbs)))
                .collect();
            if gear > 0.0 {
                points.push(CrewStation::new(length_in / 2.0, gear));
            }
            structural_with_stations(dead, &points, length_in, section_modulus_in3, f_r)?
        }
    };

    let factored = combination.map(|c| c.factor_loads(hull_weight_lbs, load_case.live_weight_lbs()));
    Ok((result, factored))
}
