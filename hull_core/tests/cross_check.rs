//! End-to-end checks of the complete analysis against hand-calculated
//! scenarios, the reference designs, and the individual stage functions.

use hull_core::calculations::stability::{righting_arm_curve, RightingArmInput};
use hull_core::calculations::structural::{section_modulus, structural, structural_with_stations};
use hull_core::loads::{lrfd_dead_live, lrfd_dead_only};
use hull_core::{
    calculate, find_design, reference_designs, run_complete_analysis, run_factored_analysis, AnalysisInput,
    AnalysisResult, AnalysisSettings, ComplianceThresholds, CrewStation, HullError, HullGeometry, LoadCase,
    MaterialSpec,
};

fn reference_geometry() -> HullGeometry {
    HullGeometry::new(216.0, 36.0, 18.0, 0.75).unwrap()
}

fn reference_result() -> AnalysisResult {
    run_complete_analysis(
        &reference_geometry(),
        &MaterialSpec::new(60.0, 1500.0),
        &LoadCase::midspan(700.0),
        &ComplianceThresholds::default(),
    )
    .unwrap()
}

#[test]
fn reference_hull_scenario() {
    let r = reference_result();
    assert!((r.weight.weight_lbs - 245.0).abs() < 1.0);
    assert!((r.section.section_modulus_in3 - 129.6).abs() < 0.5);
    assert!((r.section.neutral_axis_in - 4.78).abs() < 0.01);
    assert!((r.hydrostatics.draft_in - 4.81).abs() < 0.01);
    assert!((r.hydrostatics.freeboard_in - 13.19).abs() < 0.01);
    assert!((r.stability.gm_in - 15.7).abs() < 0.05);
    assert!(r.freeboard_pass);
    assert!(r.stability_pass);
    assert!(r.structural_pass);
}

#[test]
fn wall_as_thick_as_depth_is_degenerate() {
    let err = section_modulus(36.0, 18.0, 18.0).unwrap_err();
    assert!(matches!(err, HullError::DegenerateSection { .. }));

    // Just short of collapse the section is still finite
    let thin_walls = section_modulus(36.0, 18.0, 17.999).unwrap();
    assert!(thin_walls.section_modulus_in3.is_finite());
}

#[test]
fn every_reference_design_passes() {
    let expected = [
        ("A", 133.1, 11.636, 9.156, 3.153),
        ("B", 144.108, 12.989, 12.269, 3.445),
        ("C", 163.35, 13.608, 17.383, 3.112),
    ];
    for (id, weight, freeboard, gm, sf) in expected {
        let design = find_design(id).unwrap();
        let r = calculate(&design.to_input()).unwrap();
        assert!((r.weight.weight_lbs - weight).abs() < 1e-2, "{} weight", id);
        assert!((r.hydrostatics.freeboard_in - freeboard).abs() < 1e-2, "{} freeboard", id);
        assert!((r.stability.gm_in - gm).abs() < 1e-2, "{} GM", id);
        assert!((r.structural.safety_factor.unwrap() - sf).abs() < 1e-2, "{} SF", id);
        assert!(r.overall_pass, "{} should pass", id);
    }
}

#[test]
fn analysis_matches_stage_functions() {
    // The orchestrated result must equal the stages called by hand
    let r = reference_result();
    let section = section_modulus(36.0, 18.0, 0.75).unwrap();
    assert_eq!(r.section, section);
    let bending = structural(r.hull_weight_lbs, 700.0, 216.0, section.section_modulus_in3, 1500.0);
    assert_eq!(r.structural, bending);
}

#[test]
fn factored_demand_lowers_safety_factor() {
    let settings = AnalysisSettings::default();
    let thresholds = ComplianceThresholds::default();
    let service = reference_result();
    let factored = run_factored_analysis(
        &reference_geometry(),
        &MaterialSpec::new(60.0, 1500.0),
        &LoadCase::midspan(700.0),
        &thresholds,
        &settings,
        &lrfd_dead_live(),
    )
    .unwrap();

    let sf_service = service.structural.safety_factor.unwrap();
    let sf_factored = factored.structural.safety_factor.unwrap();
    assert!(sf_factored < sf_service);
    assert_eq!(factored.load_combination.as_deref(), Some("LRFD-2"));
    assert_eq!(service.hydrostatics, factored.hydrostatics);
}

#[test]
fn dead_only_combination_ignores_crew_in_bending() {
    let r = run_factored_analysis(
        &reference_geometry(),
        &MaterialSpec::new(60.0, 1500.0),
        &LoadCase::midspan(700.0),
        &ComplianceThresholds::default(),
        &AnalysisSettings::default(),
        &lrfd_dead_only(),
    )
    .unwrap();
    // 1.4 × 245.025 × 18 / 8
    assert!((r.structural.max_moment_ft_lb - 1.4 * 245.025 * 18.0 / 8.0).abs() < 1e-6);
}

#[test]
fn crew_stations_at_midspan_equal_lumped_crew() {
    let lumped = reference_result();
    let seated = run_complete_analysis(
        &reference_geometry(),
        &MaterialSpec::new(60.0, 1500.0),
        &LoadCase::with_stations(vec![CrewStation::new(108.0, 350.0), CrewStation::new(108.0, 350.0)]),
        &ComplianceThresholds::default(),
    )
    .unwrap();
    assert!((seated.structural.max_moment_ft_lb - lumped.structural.max_moment_ft_lb).abs() < 1e-9);
    assert_eq!(seated.hydrostatics, lumped.hydrostatics);
    assert_eq!(seated.stability, lumped.stability);
}

#[test]
fn spread_stations_find_interior_peak() {
    let stations = [
        CrewStation::new(40.0, 175.0),
        CrewStation::new(80.0, 175.0),
        CrewStation::new(136.0, 175.0),
        CrewStation::new(176.0, 175.0),
    ];
    let r = structural_with_stations(245.025, &stations, 216.0, 129.578, 1500.0).unwrap();
    // Symmetric loading peaks at midship
    assert!((r.max_moment_position_in - 108.0).abs() < 1e-9);
    assert!(r.max_moment_ft_lb < structural(245.025, 700.0, 216.0, 129.578, 1500.0).max_moment_ft_lb);
}

#[test]
fn righting_arm_curve_for_reference_hull() {
    let r = reference_result();
    let curve = righting_arm_curve(&RightingArmInput::new(
        r.stability.gm_in,
        r.stability.bm_in,
        r.hydrostatics.freeboard_in,
        36.0,
        r.displacement_lbs,
    ));

    let five = curve.iter().find(|p| p.heel_deg == 5.0).unwrap();
    assert!((five.gz_in - r.stability.gm_in * 5f64.to_radians().sin()).abs() < 0.05);

    let peak = curve.iter().map(|p| p.gz_in).fold(0.0, f64::max);
    assert!(peak > five.gz_in);
    assert_eq!(curve.last().unwrap().gz_in, 0.0);
}

#[test]
fn json_request_reproduces_typed_call() {
    let design = find_design("B").unwrap();
    let json = serde_json::to_string(&design.to_input()).unwrap();
    let input: AnalysisInput = serde_json::from_str(&json).unwrap();
    let from_json = calculate(&input).unwrap();
    let typed = run_complete_analysis(
        &design.geometry,
        &design.material,
        &design.load_case,
        &ComplianceThresholds::default(),
    )
    .unwrap();
    assert_eq!(from_json, typed);
}

#[test]
fn concurrent_analyses_agree() {
    let designs = reference_designs();
    let serial: Vec<AnalysisResult> = designs.iter().map(|d| calculate(&d.to_input()).unwrap()).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let design = &designs[i % designs.len()];
                scope.spawn(move || (i % designs.len(), calculate(&design.to_input()).unwrap()))
            })
            .collect();
        for handle in handles {
            let (idx, result) = handle.join().unwrap();
            assert_eq!(result, serial[idx]);
        }
    });
}
