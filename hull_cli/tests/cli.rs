use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use hull_core::{run_complete_analysis, ComplianceThresholds, HullGeometry, LoadCase, MaterialSpec};

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("hull_cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is JSON")
}

fn close(value: &Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-9 * expected.abs().max(1.0))
}

#[test]
fn analyze_prints_report() {
    cli()
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("HULL ANALYSIS RESULTS"))
        .stdout(predicate::str::contains("GM = 15.69"))
        .stdout(predicate::str::contains("RESULT: PASS"));
}

#[test]
fn analyze_json_matches_engine() {
    let v = json_stdout(cli().args(["analyze", "--json"]));

    let expected = run_complete_analysis(
        &HullGeometry::new(216.0, 36.0, 18.0, 0.75).unwrap(),
        &MaterialSpec::new(60.0, 1500.0),
        &LoadCase::midspan(700.0),
        &ComplianceThresholds::default(),
    )
    .unwrap();

    assert!(close(&v["hull_weight_lbs"], expected.hull_weight_lbs));
    assert!(close(&v["hydrostatics"]["draft_in"], expected.hydrostatics.draft_in));
    assert!(close(&v["stability"]["gm_in"], expected.stability.gm_in));
    assert!(close(
        &v["structural"]["safety_factor"],
        expected.structural.safety_factor.unwrap()
    ));
    assert_eq!(v["overall_pass"], Value::Bool(true));
}

#[test]
fn analyze_reads_request_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{
            "label": "Design C",
            "geometry": { "length_in": 216.0, "beam_in": 36.0, "depth_in": 18.0, "thickness_in": 0.5 },
            "material": { "density_pcf": 60.0, "flexural_strength_psi": 1500.0 },
            "load_case": { "crew": { "type": "Midspan", "weight_lbs": 700.0 } }
        }"#,
    )
    .expect("write request");

    let v = json_stdout(cli().arg("analyze").arg("--input").arg(&path).arg("--json"));
    assert!((v["hull_weight_lbs"].as_f64().unwrap() - 163.35).abs() < 1e-6);
    assert!((v["stability"]["gm_in"].as_f64().unwrap() - 17.383).abs() < 1e-3);
}

#[test]
fn threshold_flag_overrides_request_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{
            "geometry": { "length_in": 216.0, "beam_in": 36.0, "depth_in": 18.0, "thickness_in": 0.5 },
            "material": { "density_pcf": 60.0, "flexural_strength_psi": 1500.0 }
        }"#,
    )
    .expect("write request");

    let v = json_stdout(
        cli()
            .arg("analyze")
            .arg("--input")
            .arg(&path)
            .args(["--min-gm", "20", "--json"]),
    );
    assert_eq!(v["stability_pass"], Value::Bool(false));
    assert_eq!(v["overall_pass"], Value::Bool(false));
}

#[test]
fn request_file_rejects_hull_flags() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("request.json");
    fs::write(
        &path,
        r#"{
            "geometry": { "length_in": 216.0, "beam_in": 36.0, "depth_in": 18.0, "thickness_in": 0.5 },
            "material": { "density_pcf": 60.0, "flexural_strength_psi": 1500.0 }
        }"#,
    )
    .expect("write request");

    for flag in [["--length", "300"], ["--crew", "900"], ["--station", "60:175"]] {
        cli()
            .arg("analyze")
            .arg("--input")
            .arg(&path)
            .args(flag)
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }
}

#[test]
fn settings_file_changes_water_density() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "water_density_pcf": 64.0 }"#).expect("write settings");

    let fresh = json_stdout(cli().args(["analyze", "--json"]));
    let salt = json_stdout(cli().arg("analyze").arg("--settings").arg(&path).arg("--json"));

    let fresh_draft = fresh["hydrostatics"]["draft_in"].as_f64().unwrap();
    let salt_draft = salt["hydrostatics"]["draft_in"].as_f64().unwrap();
    assert!((salt_draft - fresh_draft * 62.4 / 64.0).abs() < 1e-9);
}

#[test]
fn missing_settings_file_is_reported() {
    cli()
        .args(["analyze", "--settings", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read settings"));
}

#[test]
fn invalid_geometry_prints_error_json() {
    cli()
        .args(["analyze", "--thickness", "18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"type\": \"InvalidGeometry\""));
}

#[test]
fn crew_stations_are_parsed() {
    let v = json_stdout(cli().args([
        "analyze",
        "--station",
        "40:175",
        "--station",
        "80:175",
        "--station",
        "136:175",
        "--station",
        "176:175",
        "--json",
    ]));
    assert!((v["structural"]["max_moment_position_in"].as_f64().unwrap() - 108.0).abs() < 1e-9);
    assert!((v["displacement_lbs"].as_f64().unwrap() - (245.025 + 700.0)).abs() < 1e-6);
}

#[test]
fn malformed_station_is_rejected() {
    cli()
        .args(["analyze", "--station", "forty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("POSITION_IN:WEIGHT_LBS"));
}

#[test]
fn lrfd_combination_is_labelled() {
    let v = json_stdout(cli().args(["analyze", "--combination", "lrfd-2", "--json"]));
    assert_eq!(v["load_combination"], Value::String("LRFD-2".into()));
    assert!((v["structural"]["max_moment_ft_lb"].as_f64().unwrap() - 5701.567).abs() < 1e-2);

    cli()
        .args(["analyze", "--combination", "lrfd-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Factored: LRFD-2"));
}

#[test]
fn righting_arm_table() {
    cli()
        .args(["righting-arm", "--step", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RIGHTING ARM CURVE"))
        .stdout(predicate::str::contains("Max GZ"));

    let v = json_stdout(cli().args(["righting-arm", "--step", "15", "--json"]));
    let points = v.as_array().expect("curve is an array");
    assert_eq!(points.len(), 7);
    assert_eq!(points[0]["gz_in"].as_f64(), Some(0.0));
}

#[test]
fn righting_arm_tiny_step_is_bounded() {
    let v = json_stdout(cli().args(["righting-arm", "--step", "1e-300", "--json"]));
    let points = v.as_array().expect("curve is an array");
    assert_eq!(points.len(), 901);
}

#[test]
fn compare_lists_reference_designs() {
    cli()
        .arg("compare")
        .assert()
        .success()
        .stdout(predicate::str::contains("Design A"))
        .stdout(predicate::str::contains("Design B"))
        .stdout(predicate::str::contains("Design C"));

    let v = json_stdout(cli().args(["compare", "--json"]));
    let rows = v.as_array().expect("rows");
    assert_eq!(rows.len(), 3);
    for row in rows {
        assert_eq!(row["result"]["overall_pass"], Value::Bool(true), "{}", row["id"]);
    }
}
