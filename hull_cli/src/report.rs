//! Plain-text rendering of analysis results.

use hull_core::calculations::stability::RightingArmPoint;
use hull_core::{AnalysisInput, AnalysisResult};

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn verdict(pass: bool) -> &'static str {
    if pass {
        "PASS"
    } else {
        "FAIL"
    }
}

fn safety_factor_text(sf: Option<f64>) -> String {
    sf.map_or_else(|| "n/a".to_string(), |sf| format!("{:.2}", sf))
}

pub fn print_analysis(input: &AnalysisInput, r: &AnalysisResult) {
    let g = &input.geometry;
    let t = &input.thresholds;

    println!("{}", RULE);
    println!("  HULL ANALYSIS RESULTS");
    println!("{}", RULE);
    println!();
    println!("Input:");
    println!(
        "  Hull:     {:.1}\" L x {:.1}\" B x {:.1}\" D, {:.3}\" wall",
        g.length_in(),
        g.beam_in(),
        g.depth_in(),
        g.thickness_in()
    );
    println!(
        "  Mix:      {:.1} pcf, f_r = {:.0} psi",
        input.material.density_pcf, input.material.flexural_strength_psi
    );
    println!(
        "  Loads:    crew {:.0} lbs, gear {:.0} lbs",
        input.load_case.crew_weight_lbs(),
        input.load_case.gear_weight_lbs
    );
    println!();
    println!("Weight & Flotation:");
    println!("  Hull weight:   {:.1} lbs (estimate {:.1})", r.hull_weight_lbs, r.weight.weight_lbs);
    println!("  Displacement:  {:.1} lbs", r.displacement_lbs);
    println!("  Draft:         {:.2}\"", r.hydrostatics.draft_in);
    println!(
        "  Freeboard:     {:.2}\" (min {:.1}\") {}",
        r.hydrostatics.freeboard_in,
        t.min_freeboard_in,
        status_icon(r.freeboard_pass)
    );
    println!();
    println!("Stability:");
    println!(
        "  KB = {:.2}\"  BM = {:.2}\"  KG = {:.2}\"",
        r.stability.kb_in, r.stability.bm_in, r.stability.kg_in
    );
    println!(
        "  GM = {:.2}\" (min {:.1}\") {}",
        r.stability.gm_in,
        t.min_gm_in,
        status_icon(r.stability_pass)
    );
    println!();
    println!("Structure:");
    println!(
        "  S   = {:.1} in³ (ȳ = {:.2}\" above keel)",
        r.section.section_modulus_in3, r.section.neutral_axis_in
    );
    println!(
        "  M   = {:.0} ft-lb at {:.1}\"",
        r.structural.max_moment_ft_lb, r.structural.max_moment_position_in
    );
    println!("  σ   = {:.1} psi", r.structural.bending_stress_psi);
    println!(
        "  SF  = {} (min {:.1}) {}",
        safety_factor_text(r.structural.safety_factor),
        t.min_safety_factor,
        status_icon(r.structural_pass)
    );
    if let Some(loads) = &r.factored_loads {
        println!(
            "  Factored: {} ({}), D = {:.1} lbs, L = {:.1} lbs",
            loads.combination, loads.equation, loads.dead_lbs, loads.live_lbs
        );
    }

    if !r.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for w in &r.warnings {
            println!("  - {}", w);
        }
    }

    println!();
    println!("{}", RULE);
    if r.overall_pass {
        println!("  RESULT: PASS");
    } else {
        println!("  RESULT: FAIL ({})", r.failed_checks().join(", "));
    }
    println!("{}", RULE);
}

pub fn print_righting_arm(r: &AnalysisResult, curve: &[RightingArmPoint]) {
    println!("{}", RULE);
    println!("  RIGHTING ARM CURVE");
    println!("{}", RULE);
    println!();
    println!(
        "  GM = {:.2}\"  freeboard = {:.2}\"  Δ = {:.0} lbs",
        r.stability.gm_in, r.hydrostatics.freeboard_in, r.displacement_lbs
    );
    println!();
    println!("  {:>6}  {:>8}  {:>10}", "heel", "GZ (in)", "RM (ft-lb)");
    for p in curve {
        println!(
            "  {:>5.1}°  {:>8.2}  {:>10.1}",
            p.heel_deg, p.gz_in, p.righting_moment_ft_lb
        );
    }

    if let Some(peak) = curve.iter().max_by(|a, b| a.gz_in.total_cmp(&b.gz_in)) {
        println!();
        println!("  Max GZ {:.2}\" at {:.1}°", peak.gz_in, peak.heel_deg);
    }
}

pub fn print_comparison(rows: &[(&str, &AnalysisResult)]) {
    println!("{}", RULE);
    println!("  REFERENCE DESIGNS");
    println!("{}", RULE);
    println!();
    println!(
        "  {:<10} {:>8} {:>8} {:>8} {:>6}  {}",
        "design", "wt (lb)", "fb (in)", "GM (in)", "SF", "result"
    );
    for (name, r) in rows {
        println!(
            "  {:<10} {:>8.1} {:>8.2} {:>8.2} {:>6}  {}",
            name,
            r.hull_weight_lbs,
            r.hydrostatics.freeboard_in,
            r.stability.gm_in,
            safety_factor_text(r.structural.safety_factor),
            verdict(r.overall_pass)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_factor_text() {
        assert_eq!(safety_factor_text(Some(4.376)), "4.38");
        assert_eq!(safety_factor_text(None), "n/a");
    }
}
