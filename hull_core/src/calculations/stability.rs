//! # Initial Stability
//!
//! Metacentric height from the 3-D (Bouguer) metacentric radius and a
//! weight-averaged centre of gravity.
//!
//! ```text
//!   KB   = T / 2
//!   I_wp = C_wp × L × B³ / 12
//!   BM   = I_wp / ∇
//!   KG   = Σ(Wᵢ × KGᵢ) / ΣWᵢ        (hull, crew, gear)
//!   GM   = KB + BM − KG
//! ```
//!
//! All heights are in inches above the keel.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::stability::{stability, StabilityInput};
//!
//! let input = StabilityInput::new(4.8078, 216.0, 36.0, 0.70, 15.1446)
//!     .with_hull(245.025, 0.38 * 18.0)
//!     .with_crew(700.0, 10.0);
//! let s = stability(&input);
//! assert!((s.gm_in - 15.69).abs() < 0.01);
//! ```
//!
//! The righting-arm curve ([`righting_arm_curve`]) extends GM to larger heel
//! angles. It is illustrative and never gates compliance.

use serde::{Deserialize, Serialize};

use crate::equations::naval::{
    center_of_buoyancy, deck_edge_immersion_angle, metacentric_height, metacentric_radius, wall_sided_righting_arm,
    waterplane_inertia, weighted_center_of_gravity,
};
use crate::units::{ft_to_in, in_to_ft};

/// Inputs for the metacentric height calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "draft_in": 4.81, "length_in": 216.0, "beam_in": 36.0,
///   "waterplane_coeff": 0.70, "displacement_ft3": 15.14,
///   "hull_weight_lbs": 245.0, "hull_kg_in": 6.84,
///   "crew_weight_lbs": 700.0, "crew_kg_in": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityInput {
    pub draft_in: f64,
    pub length_in: f64,
    pub beam_in: f64,
    pub waterplane_coeff: f64,
    pub displacement_ft3: f64,
    pub hull_weight_lbs: f64,
    pub hull_kg_in: f64,
    pub crew_weight_lbs: f64,
    pub crew_kg_in: f64,
    #[serde(default)]
    pub gear_weight_lbs: f64,
    #[serde(default)]
    pub gear_kg_in: f64,
}

impl StabilityInput {
    /// Floating position only; weights default to zero.
    pub fn new(draft_in: f64, length_in: f64, beam_in: f64, waterplane_coeff: f64, displacement_ft3: f64) -> Self {
        StabilityInput {
            draft_in,
            length_in,
            beam_in,
            waterplane_coeff,
            displacement_ft3,
            hull_weight_lbs: 0.0,
            hull_kg_in: 0.0,
            crew_weight_lbs: 0.0,
            crew_kg_in: 0.0,
            gear_weight_lbs: 0.0,
            gear_kg_in: 0.0,
        }
    }

    pub fn with_hull(mut self, weight_lbs: f64, kg_in: f64) -> Self {
        self.hull_weight_lbs = weight_lbs;
        self.hull_kg_in = kg_in;
        self
    }

    pub fn with_crew(mut self, weight_lbs: f64, kg_in: f64) -> Self {
        self.crew_weight_lbs = weight_lbs;
        self.crew_kg_in = kg_in;
        self
    }

    pub fn with_gear(mut self, weight_lbs: f64, kg_in: f64) -> Self {
        self.gear_weight_lbs = weight_lbs;
        self.gear_kg_in = kg_in;
        self
    }
}

/// Stability heights (in) and the waterplane inertia behind BM.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityResult {
    pub kb_in: f64,
    pub bm_in: f64,
    pub kg_in: f64,
    pub gm_in: f64,
    pub waterplane_inertia_ft4: f64,
}

/// Metacentric height. No displaced volume gives BM = 0; no weight gives KG = 0.
pub fn stability(input: &StabilityInput) -> StabilityResult {
    let kb_in = center_of_buoyancy(input.draft_in);

    let waterplane_inertia_ft4 = waterplane_inertia(
        input.waterplane_coeff,
        in_to_ft(input.length_in),
        in_to_ft(input.beam_in),
    );
    let bm_in = ft_to_in(metacentric_radius(waterplane_inertia_ft4, input.displacement_ft3));

    let kg_in = weighted_center_of_gravity(&[
        (input.hull_weight_lbs, input.hull_kg_in),
        (input.crew_weight_lbs, input.crew_kg_in),
        (input.gear_weight_lbs, input.gear_kg_in),
    ]);

    StabilityResult {
        kb_in,
        bm_in,
        kg_in,
        gm_in: metacentric_height(kb_in, bm_in, kg_in),
        waterplane_inertia_ft4,
    }
}

// =============================================================================
// RIGHTING-ARM CURVE
// =============================================================================

/// Inputs for the GZ curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightingArmInput {
    pub gm_in: f64,
    pub bm_in: f64,
    pub freeboard_in: f64,
    pub beam_in: f64,
    /// Displacement weight (lbs) for the righting moment
    pub displacement_lbs: f64,
    #[serde(default = "default_max_heel_deg")]
    pub max_heel_deg: f64,
    #[serde(default = "default_step_deg")]
    pub step_deg: f64,
}

fn default_max_heel_deg() -> f64 {
    90.0
}

fn default_step_deg() -> f64 {
    5.0
}

impl RightingArmInput {
    /// 0-90° in 5° steps.
    pub fn new(gm_in: f64, bm_in: f64, freeboard_in: f64, beam_in: f64, displacement_lbs: f64) -> Self {
        RightingArmInput {
            gm_in,
            bm_in,
            freeboard_in,
            beam_in,
            displacement_lbs,
            max_heel_deg: default_max_heel_deg(),
            step_deg: default_step_deg(),
        }
    }

    pub fn with_range(mut self, max_heel_deg: f64, step_deg: f64) -> Self {
        self.max_heel_deg = max_heel_deg;
        self.step_deg = step_deg;
        self
    }
}

/// One point on the GZ curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightingArmPoint {
    pub heel_deg: f64,
    /// Righting arm GZ (in)
    pub gz_in: f64,
    /// Displacement × GZ (ft-lb)
    pub righting_moment_ft_lb: f64,
}

/// Righting arm at one heel angle (radians).
///
/// Wall-sided up to deck-edge immersion θ_de = atan(FB / (B/2)), then a
/// linear taper to zero at min(2θ_de, 90°). No freeboard, no righting arm.
pub fn righting_arm_at(gm_in: f64, bm_in: f64, freeboard_in: f64, beam_in: f64, heel_rad: f64) -> f64 {
    let deck_edge = deck_edge_immersion_angle(freeboard_in, beam_in);
    if deck_edge <= 0.0 {
        return 0.0;
    }
    if heel_rad <= deck_edge {
        return wall_sided_righting_arm(gm_in, bm_in, heel_rad);
    }

    let vanishing = (2.0 * deck_edge).min(std::f64::consts::FRAC_PI_2);
    if heel_rad >= vanishing {
        return 0.0;
    }
    let gz_deck_edge = wall_sided_righting_arm(gm_in, bm_in, deck_edge);
    gz_deck_edge * (vanishing - heel_rad) / (vanishing - deck_edge)
}

/// Finest heel increment sampled (degrees). Smaller positive steps are
/// widened to this, which bounds the curve at 901 points.
pub const MIN_HEEL_STEP_DEG: f64 = 0.1;

/// Sample the GZ curve from 0° to `max_heel_deg` (capped at 90°) in
/// `step_deg` increments, no finer than [`MIN_HEEL_STEP_DEG`]. A
/// non-positive step yields only the upright point.
///
/// # Example
///
/// ```rust
/// use hull_core::calculations::stability::{righting_arm_curve, RightingArmInput};
///
/// let curve = righting_arm_curve(&RightingArmInput::new(15.69, 22.46, 13.19, 36.0, 945.0));
/// assert_eq!(curve.len(), 19);
/// assert_eq!(curve[0].gz_in, 0.0);
/// assert_eq!(curve[18].gz_in, 0.0);
/// ```
pub fn righting_arm_curve(input: &RightingArmInput) -> Vec<RightingArmPoint> {
    let max_heel = input.max_heel_deg.clamp(0.0, 90.0);
    let step = (input.step_deg > 0.0 && input.step_deg.is_finite()).then(|| input.step_deg.max(MIN_HEEL_STEP_DEG));
    let steps = step.map_or(0, |step| (max_heel / step + 1e-9).floor() as usize);
    let step = step.unwrap_or(0.0);

    (0..=steps)
        .map(|i| {
            let heel_deg = i as f64 * step;
            let gz_in = righting_arm_at(
                input.gm_in,
                input.bm_in,
                input.freeboard_in,
                input.beam_in,
                heel_deg.to_radians(),
            );
            RightingArmPoint {
                heel_deg,
                gz_in,
                righting_moment_ft_lb: input.displacement_lbs * in_to_ft(gz_in),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> StabilityInput {
        StabilityInput::new(4.8078, 216.0, 36.0, 0.70, 15.1446)
            .with_hull(245.025, 6.84)
            .with_crew(700.0, 10.0)
    }

    #[test]
    fn test_reference_stability() {
        // I_wp = 0.70 × 18 × 27 / 12 = 28.35 ft⁴
        // BM = 28.35 / 15.1446 = 1.8720 ft = 22.46 in
        let s = stability(&reference_input());
        assert!((s.waterplane_inertia_ft4 - 28.35).abs() < 1e-9);
        assert!((s.kb_in - 2.4039).abs() < 1e-4);
        assert!((s.bm_in - 22.4634).abs() < 1e-2);
        assert!((s.kg_in - 9.1807).abs() < 1e-3);
        assert!((s.gm_in - 15.6866).abs() < 1e-2);
    }

    #[test]
    fn test_zero_volume_guard() {
        let s = stability(&StabilityInput::new(0.0, 216.0, 36.0, 0.70, 0.0));
        assert_eq!(s.bm_in, 0.0);
        assert_eq!(s.kg_in, 0.0);
        assert_eq!(s.gm_in, 0.0);
    }

    #[test]
    fn test_gear_raises_kg() {
        let base = stability(&reference_input());
        let geared = stability(&reference_input().with_gear(50.0, 16.0));
        assert!(geared.kg_in > base.kg_in);
    }

    #[test]
    fn test_curve_matches_gm_sin_at_small_angles() {
        let curve = righting_arm_curve(&RightingArmInput::new(15.69, 22.46, 13.19, 36.0, 945.0).with_range(3.0, 1.0));
        for p in &curve {
            let linear = 15.69 * p.heel_deg.to_radians().sin();
            assert!((p.gz_in - linear).abs() < 0.02, "θ = {}", p.heel_deg);
        }
    }

    #[test]
    fn test_curve_vanishes_past_twice_deck_edge() {
        // θ_de = atan(13.19 / 18) ≈ 36.2°, vanishing at 72.5°
        let input = RightingArmInput::new(15.69, 22.46, 13.19, 36.0, 945.0);
        let curve = righting_arm_curve(&input);
        for p in curve.iter().filter(|p| p.heel_deg >= 75.0) {
            assert_eq!(p.gz_in, 0.0);
        }
        assert!(curve.iter().any(|p| p.heel_deg == 40.0 && p.gz_in > 0.0));
    }

    #[test]
    fn test_curve_zero_when_swamped() {
        let curve = righting_arm_curve(&RightingArmInput::new(5.0, 20.0, -2.0, 36.0, 3000.0));
        assert!(curve.iter().all(|p| p.gz_in == 0.0 && p.righting_moment_ft_lb == 0.0));
    }

    #[test]
    fn test_righting_moment_units() {
        let curve = righting_arm_curve(&RightingArmInput::new(12.0, 0.0, 13.0, 36.0, 1200.0).with_range(10.0, 10.0));
        let p = curve[1];
        assert!((p.righting_moment_ft_lb - 1200.0 * p.gz_in / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_step() {
        let curve = righting_arm_curve(&RightingArmInput::new(12.0, 20.0, 13.0, 36.0, 1200.0).with_range(90.0, 0.0));
        assert_eq!(curve.len(), 1);
    }

    #[test]
    fn test_tiny_step_is_widened() {
        let input = RightingArmInput::new(15.69, 22.46, 13.19, 36.0, 945.0);
        for step in [1e-300, 1e-6, 0.05] {
            let curve = righting_arm_curve(&input.with_range(90.0, step));
            assert_eq!(curve.len(), 901, "step {}", step);
            assert!((curve[1].heel_deg - MIN_HEEL_STEP_DEG).abs() < 1e-12);
            assert!((curve[900].heel_deg - 90.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_finite_range() {
        let input = RightingArmInput::new(12.0, 20.0, 13.0, 36.0, 1200.0);
        assert_eq!(righting_arm_curve(&input.with_range(90.0, f64::INFINITY)).len(), 1);
        assert_eq!(righting_arm_curve(&input.with_range(f64::NAN, 5.0)).len(), 1);
    }
}
