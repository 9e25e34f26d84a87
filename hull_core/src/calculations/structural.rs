//! # Longitudinal Bending Check
//!
//! The hull is a simply-supported girder the length of the canoe. Self-weight
//! is uniform; crew is either one midspan point load (worst case) or
//! individual paddlers at their stations.
//!
//! ```text
//!   M  = w·L²/8 + P·L/4          (midspan crew, ft-lb)
//!   σ  = M × 12 / S              (psi)
//!   SF = f_r / σ
//! ```
//!
//! Loads are taken at face value. Factored demand is produced upstream by
//! scaling the loads through a [`crate::loads::LoadCombination`].
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::structural::{section_modulus, structural};
//!
//! let section = section_modulus(36.0, 18.0, 0.75).unwrap();
//! let r = structural(245.0, 700.0, 216.0, section.section_modulus_in3, 1500.0);
//! assert!((r.bending_stress_psi - 342.8).abs() < 0.5);
//! assert!(r.safety_factor.unwrap() > 4.0);
//! ```

use serde::{Deserialize, Serialize};

use super::girder::{GirderLoad, HullGirder};
use crate::equations::beam::{midspan_point_load_max_moment, uniform_load_max_moment};
use crate::equations::section::{thin_shell_section, SectionProperties};
use crate::errors::{HullError, HullResult};
use crate::loads::CrewStation;
use crate::units::{ft_to_in, in_to_ft, FtLb, InLb};

/// Outcome of the bending check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralResult {
    /// Peak sagging moment (ft-lb)
    pub max_moment_ft_lb: f64,
    /// Where it occurs, from the bow (in)
    pub max_moment_position_in: f64,
    /// Extreme-fiber stress at the governing face (psi)
    pub bending_stress_psi: f64,
    /// Flexural strength / stress. `None` when there is no stress or no
    /// section to carry it; a `None` never passes.
    pub safety_factor: Option<f64>,
}

impl StructuralResult {
    pub fn passes(&self, min_safety_factor: f64) -> bool {
        self.safety_factor.is_some_and(|sf| sf >= min_safety_factor)
    }
}

/// Checked thin-shell section properties.
///
/// # Errors
///
/// `DegenerateSection` when the wall is at least as thick as the hull is
/// deep or as half the beam, or when the governing modulus is not a
/// positive finite number.
pub fn section_modulus(beam_in: f64, depth_in: f64, thickness_in: f64) -> HullResult<SectionProperties> {
    if !(thickness_in > 0.0 && thickness_in < depth_in) {
        return Err(HullError::degenerate_section(format!(
            "wall thickness {} in leaves no side wall in a {} in deep hull",
            thickness_in, depth_in
        )));
    }
    if thickness_in >= beam_in / 2.0 {
        return Err(HullError::degenerate_section(format!(
            "side walls of {} in meet across a {} in beam",
            thickness_in, beam_in
        )));
    }

    let props = thin_shell_section(beam_in, depth_in, thickness_in);
    let s = props.section_modulus_in3;
    if !(s.is_finite() && s > 0.0) {
        return Err(HullError::degenerate_section(format!(
            "governing section modulus is {} in³",
            s
        )));
    }
    Ok(props)
}

/// Stress and safety factor for a known peak moment.
pub fn bending_check(
    max_moment_ft_lb: f64,
    max_moment_position_in: f64,
    section_modulus_in3: f64,
    flexural_strength_psi: f64,
) -> StructuralResult {
    let bending_stress_psi = if section_modulus_in3 > 0.0 {
        InLb::from(FtLb(max_moment_ft_lb)).0 / section_modulus_in3
    } else {
        0.0
    };
    let safety_factor = (bending_stress_psi > 0.0).then(|| flexural_strength_psi / bending_stress_psi);

    StructuralResult {
        max_moment_ft_lb,
        max_moment_position_in,
        bending_stress_psi,
        safety_factor,
    }
}

/// Bending check with crew lumped at midspan.
pub fn structural(
    hull_weight_lbs: f64,
    crew_weight_lbs: f64,
    length_in: f64,
    section_modulus_in3: f64,
    flexural_strength_psi: f64,
) -> StructuralResult {
    let length_ft = in_to_ft(length_in);
    // w·L²/8 with w = W/L
    let dead = if length_ft > 0.0 {
        uniform_load_max_moment(hull_weight_lbs / length_ft, length_ft)
    } else {
        0.0
    };
    let live = midspan_point_load_max_moment(crew_weight_lbs, length_ft);

    bending_check(dead + live, length_in / 2.0, section_modulus_in3, flexural_strength_psi)
}

/// Bending check with crew at individual stations, superposed on the
/// uniform self-weight.
///
/// # Errors
///
/// `InvalidInput` when a station lies off the hull or carries a negative
/// weight.
pub fn structural_with_stations(
    hull_weight_lbs: f64,
    stations: &[CrewStation],
    length_in: f64,
    section_modulus_in3: f64,
    flexural_strength_psi: f64,
) -> HullResult<StructuralResult> {
    for station in stations {
        station.validate(length_in)?;
    }
    let girder = station_girder(hull_weight_lbs, stations, length_in);
    let (moment, position_ft) = girder.max_moment();
    Ok(bending_check(
        moment,
        ft_to_in(position_ft),
        section_modulus_in3,
        flexural_strength_psi,
    ))
}

/// Girder model of the hull for plotting or further checks. Stations are
/// taken as given; positions outside `[0, length_in]` give a meaningless
/// girder.
pub fn station_girder(hull_weight_lbs: f64, stations: &[CrewStation], length_in: f64) -> HullGirder {
    let length_ft = in_to_ft(length_in);
    let mut girder = HullGirder::new(length_ft);
    if length_ft > 0.0 {
        girder.add_load(GirderLoad::uniform(hull_weight_lbs / length_ft));
    }
    for station in stations {
        girder.add_load(GirderLoad::point(station.weight_lbs, in_to_ft(station.position_in)));
    }
    girder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_section() {
        let p = section_modulus(36.0, 18.0, 0.75).unwrap();
        assert!((p.section_modulus_in3 - 129.6).abs() < 0.5);
        assert!((p.neutral_axis_in - 4.78).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_sections() {
        for (b, d, t) in [(36.0, 18.0, 18.0), (36.0, 18.0, 20.0), (10.0, 18.0, 5.0), (36.0, 18.0, 0.0)] {
            let err = section_modulus(b, d, t).unwrap_err();
            assert_eq!(err.error_code(), "DEGENERATE_SECTION", "b={} d={} t={}", b, d, t);
        }
    }

    #[test]
    fn test_reference_bending() {
        // M = 245.025·18/8 + 700·18/4 = 3701.31 ft-lb
        // σ = 3701.31 × 12 / 129.578 = 342.77 psi
        let s = section_modulus(36.0, 18.0, 0.75).unwrap().section_modulus_in3;
        let r = structural(245.025, 700.0, 216.0, s, 1500.0);
        assert!((r.max_moment_ft_lb - 3701.306).abs() < 1e-3);
        assert!((r.bending_stress_psi - 342.77).abs() < 0.05);
        assert!((r.safety_factor.unwrap() - 4.376).abs() < 1e-3);
        assert_eq!(r.max_moment_position_in, 108.0);
    }

    #[test]
    fn test_zero_section_modulus_has_no_safety_factor() {
        let r = structural(245.0, 700.0, 216.0, 0.0, 1500.0);
        assert_eq!(r.bending_stress_psi, 0.0);
        assert!(r.safety_factor.is_none());
        assert!(!r.passes(2.0));
    }

    #[test]
    fn test_unloaded_hull_has_no_safety_factor() {
        let r = structural(0.0, 0.0, 216.0, 129.6, 1500.0);
        assert!(r.safety_factor.is_none());
    }

    #[test]
    fn test_single_midspan_station_matches_lumped() {
        let lumped = structural(245.0, 700.0, 216.0, 129.6, 1500.0);
        let stations =
            structural_with_stations(245.0, &[CrewStation::new(108.0, 700.0)], 216.0, 129.6, 1500.0).unwrap();
        assert!((lumped.max_moment_ft_lb - stations.max_moment_ft_lb).abs() < 1e-9);
        assert!((stations.max_moment_position_in - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_spread_crew_is_less_severe_than_lumped() {
        let lumped = structural(245.0, 700.0, 216.0, 129.6, 1500.0);
        let seated = structural_with_stations(
            245.0,
            &[
                CrewStation::new(36.0, 175.0),
                CrewStation::new(84.0, 175.0),
                CrewStation::new(132.0, 175.0),
                CrewStation::new(180.0, 175.0),
            ],
            216.0,
            129.6,
            1500.0,
        )
        .unwrap();
        assert!(seated.max_moment_ft_lb < lumped.max_moment_ft_lb);
        assert!(seated.safety_factor.unwrap() > lumped.safety_factor.unwrap());
    }

    #[test]
    fn test_station_off_the_hull_is_rejected() {
        for position in [-12.0, 240.0, f64::NAN] {
            let err = structural_with_stations(245.0, &[CrewStation::new(position, 175.0)], 216.0, 129.6, 1500.0)
                .unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "position {}", position);
        }
    }

    #[test]
    fn test_stations_at_bow_and_stern_carry_no_moment() {
        let r = structural_with_stations(
            0.0,
            &[CrewStation::new(0.0, 175.0), CrewStation::new(216.0, 175.0)],
            216.0,
            129.6,
            1500.0,
        )
        .unwrap();
        assert!(r.max_moment_ft_lb.abs() < 1e-9);
        assert!(r.safety_factor.is_none());
    }
}
