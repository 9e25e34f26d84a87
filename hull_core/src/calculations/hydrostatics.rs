//! # Hydrostatics
//!
//! Draft and freeboard from total weight using a wall-sided waterplane.
//!
//! ```text
//!   ∇    = W / ρ_water
//!   A_wp = C_wp × L × B
//!   T    = ∇ / A_wp
//!   FB   = D − T
//! ```
//!
//! A hull loaded past its depth is not an error: freeboard goes negative and
//! `swamped` is set, so the freeboard check fails with the real margin.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::hydrostatics::hydrostatics;
//!
//! // 245 lb hull + 700 lb crew on an 18 ft × 36 in × 18 in hull
//! let h = hydrostatics(945.025, 62.4, 216.0, 36.0, 0.70, 18.0);
//! assert!((h.draft_in - 4.81).abs() < 0.01);
//! assert!((h.freeboard_in - 13.19).abs() < 0.01);
//! assert!(!h.swamped);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::naval::{displacement_volume, mean_draft, waterplane_area};
use crate::units::{ft_to_in, in_to_ft};

/// Floating position of the hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrostaticsResult {
    /// Displaced volume ∇ (ft³)
    pub displacement_ft3: f64,
    /// C_wp × L × B (ft²)
    pub waterplane_area_ft2: f64,
    /// Draft (in)
    pub draft_in: f64,
    /// Depth − draft (in); negative when swamped
    pub freeboard_in: f64,
    /// Draft exceeds depth
    pub swamped: bool,
}

/// Compute draft and freeboard.
///
/// # Arguments
///
/// * `total_weight_lbs` - hull + crew + gear
/// * `water_density_pcf` - 62.4 for fresh water
/// * `length_in`, `beam_in`, `depth_in` - hull dimensions
/// * `waterplane_coeff` - waterplane fullness, typically 0.65-0.75
///
/// A zero waterplane area gives zero draft.
pub fn hydrostatics(
    total_weight_lbs: f64,
    water_density_pcf: f64,
    length_in: f64,
    beam_in: f64,
    waterplane_coeff: f64,
    depth_in: f64,
) -> HydrostaticsResult {
    let displacement_ft3 = displacement_volume(total_weight_lbs, water_density_pcf);
    let waterplane_area_ft2 = waterplane_area(waterplane_coeff, in_to_ft(length_in), in_to_ft(beam_in));
    let draft_in = ft_to_in(mean_draft(displacement_ft3, waterplane_area_ft2));
    let freeboard_in = depth_in - draft_in;

    HydrostaticsResult {
        displacement_ft3,
        waterplane_area_ft2,
        draft_in,
        freeboard_in,
        swamped: draft_in > depth_in,
    }
}
