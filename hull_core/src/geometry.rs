//! # Hull Geometry & Weight Estimation
//!
//! The hull is reduced to four principal dimensions (inches). Self-weight is
//! estimated by unfolding the midship U-section (bottom plate plus two side
//! walls) into a flat shell:
//!
//! ```text
//!   girth        = B + 2D
//!   shell_area   = girth × L × Cp      (Cp: prismatic coefficient, end taper)
//!   shell_volume = shell_area × t
//!   weight       = shell_volume × ρ × k (k: overhead for gunwales, ribs)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use hull_core::geometry::estimate_weight;
//!
//! // 18 ft × 36 in × 18 in hull, 3/4 in wall, 60 pcf concrete
//! let w = estimate_weight(216.0, 36.0, 18.0, 0.75, 60.0, 0.55, 1.10).unwrap();
//! assert!((w - 245.0).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{positive_geometry, positive_input, positive_material, HullError, HullResult};
use crate::units::in_to_ft;

/// Principal hull dimensions in inches.
///
/// Fields are private: a `HullGeometry` can only be obtained through
/// [`HullGeometry::new`] (or deserialization, which runs the same checks),
/// so every instance satisfies `thickness < depth` and `thickness < beam / 2`.
///
/// ## JSON Example
///
/// ```json
/// { "length_in": 216.0, "beam_in": 36.0, "depth_in": 18.0, "thickness_in": 0.75 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHullGeometry")]
pub struct HullGeometry {
    length_in: f64,
    beam_in: f64,
    depth_in: f64,
    thickness_in: f64,
}

#[derive(Deserialize)]
struct RawHullGeometry {
    length_in: f64,
    beam_in: f64,
    depth_in: f64,
    thickness_in: f64,
}

impl TryFrom<RawHullGeometry> for HullGeometry {
    type Error = HullError;

    fn try_from(raw: RawHullGeometry) -> HullResult<Self> {
        HullGeometry::new(raw.length_in, raw.beam_in, raw.depth_in, raw.thickness_in)
    }
}

impl HullGeometry {
    /// Build a validated geometry.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` when any dimension is non-positive, when the wall is
    /// as thick as the hull is deep, or when the two side walls would meet.
    pub fn new(length_in: f64, beam_in: f64, depth_in: f64, thickness_in: f64) -> HullResult<Self> {
        validate_dimensions(length_in, beam_in, depth_in, thickness_in)?;
        Ok(HullGeometry {
            length_in,
            beam_in,
            depth_in,
            thickness_in,
        })
    }

    pub fn length_in(&self) -> f64 {
        self.length_in
    }

    pub fn beam_in(&self) -> f64 {
        self.beam_in
    }

    pub fn depth_in(&self) -> f64 {
        self.depth_in
    }

    pub fn thickness_in(&self) -> f64 {
        self.thickness_in
    }

    pub fn length_ft(&self) -> f64 {
        in_to_ft(self.length_in)
    }

    pub fn beam_ft(&self) -> f64 {
        in_to_ft(self.beam_in)
    }

    pub fn depth_ft(&self) -> f64 {
        in_to_ft(self.depth_in)
    }

    pub fn thickness_ft(&self) -> f64 {
        in_to_ft(self.thickness_in)
    }
}

fn validate_dimensions(length_in: f64, beam_in: f64, depth_in: f64, thickness_in: f64) -> HullResult<()> {
    positive_geometry("length_in", length_in)?;
    positive_geometry("beam_in", beam_in)?;
    positive_geometry("depth_in", depth_in)?;
    positive_geometry("thickness_in", thickness_in)?;

    if thickness_in >= depth_in {
        return Err(HullError::invalid_geometry(
            "thickness_in",
            thickness_in.to_string(),
            format!("Wall thickness must be less than depth ({} in); wall height would be zero", depth_in),
        ));
    }
    if thickness_in >= beam_in / 2.0 {
        return Err(HullError::invalid_geometry(
            "thickness_in",
            thickness_in.to_string(),
            format!("Wall thickness must be less than half the beam ({} in); side walls would meet", beam_in / 2.0),
        ));
    }
    Ok(())
}

/// Intermediate quantities of the shell weight model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEstimate {
    /// Unfolded U perimeter B + 2D (ft)
    pub girth_ft: f64,
    /// Girth × length × prismatic coefficient (ft²)
    pub shell_area_ft2: f64,
    /// Shell area × thickness (ft³)
    pub shell_volume_ft3: f64,
    /// Estimated hull self-weight including overhead (lbs)
    pub weight_lbs: f64,
}

/// Estimate hull self-weight (lbs) from geometry.
///
/// # Arguments
///
/// * `length_in`, `beam_in`, `depth_in`, `thickness_in` - hull dimensions (in)
/// * `density_pcf` - shell material density (lb/ft³)
/// * `prismatic_coeff` - end-taper correction, ≈0.55 for a canoe
/// * `overhead_factor` - reinforcement allowance, ≈1.10
///
/// # Errors
///
/// `InvalidGeometry` for non-positive dimensions or `thickness ≥ depth`;
/// `InvalidMaterial` / `InvalidInput` for non-positive density or coefficients.
pub fn estimate_weight(
    length_in: f64,
    beam_in: f64,
    depth_in: f64,
    thickness_in: f64,
    density_pcf: f64,
    prismatic_coeff: f64,
    overhead_factor: f64,
) -> HullResult<f64> {
    let geometry = HullGeometry::new(length_in, beam_in, depth_in, thickness_in)?;
    estimate_weight_breakdown(&geometry, density_pcf, prismatic_coeff, overhead_factor).map(|w| w.weight_lbs)
}

/// Weight estimate with its intermediate quantities, for an already
/// validated geometry.
pub fn estimate_weight_breakdown(
    geometry: &HullGeometry,
    density_pcf: f64,
    prismatic_coeff: f64,
    overhead_factor: f64,
) -> HullResult<WeightEstimate> {
    positive_material("density_pcf", density_pcf)?;
    positive_input("prismatic_coeff", prismatic_coeff)?;
    positive_input("overhead_factor", overhead_factor)?;

    let girth_ft = geometry.beam_ft() + 2.0 * geometry.depth_ft();
    let shell_area_ft2 = girth_ft * geometry.length_ft() * prismatic_coeff;
    let shell_volume_ft3 = shell_area_ft2 * geometry.thickness_ft();
    let weight_lbs = shell_volume_ft3 * density_pcf * overhead_factor;

    Ok(WeightEstimate {
        girth_ft,
        shell_area_ft2,
        shell_volume_ft3,
        weight_lbs,
    })
}
