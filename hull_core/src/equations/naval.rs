//! # Naval Architecture Formulas
//!
//! Hydrostatic and initial-stability relations for a small open hull.
//! Heights are measured from the keel.
//!
//! ## Notation
//!
//! - `∇` = Displacement volume
//! - `A_wp` = Waterplane area, `C_wp` = waterplane coefficient
//! - `I_wp` = Transverse second moment of the waterplane about the centreline
//! - `KB`, `BM`, `KG`, `GM` = centre of buoyancy, metacentric radius,
//!   centre of gravity, metacentric height
//!
//! ## References
//!
//! - Biran & López-Pulido, Ship Hydrostatics and Stability, 2nd Ed., Ch. 2-6
//! - Principles of Naval Architecture, Vol. I, Ch. II

/// ∇ = W / ρ. Zero when the fluid density is not positive.
#[inline]
pub fn displacement_volume(weight: f64, fluid_density: f64) -> f64 {
    if fluid_density > 0.0 {
        weight / fluid_density
    } else {
        0.0
    }
}

/// A_wp = C_wp × L × B
#[inline]
pub fn waterplane_area(waterplane_coeff: f64, length: f64, beam: f64) -> f64 {
    waterplane_coeff * length * beam
}

/// I_wp = C_wp × L × B³ / 12
///
/// The rectangle formula scaled by the waterplane coefficient, so the cube
/// of the beam dominates initial stability.
#[inline]
pub fn waterplane_inertia(waterplane_coeff: f64, length: f64, beam: f64) -> f64 {
    waterplane_coeff * length * beam.powi(3) / 12.0
}

/// Draft of a wall-sided body: T = ∇ / A_wp (zero for no waterplane)
#[inline]
pub fn mean_draft(volume: f64, waterplane_area: f64) -> f64 {
    if waterplane_area > 0.0 {
        volume / waterplane_area
    } else {
        0.0
    }
}

/// KB ≈ T / 2
#[inline]
pub fn center_of_buoyancy(draft: f64) -> f64 {
    draft / 2.0
}

/// Bouguer metacentric radius: BM = I_wp / ∇
///
/// Returns 0.0 when there is no displaced volume.
///
/// # Example
/// ```rust
/// use hull_core::equations::naval::{metacentric_radius, waterplane_inertia};
///
/// // 18 ft × 3 ft waterplane, C_wp 0.70, 15.14 ft³ displaced
/// let i_wp = waterplane_inertia(0.70, 18.0, 3.0);
/// let bm_ft = metacentric_radius(i_wp, 15.1446);
/// assert!((bm_ft * 12.0 - 22.46).abs() < 0.01);
/// ```
#[inline]
pub fn metacentric_radius(waterplane_inertia: f64, volume: f64) -> f64 {
    if volume > 0.0 {
        waterplane_inertia / volume
    } else {
        0.0
    }
}

/// Weighted centre of gravity: KG = Σ(Wᵢ·KGᵢ) / ΣWᵢ
///
/// Each item is `(weight, height)`. Returns 0.0 for zero total weight.
pub fn weighted_center_of_gravity(items: &[(f64, f64)]) -> f64 {
    let total: f64 = items.iter().map(|(w, _)| w).sum();
    if total > 0.0 {
        items.iter().map(|(w, kg)| w * kg).sum::<f64>() / total
    } else {
        0.0
    }
}

/// GM = KB + BM - KG
#[inline]
pub fn metacentric_height(kb: f64, bm: f64, kg: f64) -> f64 {
    kb + bm - kg
}

/// Heel angle at which the gunwale reaches the water (radians).
///
/// θ_de = atan(freeboard / (B/2)); zero when the hull has no freeboard.
#[inline]
pub fn deck_edge_immersion_angle(freeboard: f64, beam: f64) -> f64 {
    if freeboard > 0.0 && beam > 0.0 {
        (freeboard / (beam / 2.0)).atan()
    } else {
        0.0
    }
}

/// Wall-sided righting arm: GZ = sin θ·(GM + ½·BM·tan²θ)
///
/// Exact for a wall-sided hull until the deck edge immerses; reduces to
/// GM·sin θ at small angles.
#[inline]
pub fn wall_sided_righting_arm(gm: f64, bm: f64, heel_rad: f64) -> f64 {
    let tan = heel_rad.tan();
    heel_rad.sin() * (gm + 0.5 * bm * tan * tan)
}
