//! # Cross-Section Property Formulas
//!
//! Geometric properties of the midship section. The hull girder is a thin
//! open U: a bottom plate and two side walls, combined about a single
//! horizontal neutral axis with the parallel-axis theorem.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `ȳ` = Neutral axis height above the keel (outer bottom face)
//! - `I` = Moment of inertia about the neutral axis
//! - `c` = Distance from neutral axis to an extreme fiber
//! - `S` = Section modulus (I/c)
//! - `b` = Beam (outer width), `d` = depth, `t` = wall thickness
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - Gere & Goodno, Mechanics of Materials, §12.5 (parallel-axis theorem)

use serde::{Deserialize, Serialize};

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Area of a solid rectangle: A = b × d
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Centroidal moment of inertia of a solid rectangle, strong axis.
///
/// ```text
///     ┌─────────┐
///   d │ ════════│ ← centroid at d/2
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Section modulus of a solid rectangle: S = bd²/6
///
/// Only used as an upper bound. A hollow hull with the same outer envelope
/// is always weaker, and treating the hull as solid grossly overstates its
/// bending strength.
///
/// # Example
/// ```rust
/// use hull_core::equations::section::rectangular_section_modulus;
///
/// // 36 in × 18 in envelope
/// assert!((rectangular_section_modulus(36.0, 18.0) - 1944.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d * d / 6.0
}

/// Transfer a centroidal inertia to a parallel axis at distance `offset`.
///
/// # Formula
/// I = I_c + A·offset²
#[inline]
pub fn parallel_axis(i_centroid: f64, area: f64, offset: f64) -> f64 {
    i_centroid + area * offset * offset
}

// =============================================================================
// COMPOSITE SECTIONS
// =============================================================================

/// One rectangular piece of a composite section, positioned by the height
/// of its bottom edge above the keel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectComponent {
    /// Horizontal width (in)
    pub width_in: f64,
    /// Vertical height (in)
    pub height_in: f64,
    /// Bottom edge above the keel (in)
    pub base_in: f64,
}

impl RectComponent {
    pub fn new(width_in: f64, height_in: f64, base_in: f64) -> Self {
        RectComponent {
            width_in,
            height_in,
            base_in,
        }
    }

    pub fn area(&self) -> f64 {
        rectangular_area(self.width_in, self.height_in)
    }

    /// Centroid height above the keel (in)
    pub fn centroid_in(&self) -> f64 {
        self.base_in + self.height_in / 2.0
    }

    pub fn self_inertia(&self) -> f64 {
        rectangular_moment_of_inertia(self.width_in, self.height_in)
    }
}

/// Properties of a section about its horizontal neutral axis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_in2": 52.875,
///   "neutral_axis_in": 4.779,
///   "moment_of_inertia_in4": 1713.1,
///   "c_top_in": 13.221,
///   "c_bottom_in": 4.779,
///   "s_top_in3": 129.58,
///   "s_bottom_in3": 358.45,
///   "section_modulus_in3": 129.58
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub area_in2: f64,
    /// ȳ above the keel
    pub neutral_axis_in: f64,
    pub moment_of_inertia_in4: f64,
    /// Neutral axis to gunwale
    pub c_top_in: f64,
    /// Neutral axis to keel
    pub c_bottom_in: f64,
    pub s_top_in3: f64,
    pub s_bottom_in3: f64,
    /// Governing (smaller) modulus; 0.0 for a degenerate section
    pub section_modulus_in3: f64,
}

/// Combine rectangles into one section of overall height `depth_in`.
///
/// ```text
///   ȳ = Σ(Aᵢ·yᵢ) / ΣAᵢ
///   I = Σ[I_c,ᵢ + Aᵢ·(ȳ − yᵢ)²]
///   c_top = depth − ȳ,  c_bottom = ȳ
///   S = min(I/c_top, I/c_bottom)
/// ```
///
/// The fiber farther from the neutral axis sees the higher stress, so the
/// smaller modulus governs. Zero total area or a non-positive extreme-fiber
/// distance gives a governing modulus of 0.0; callers treat that as a
/// degenerate section.
///
/// # Example
/// ```rust
/// use hull_core::equations::section::{composite_section, RectComponent};
///
/// // Two 4×2 blocks stacked behave like one 4×4 block
/// let props = composite_section(
///     &[RectComponent::new(4.0, 2.0, 0.0), RectComponent::new(4.0, 2.0, 2.0)],
///     4.0,
/// );
/// assert!((props.moment_of_inertia_in4 - 64.0 / 3.0).abs() < 1e-9);
/// ```
pub fn composite_section(components: &[RectComponent], depth_in: f64) -> SectionProperties {
    let area: f64 = components.iter().map(RectComponent::area).sum();
    let neutral_axis = if area > 0.0 {
        components.iter().map(|c| c.area() * c.centroid_in()).sum::<f64>() / area
    } else {
        0.0
    };

    let inertia: f64 = components
        .iter()
        .map(|c| parallel_axis(c.self_inertia(), c.area(), neutral_axis - c.centroid_in()))
        .sum();

    let c_top = depth_in - neutral_axis;
    let c_bottom = neutral_axis;
    let s_top = if c_top > 0.0 { inertia / c_top } else { 0.0 };
    let s_bottom = if c_bottom > 0.0 { inertia / c_bottom } else { 0.0 };

    let section_modulus = if area <= 0.0 || c_top.max(c_bottom) <= 0.0 {
        0.0
    } else {
        s_top.min(s_bottom)
    };

    SectionProperties {
        area_in2: area,
        neutral_axis_in: neutral_axis,
        moment_of_inertia_in4: inertia,
        c_top_in: c_top,
        c_bottom_in: c_bottom,
        s_top_in3: s_top,
        s_bottom_in3: s_bottom,
        section_modulus_in3: section_modulus,
    }
}

// =============================================================================
// THIN-SHELL U SECTION
// =============================================================================

/// The three rectangles of an open U hull section.
///
/// ```text
///   ┌─┐                ┌─┐  ─┬─
///   │ │                │ │   │ d − t
///   │ │                │ │   │
///   │ └────────────────┘ │  ─┴─
///   └────────────────────┘   t
///   ←─────────  b  ───────→
/// ```
///
/// Bottom plate `b × t` on the keel, and two side walls `t × (d − t)`
/// standing on the plate. A wall height ≤ 0 collapses to zero-height walls.
pub fn thin_shell_components(beam_in: f64, depth_in: f64, thickness_in: f64) -> [RectComponent; 3] {
    let wall_height = (depth_in - thickness_in).max(0.0);
    let wall = RectComponent::new(thickness_in, wall_height, thickness_in);
    [RectComponent::new(beam_in, thickness_in, 0.0), wall, wall]
}

/// Unchecked thin-shell section properties. See
/// [`crate::calculations::structural::section_modulus`] for the validated
/// entry point.
///
/// # Example
/// ```rust
/// use hull_core::equations::section::thin_shell_section;
///
/// let props = thin_shell_section(36.0, 18.0, 0.75);
/// assert!((props.section_modulus_in3 - 129.6).abs() < 0.5);
/// assert!((props.neutral_axis_in - 4.78).abs() < 0.01);
/// ```
pub fn thin_shell_section(beam_in: f64, depth_in: f64, thickness_in: f64) -> SectionProperties {
    composite_section(&thin_shell_components(beam_in, depth_in, thickness_in), depth_in)
}
