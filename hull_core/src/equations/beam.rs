//! # Simply-Supported Span Formulas
//!
//! The hull girder is idealised as a simply-supported span the length of
//! the hull (support at bow x = 0, stern x = L), carrying its own weight as
//! a uniform load and crew as point loads.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position from the bow
//! - `a` = Point load position from the bow
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `R1` = Bow reaction, `R2` = Stern reaction
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive sagging (tension at the keel)
//! - Shear: Positive when the bow side moves up relative to the stern side
//!
//! Units are whatever the caller passes, consistently. The hull analysis
//! works in lbs and feet, so moments come out in ft-lb.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// POINT LOAD
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Shear at x for point load P at a
///
/// - V(x) = R1       for x < a
/// - V(x) = R1 - P   for x ≥ a
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x < a {
        r1
    } else {
        r1 - p
    }
}

/// Moment at x for point load P at a
///
/// - M(x) = R1·x           for x ≤ a
/// - M(x) = R1·x - P(x-a)  for x > a
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

/// Peak moment of a single midspan point load: M = PL/4
///
/// # Example
/// ```rust
/// use hull_core::equations::beam::midspan_point_load_max_moment;
///
/// // 700 lb crew on an 18 ft hull
/// assert!((midspan_point_load_max_moment(700.0, 18.0) - 3150.0).abs() < 1e-9);
/// ```
#[inline]
pub fn midspan_point_load_max_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

// =============================================================================
// UNIFORM LOAD
// =============================================================================

/// Reactions for a full-span uniform load: R1 = R2 = wL/2
#[inline]
pub fn uniform_load_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Shear at x: V(x) = w(L/2 - x)
#[inline]
pub fn uniform_load_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l / 2.0 - x)
}

/// Moment at x: M(x) = wx(L - x)/2
#[inline]
pub fn uniform_load_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x * (l - x) / 2.0
}

/// Peak moment at midspan: M = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}
