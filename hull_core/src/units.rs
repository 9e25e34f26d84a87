//! # Unit Types
//!
//! Hull dimensions are entered in inches, while the hydrostatic relations
//! work in feet because water density is tabulated in lb/ft³. Every
//! conversion between the two goes through [`INCHES_PER_FOOT`].
//!
//! The newtypes are thin `f64` wrappers that serialize as bare numbers.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::units::{Feet, Inches, FtLb, InLb};
//!
//! let length: Feet = Inches(216.0).into();
//! assert_eq!(length.0, 18.0);
//!
//! let moment: InLb = FtLb(100.0).into();
//! assert_eq!(moment.0, 1200.0);
//! ```

use serde::{Deserialize, Serialize};

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Freshwater density (lb/ft³)
pub const FRESH_WATER_DENSITY_PCF: f64 = 62.4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FtLb(pub f64);

/// Moment in inch-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InLb(pub f64);

impl From<FtLb> for InLb {
    fn from(ftlb: FtLb) -> Self {
        InLb(ftlb.0 * INCHES_PER_FOOT)
    }
}

impl From<InLb> for FtLb {
    fn from(inlb: InLb) -> Self {
        FtLb(inlb.0 / INCHES_PER_FOOT)
    }
}

/// Inches → feet on a bare value.
#[inline]
pub fn in_to_ft(inches: f64) -> f64 {
    Feet::from(Inches(inches)).0
}

/// Feet → inches on a bare value.
#[inline]
pub fn ft_to_in(feet: f64) -> f64 {
    Inches::from(Feet(feet)).0
}
