//! # Error Types
//!
//! Structured error types for hull_core. Each variant names the offending
//! field so a caller (CLI, dashboard, batch driver) can point the user at
//! the exact input to fix.
//!
//! Non-physical but well-formed states are *not* errors: a swamped hull is
//! reported as a negative freeboard, and a zero section modulus yields an
//! undefined safety factor. Errors are reserved for malformed input.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::errors::{HullError, HullResult};
//!
//! fn validate_beam(beam_in: f64) -> HullResult<()> {
//!     if beam_in <= 0.0 {
//!         return Err(HullError::invalid_geometry(
//!             "beam_in",
//!             beam_in.to_string(),
//!             "Beam must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for hull_core operations
pub type HullResult<T> = Result<T, HullError>;

/// Structured error type for hull analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum HullError {
    /// Non-positive or mutually inconsistent hull dimensions
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// The midship section is not a hollow shell (no wall height, no area)
    #[error("Degenerate section: {reason}")]
    DegenerateSection { reason: String },

    /// A load, coefficient or threshold is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material property is non-positive
    #[error("Invalid material for '{field}': {value} - {reason}")]
    InvalidMaterial {
        field: String,
        value: String,
        reason: String,
    },
}

impl HullError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        HullError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateSection error
    pub fn degenerate_section(reason: impl Into<String>) -> Self {
        HullError::DegenerateSection {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        HullError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        HullError::InvalidMaterial {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            HullError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            HullError::DegenerateSection { .. } => "DEGENERATE_SECTION",
            HullError::InvalidInput { .. } => "INVALID_INPUT",
            HullError::InvalidMaterial { .. } => "INVALID_MATERIAL",
        }
    }
}

/// Finite and strictly positive. NaN compares false against everything, so a
/// bare `value <= 0.0` check would let it through.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn positive_geometry(field: &str, value: f64) -> HullResult<()> {
    if is_positive(value) {
        return Ok(());
    }
    Err(HullError::invalid_geometry(field, value.to_string(), "Dimension must be positive"))
}

pub(crate) fn positive_material(field: &str, value: f64) -> HullResult<()> {
    if is_positive(value) {
        return Ok(());
    }
    Err(HullError::invalid_material(field, value.to_string(), "Property must be positive"))
}

pub(crate) fn positive_input(field: &str, value: f64) -> HullResult<()> {
    if is_positive(value) {
        return Ok(());
    }
    Err(HullError::invalid_input(field, value.to_string(), "Must be a positive number"))
}

/// Zero is allowed (an empty canoe carries no crew).
pub(crate) fn non_negative_input(field: &str, value: f64) -> HullResult<()> {
    if value.is_finite() && value >= 0.0 {
        return Ok(());
    }
    Err(HullError::invalid_input(field, value.to_string(), "Must be zero or positive"))
}
