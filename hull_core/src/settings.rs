//! # Analysis Settings
//!
//! Form coefficients, fluid properties and compliance thresholds that every
//! analysis reads. These are the only tunable constants in the engine; no
//! calculation module hardcodes its own copy.
//!
//! Both structs use `#[serde(default)]` so a settings file only needs the
//! fields it changes:
//!
//! ```rust
//! use hull_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json_str(r#"{ "waterplane_coeff": 0.65 }"#).unwrap();
//! assert_eq!(settings.waterplane_coeff, 0.65);
//! assert_eq!(settings.prismatic_coeff, 0.55);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{non_negative_input, positive_input, HullError, HullResult};
use crate::units::FRESH_WATER_DENSITY_PCF;

/// Typical canoe waterplane coefficient band. A rectangle (1.0) or a true
/// ellipse (π/4) both fall outside it.
pub const TYPICAL_WATERPLANE_COEFF: (f64, f64) = (0.65, 0.75);

/// Engine-wide coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Water density (lb/ft³); 62.4 for fresh water
    pub water_density_pcf: f64,

    /// Waterplane area / (length × beam)
    pub waterplane_coeff: f64,

    /// Prismatic coefficient applied to the unfolded shell area for end taper
    pub prismatic_coeff: f64,

    /// Mass multiplier for gunwales, ribs and thickened keel
    pub overhead_factor: f64,

    /// Empty-hull centre of gravity as a fraction of depth above the keel
    pub hull_kg_fraction: f64,

    /// A measured hull weight further than this from the geometric estimate
    /// (percent) is flagged in the result warnings
    pub weight_tolerance_pct: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            water_density_pcf: FRESH_WATER_DENSITY_PCF,
            waterplane_coeff: 0.70,
            prismatic_coeff: 0.55,
            overhead_factor: 1.10,
            hull_kg_fraction: 0.38,
            weight_tolerance_pct: 20.0,
        }
    }
}

impl AnalysisSettings {
    /// Parse a (possibly partial) JSON settings document and validate it.
    pub fn from_json_str(json: &str) -> HullResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)
            .map_err(|e| HullError::invalid_input("settings", "<json>", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate coefficient ranges.
    pub fn validate(&self) -> HullResult<()> {
        positive_input("water_density_pcf", self.water_density_pcf)?;
        positive_input("overhead_factor", self.overhead_factor)?;
        positive_input("weight_tolerance_pct", self.weight_tolerance_pct)?;

        for (field, value) in [
            ("waterplane_coeff", self.waterplane_coeff),
            ("prismatic_coeff", self.prismatic_coeff),
            ("hull_kg_fraction", self.hull_kg_fraction),
        ] {
            positive_input(field, value)?;
            if value > 1.0 {
                return Err(HullError::invalid_input(
                    field,
                    value.to_string(),
                    "Coefficient cannot exceed 1.0",
                ));
            }
        }
        Ok(())
    }

    /// True when the waterplane coefficient sits inside the typical canoe band.
    pub fn waterplane_coeff_is_typical(&self) -> bool {
        let (lo, hi) = TYPICAL_WATERPLANE_COEFF;
        (lo..=hi).contains(&self.waterplane_coeff)
    }
}

/// Minimum margins a hull must meet. Defaults follow the ASCE 2026 concrete
/// canoe rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceThresholds {
    /// Minimum loaded freeboard (in)
    pub min_freeboard_in: f64,

    /// Minimum metacentric height (in)
    pub min_gm_in: f64,

    /// Minimum flexural safety factor
    pub min_safety_factor: f64,
}

impl Default for ComplianceThresholds {
    fn default() -> Self {
        ComplianceThresholds {
            min_freeboard_in: 6.0,
            min_gm_in: 6.0,
            min_safety_factor: 2.0,
        }
    }
}

impl ComplianceThresholds {
    /// Thresholds may be zero (check disabled in effect) but not negative.
    pub fn validate(&self) -> HullResult<()> {
        for (field, value) in [
            ("min_freeboard_in", self.min_freeboard_in),
            ("min_gm_in", self.min_gm_in),
            ("min_safety_factor", self.min_safety_factor),
        ] {
            non_negative_input(field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = AnalysisSettings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.waterplane_coeff_is_typical());
        assert!(ComplianceThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_rectangle_and_ellipse_are_not_typical() {
        let mut settings = AnalysisSettings::default();
        settings.waterplane_coeff = 1.0;
        assert!(!settings.waterplane_coeff_is_typical());
        settings.waterplane_coeff = std::f64::consts::FRAC_PI_4;
        assert!(!settings.waterplane_coeff_is_typical());
    }

    #[test]
    fn test_partial_json() {
        let settings = AnalysisSettings::from_json_str(r#"{ "water_density_pcf": 64.0 }"#).unwrap();
        assert_eq!(settings.water_density_pcf, 64.0);
        assert_eq!(settings.overhead_factor, 1.10);
    }

    #[test]
    fn test_coefficient_above_one_rejected() {
        let err = AnalysisSettings::from_json_str(r#"{ "prismatic_coeff": 1.2 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(AnalysisSettings::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let thresholds = ComplianceThresholds {
            min_gm_in: -1.0,
            ..ComplianceThresholds::default()
        };
        assert!(thresholds.validate().is_err());
    }
}
