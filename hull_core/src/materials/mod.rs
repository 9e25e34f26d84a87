//! # Shell Material
//!
//! The engine needs two properties of the hull material: density (for
//! self-weight) and modulus of rupture (flexural strength, for the bending
//! check). Compressive strength is optional and only feeds the mix sanity
//! check.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::materials::MaterialSpec;
//!
//! let mix = MaterialSpec::new(60.0, 1500.0).with_compressive_strength(9000.0);
//! assert!(mix.validate().is_ok());
//! assert!(mix.check_mix().is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{positive_material, HullResult};

/// Lightweight canoe concrete is usually 50-80 pcf; outside 40-120 something
/// is probably wrong with the input.
pub const PLAUSIBLE_DENSITY_PCF: (f64, f64) = (40.0, 120.0);

/// Plausible modulus of rupture range for canoe mixes (psi).
pub const PLAUSIBLE_FLEXURAL_PSI: (f64, f64) = (300.0, 4000.0);

/// Flexural/compressive ratios above this are unusual (typically 8-15%).
pub const MAX_FLEXURAL_TO_COMPRESSIVE: f64 = 0.20;

/// Hull material properties.
///
/// ## JSON Example
///
/// ```json
/// { "density_pcf": 60.0, "flexural_strength_psi": 1500.0, "compressive_strength_psi": null }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Unit weight (lb/ft³)
    pub density_pcf: f64,

    /// Modulus of rupture (psi)
    pub flexural_strength_psi: f64,

    /// 28-day compressive strength (psi), if tested
    #[serde(default)]
    pub compressive_strength_psi: Option<f64>,
}

impl MaterialSpec {
    pub fn new(density_pcf: f64, flexural_strength_psi: f64) -> Self {
        MaterialSpec {
            density_pcf,
            flexural_strength_psi,
            compressive_strength_psi: None,
        }
    }

    pub fn with_compressive_strength(mut self, compressive_strength_psi: f64) -> Self {
        self.compressive_strength_psi = Some(compressive_strength_psi);
        self
    }

    /// Reject non-positive properties.
    pub fn validate(&self) -> HullResult<()> {
        positive_material("density_pcf", self.density_pcf)?;
        positive_material("flexural_strength_psi", self.flexural_strength_psi)?;
        if let Some(fc) = self.compressive_strength_psi {
            positive_material("compressive_strength_psi", fc)?;
        }
        Ok(())
    }

    /// Plausibility check on the mix. Concerns are advisory and logged; they
    /// never fail an analysis.
    pub fn check_mix(&self) -> Vec<MixConcern> {
        let mut concerns = Vec::new();

        let (lo, hi) = PLAUSIBLE_DENSITY_PCF;
        if self.density_pcf < lo || self.density_pcf > hi {
            concerns.push(MixConcern::UnusualDensity {
                density_pcf: self.density_pcf,
            });
        }

        let (lo, hi) = PLAUSIBLE_FLEXURAL_PSI;
        if self.flexural_strength_psi < lo || self.flexural_strength_psi > hi {
            concerns.push(MixConcern::UnusualFlexuralStrength {
                flexural_strength_psi: self.flexural_strength_psi,
            });
        }

        if let Some(fc) = self.compressive_strength_psi.filter(|fc| *fc > 0.0) {
            let ratio = self.flexural_strength_psi / fc;
            if ratio > MAX_FLEXURAL_TO_COMPRESSIVE {
                concerns.push(MixConcern::HighFlexuralRatio { ratio });
            }
        }

        for concern in &concerns {
            warn!(concern = %concern, "material plausibility check");
        }
        concerns
    }
}

/// A reason to double-check the material input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MixConcern {
    UnusualDensity { density_pcf: f64 },
    UnusualFlexuralStrength { flexural_strength_psi: f64 },
    HighFlexuralRatio { ratio: f64 },
}

impl std::fmt::Display for MixConcern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixConcern::UnusualDensity { density_pcf } => write!(
                f,
                "Density {:.0} pcf is unusual for a canoe mix (typical 50-80 pcf)",
                density_pcf
            ),
            MixConcern::UnusualFlexuralStrength { flexural_strength_psi } => write!(
                f,
                "Flexural strength {:.0} psi is unusual (typical 800-2500 psi)",
                flexural_strength_psi
            ),
            MixConcern::HighFlexuralRatio { ratio } => write!(
                f,
                "Flexural/compressive ratio {:.1}% is high (typical 8-15%); verify test data",
                ratio * 100.0
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_mix_has_no_concerns() {
        let mix = MaterialSpec::new(60.0, 1500.0);
        assert!(mix.validate().is_ok());
        assert!(mix.check_mix().is_empty());
    }

    #[test]
    fn test_heavy_mix_flagged() {
        let concerns = MaterialSpec::new(150.0, 1500.0).check_mix();
        assert_eq!(concerns, vec![MixConcern::UnusualDensity { density_pcf: 150.0 }]);
    }

    #[test]
    fn test_weak_and_heavy_both_flagged() {
        let concerns = MaterialSpec::new(20.0, 100.0).check_mix();
        assert_eq!(concerns.len(), 2);
    }

    #[test]
    fn test_flexural_ratio_flagged() {
        let concerns = MaterialSpec::new(60.0, 1500.0)
            .with_compressive_strength(5000.0)
            .check_mix();
        assert!(matches!(concerns[0], MixConcern::HighFlexuralRatio { ratio } if (ratio - 0.3).abs() < 1e-12));
        assert!(concerns[0].to_string().contains("30.0%"));
    }

    #[test]
    fn test_non_positive_properties_rejected() {
        assert!(MaterialSpec::new(0.0, 1500.0).validate().is_err());
        assert!(MaterialSpec::new(60.0, -1.0).validate().is_err());
        assert!(MaterialSpec::new(60.0, 1500.0)
            .with_compressive_strength(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_json_without_compressive_strength() {
        let mix: MaterialSpec = serde_json::from_str(r#"{"density_pcf":60,"flexural_strength_psi":1500}"#).unwrap();
        assert_eq!(mix.compressive_strength_psi, None);
    }
}
