//! # hull_core - Canoe Hull Analysis Engine
//!
//! `hull_core` evaluates a concrete canoe hull from four dimensions, a mix
//! and a crew: self-weight, flotation, initial stability and longitudinal
//! bending, graded against competition minimums for freeboard, metacentric
//! height and flexural safety factor.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of immutable inputs, safe to call from any thread
//! - **JSON-First**: All request and result types implement Serialize/Deserialize
//! - **Rich Errors**: Malformed input is a structured [`HullError`]; a sinking or
//!   overstressed hull is a failing result, not an error
//! - **One Source of Truth**: Every formula lives in [`equations`]; every consumer
//!   goes through [`calculations::analysis`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hull_core::{run_complete_analysis, ComplianceThresholds, HullGeometry, LoadCase, MaterialSpec};
//!
//! let geometry = HullGeometry::new(216.0, 36.0, 18.0, 0.75).unwrap();
//! let material = MaterialSpec::new(60.0, 1500.0);
//! let result = run_complete_analysis(
//!     &geometry,
//!     &material,
//!     &LoadCase::midspan(700.0),
//!     &ComplianceThresholds::default(),
//! )
//! .unwrap();
//!
//! println!("Freeboard: {:.2} in", result.hydrostatics.freeboard_in);
//! println!("GM: {:.2} in", result.stability.gm_in);
//! println!("Safety factor: {:?}", result.structural.safety_factor);
//! assert!(result.overall_pass);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Hull dimensions and shell weight estimate
//! - [`materials`] - Shell material and mix plausibility check
//! - [`loads`] - Crew, gear and load combinations
//! - [`equations`] - Closed-form beam, section and naval formulas
//! - [`calculations`] - Hydrostatics, stability, bending and the complete analysis
//! - [`designs`] - Reference hull catalog
//! - [`settings`] - Form coefficients and compliance thresholds
//! - [`units`] - Unit constants and conversions
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod designs;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, run_complete_analysis, run_factored_analysis, run_with_settings, AnalysisInput, AnalysisResult,
};
pub use designs::{find_design, reference_designs, ReferenceDesign};
pub use errors::{HullError, HullResult};
pub use geometry::{estimate_weight, HullGeometry};
pub use loads::{CrewLoad, CrewStation, LoadCase, LoadCombination};
pub use materials::MaterialSpec;
pub use settings::{AnalysisSettings, ComplianceThresholds};
