//! # Hull Calculations
//!
//! Each stage is a pure function of plain data. [`analysis`] chains them;
//! the others are public for callers that need a single stage.
//!
//! ## Available Calculations
//!
//! - [`hydrostatics`] - Displacement, draft, freeboard
//! - [`stability`] - KB, BM, KG, GM and the righting-arm curve
//! - [`girder`] - Superposed span analysis of the hull girder
//! - [`structural`] - Section modulus and bending safety factor
//! - [`analysis`] - Complete analysis and compliance verdicts

pub mod analysis;
pub mod girder;
pub mod hydrostatics;
pub mod stability;
pub mod structural;

pub use analysis::{
    calculate, run_complete_analysis, run_factored_analysis, run_with_settings, AnalysisInput, AnalysisResult,
};
pub use girder::{GirderLoad, HullGirder};
pub use hydrostatics::{hydrostatics, HydrostaticsResult};
pub use stability::{
    righting_arm_at, righting_arm_curve, stability, RightingArmInput, RightingArmPoint, StabilityInput,
    StabilityResult,
};
pub use structural::{
    bending_check, section_modulus, station_girder, structural, structural_with_stations, StructuralResult,
};
