//! Loads carried by the hull
//!
//! # Overview
//!
//! - [`LoadType`] - dead (hull) vs live (crew, gear)
//! - [`LoadCase`] - crew placement, gear, centre-of-gravity heights and an
//!   optional measured hull weight for one scenario
//! - [`LoadCombination`] - explicit factors for a factored (LRFD-style) check
//! - [`CrewLoad`] / [`CrewStation`] - crew lumped at midship or seated at stations
//!
//! # Example
//!
//! ```
//! use hull_core::loads::{CrewStation, LoadCase};
//!
//! // Four paddlers seated along an 18 ft hull, plus a 30 lb cooler
//! let case = LoadCase::with_stations(vec![
//!     CrewStation::new(36.0, 175.0),
//!     CrewStation::new(84.0, 175.0),
//!     CrewStation::new(132.0, 175.0),
//!     CrewStation::new(180.0, 175.0),
//! ])
//! .with_gear(30.0, 6.0);
//!
//! assert_eq!(case.crew_weight_lbs(), 700.0);
//! assert_eq!(case.live_weight_lbs(), 730.0);
//! assert!(case.validate(216.0).is_ok());
//! ```

pub mod combinations;
pub mod discrete;
pub mod load_types;

pub use combinations::{
    find_combination, lrfd_dead_live, lrfd_dead_only, service_combination, standard_combinations,
    FactoredLoads, LoadCombination,
};
pub use discrete::{CrewLoad, CrewStation};
pub use load_types::LoadType;

use serde::{Deserialize, Serialize};

use crate::errors::{non_negative_input, positive_input, HullResult};

/// Seated paddler centre of gravity above the keel (in).
pub const DEFAULT_CREW_KG_IN: f64 = 10.0;

/// Nominal paddler weight used by [`LoadCase::paddlers`] (lbs).
pub const NOMINAL_PADDLER_LBS: f64 = 175.0;

/// One loading scenario.
///
/// ## JSON Example
///
/// ```json
/// {
///   "crew": { "type": "Midspan", "weight_lbs": 700.0 },
///   "crew_kg_in": 10.0,
///   "gear_weight_lbs": 0.0,
///   "gear_kg_in": 0.0,
///   "hull_weight_lbs": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Crew weight and placement
    pub crew: CrewLoad,

    /// Crew centre of gravity above the keel (in)
    #[serde(default = "default_crew_kg_in")]
    pub crew_kg_in: f64,

    /// Additional gear, treated as live load at midship (lbs)
    #[serde(default)]
    pub gear_weight_lbs: f64,

    /// Gear centre of gravity above the keel (in)
    #[serde(default)]
    pub gear_kg_in: f64,

    /// Measured hull weight (lbs). Replaces the geometric estimate for every
    /// downstream quantity when present.
    #[serde(default)]
    pub hull_weight_lbs: Option<f64>,
}

fn default_crew_kg_in() -> f64 {
    DEFAULT_CREW_KG_IN
}

impl Default for LoadCase {
    /// Four nominal paddlers at midship.
    fn default() -> Self {
        LoadCase::paddlers(4)
    }
}

impl LoadCase {
    /// Crew weight lumped at midship.
    pub fn midspan(crew_weight_lbs: f64) -> Self {
        LoadCase {
            crew: CrewLoad::Midspan {
                weight_lbs: crew_weight_lbs,
            },
            crew_kg_in: DEFAULT_CREW_KG_IN,
            gear_weight_lbs: 0.0,
            gear_kg_in: 0.0,
            hull_weight_lbs: None,
        }
    }

    /// `count` nominal paddlers lumped at midship.
    pub fn paddlers(count: u32) -> Self {
        LoadCase::midspan(f64::from(count) * NOMINAL_PADDLER_LBS)
    }

    /// Crew seated at individual stations.
    pub fn with_stations(stations: Vec<CrewStation>) -> Self {
        LoadCase {
            crew: CrewLoad::Stations { stations },
            ..LoadCase::midspan(0.0)
        }
    }

    pub fn with_crew_kg(mut self, crew_kg_in: f64) -> Self {
        self.crew_kg_in = crew_kg_in;
        self
    }

    pub fn with_gear(mut self, weight_lbs: f64, kg_in: f64) -> Self {
        self.gear_weight_lbs = weight_lbs;
        self.gear_kg_in = kg_in;
        self
    }

    pub fn with_hull_weight(mut self, hull_weight_lbs: f64) -> Self {
        self.hull_weight_lbs = Some(hull_weight_lbs);
        self
    }

    /// Total crew weight regardless of placement (lbs)
    pub fn crew_weight_lbs(&self) -> f64 {
        self.crew.total_weight_lbs()
    }

    /// Crew plus gear (lbs)
    pub fn live_weight_lbs(&self) -> f64 {
        self.crew_weight_lbs() + self.gear_weight_lbs
    }

    /// Check weights, heights and station positions against a hull of the
    /// given length.
    pub fn validate(&self, length_in: f64) -> HullResult<()> {
        self.crew.validate(length_in)?;
        non_negative_input("crew_kg_in", self.crew_kg_in)?;
        non_negative_input("gear_weight_lbs", self.gear_weight_lbs)?;
        non_negative_input("gear_kg_in", self.gear_kg_in)?;
        if let Some(w) = self.hull_weight_lbs {
            positive_input("hull_weight_lbs", w)?;
        }
        Ok(())
    }
}
