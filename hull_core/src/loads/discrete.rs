//! Crew placement
//!
//! Crew weight is applied to the hull girder either as one worst-case
//! point load at midship or as individual paddlers at their seat stations.

use serde::{Deserialize, Serialize};

use crate::errors::{non_negative_input, HullError, HullResult};

/// One paddler (or any concentrated live load) at a station along the hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrewStation {
    /// Distance from the bow (in)
    pub position_in: f64,
    /// Weight at this station (lbs)
    pub weight_lbs: f64,
}

impl CrewStation {
    pub fn new(position_in: f64, weight_lbs: f64) -> Self {
        CrewStation {
            position_in,
            weight_lbs,
        }
    }

    /// The station must lie on the hull and carry a non-negative weight.
    pub fn validate(&self, length_in: f64) -> HullResult<()> {
        non_negative_input("station.weight_lbs", self.weight_lbs)?;
        if !(self.position_in.is_finite() && (0.0..=length_in).contains(&self.position_in)) {
            return Err(HullError::invalid_input(
                "station.position_in",
                self.position_in.to_string(),
                format!("Station must lie between the bow (0) and the stern ({} in)", length_in),
            ));
        }
        Ok(())
    }
}

/// How crew weight is placed on the hull.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Midspan", "weight_lbs": 700.0 }
/// { "type": "Stations", "stations": [ { "position_in": 60.0, "weight_lbs": 175.0 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrewLoad {
    /// Total crew weight lumped at midship (worst case for bending)
    Midspan { weight_lbs: f64 },
    /// Individual paddlers at their seat positions
    Stations { stations: Vec<CrewStation> },
}

impl CrewLoad {
    /// Total crew weight (lbs)
    pub fn total_weight_lbs(&self) -> f64 {
        match self {
            CrewLoad::Midspan { weight_lbs } => *weight_lbs,
            CrewLoad::Stations { stations } => stations.iter().map(|s| s.weight_lbs).sum(),
        }
    }

    pub fn validate(&self, length_in: f64) -> HullResult<()> {
        match self {
            CrewLoad::Midspan { weight_lbs } => non_negative_input("crew_weight_lbs", *weight_lbs),
            CrewLoad::Stations { stations } => stations.iter().try_for_each(|s| s.validate(length_in)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_total() {
        let crew = CrewLoad::Stations {
            stations: vec![CrewStation::new(40.0, 175.0), CrewStation::new(170.0, 160.0)],
        };
        assert_eq!(crew.total_weight_lbs(), 335.0);
    }

    #[test]
    fn test_station_off_hull_rejected() {
        let crew = CrewLoad::Stations {
            stations: vec![CrewStation::new(230.0, 175.0)],
        };
        assert!(crew.validate(216.0).is_err());
        assert!(CrewStation::new(216.0, 175.0).validate(216.0).is_ok());
    }

    #[test]
    fn test_negative_crew_rejected() {
        assert!(CrewLoad::Midspan { weight_lbs: -1.0 }.validate(216.0).is_err());
        assert!(CrewLoad::Midspan { weight_lbs: 0.0 }.validate(216.0).is_ok());
    }

    #[test]
    fn test_tagged_json() {
        let crew: CrewLoad = serde_json::from_str(r#"{"type":"Midspan","weight_lbs":700}"#).unwrap();
        assert_eq!(crew.total_weight_lbs(), 700.0);
    }
}
