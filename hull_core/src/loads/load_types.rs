//! Load type definitions
//!
//! A canoe hull carries two kinds of gravity load: its own shell (dead) and
//! whatever rides in it (live). Load factors are keyed by these types.

use serde::{Deserialize, Serialize};

/// Load categories acting on the hull girder.
///
/// # Example
/// ```
/// use hull_core::loads::LoadType;
///
/// assert_eq!(LoadType::Dead.code(), "D");
/// assert_eq!(LoadType::Live.description(), "Crew and gear");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadType {
    /// D - Hull self-weight (shell, gunwales, reinforcement)
    Dead,
    /// L - Paddlers and gear
    Live,
}

impl LoadType {
    /// All load types in standard order
    pub const ALL: [LoadType; 2] = [LoadType::Dead, LoadType::Live];

    /// Standard abbreviation used in combination equations
    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Dead => "D",
            LoadType::Live => "L",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            LoadType::Dead => "Hull self-weight",
            LoadType::Live => "Crew and gear",
        }
    }
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<_> = LoadType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["D", "L"]);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadType::Live).unwrap();
        assert_eq!(json, "\"Live\"");
    }
}
