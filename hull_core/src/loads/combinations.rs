//! Load combinations
//!
//! Factoring is a separate, explicit step. Analysis functions always take
//! the loads they are given at face value; a caller that wants code-style
//! factored demand scales the service loads through a [`LoadCombination`]
//! first (or uses the factored analysis entry point, which does exactly
//! that). No combination is ever applied implicitly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::load_types::LoadType;
use crate::errors::{non_negative_input, HullResult};

/// A load combination with a factor for each load type.
///
/// # Example
/// ```
/// use hull_core::loads::{lrfd_dead_live, LoadType};
///
/// let combo = lrfd_dead_live();
/// let factored = combo.factor_loads(245.0, 700.0);
/// assert!((factored.dead_lbs - 294.0).abs() < 1e-9);
/// assert!((factored.live_lbs - 1120.0).abs() < 1e-9);
/// assert_eq!(combo.get_factor(LoadType::Live), 1.6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Combination identifier (e.g., "LRFD-2")
    pub name: String,

    /// Human-readable equation for display (e.g., "1.2D + 1.6L")
    pub equation: String,

    /// Load factors keyed by load type
    pub factors: HashMap<LoadType, f64>,
}

impl LoadCombination {
    /// Create a new load combination with no factors
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        LoadCombination {
            name: name.into(),
            equation: equation.into(),
            factors: HashMap::new(),
        }
    }

    /// Add a load factor (builder pattern)
    pub fn with_factor(mut self, load_type: LoadType, factor: f64) -> Self {
        self.factors.insert(load_type, factor);
        self
    }

    /// Get the factor for a specific load type (0.0 if not in combination)
    pub fn get_factor(&self, load_type: LoadType) -> f64 {
        self.factors.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Scale one load by its type's factor.
    pub fn apply(&self, load_type: LoadType, value: f64) -> f64 {
        value * self.get_factor(load_type)
    }

    /// Factor a dead/live pair.
    pub fn factor_loads(&self, dead_lbs: f64, live_lbs: f64) -> FactoredLoads {
        FactoredLoads {
            combination: self.name.clone(),
            equation: self.equation.clone(),
            dead_lbs: self.apply(LoadType::Dead, dead_lbs),
            live_lbs: self.apply(LoadType::Live, live_lbs),
        }
    }

    /// Factors must be finite and non-negative; a negative gravity factor
    /// would reverse the load.
    pub fn validate(&self) -> HullResult<()> {
        for (load_type, factor) in &self.factors {
            non_negative_input(&format!("factor_{}", load_type.code()), *factor)?;
        }
        Ok(())
    }
}

/// Loads after factoring, kept for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoredLoads {
    pub combination: String,
    pub equation: String,
    /// Factored hull self-weight (lbs)
    pub dead_lbs: f64,
    /// Factored crew + gear (lbs)
    pub live_lbs: f64,
}

/// Unfactored service loads: D + L
pub fn service_combination() -> LoadCombination {
    LoadCombination::new("SERVICE", "D + L")
        .with_factor(LoadType::Dead, 1.0)
        .with_factor(LoadType::Live, 1.0)
}

/// 1.4D
pub fn lrfd_dead_only() -> LoadCombination {
    LoadCombination::new("LRFD-1", "1.4D").with_factor(LoadType::Dead, 1.4)
}

/// 1.2D + 1.6L
pub fn lrfd_dead_live() -> LoadCombination {
    LoadCombination::new("LRFD-2", "1.2D + 1.6L")
        .with_factor(LoadType::Dead, 1.2)
        .with_factor(LoadType::Live, 1.6)
}

/// Every predefined combination.
pub fn standard_combinations() -> Vec<LoadCombination> {
    vec![service_combination(), lrfd_dead_only(), lrfd_dead_live()]
}

/// Look up a predefined combination by name (case-insensitive).
pub fn find_combination(name: &str) -> Option<LoadCombination> {
    standard_combinations()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}
