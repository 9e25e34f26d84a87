//! Hull Girder Analysis
//!
//! The hull is treated as a simply-supported span carrying its own weight as
//! a uniform load plus any number of point loads (paddlers, gear). Loads are
//! combined by superposition.
//!
//! The moment diagram of uniform + point loads is piecewise parabolic, so
//! its maximum lies either at a point load or where the shear crosses zero
//! between two point loads. [`HullGirder::max_moment`] evaluates exactly
//! those candidates instead of sampling the span.
//!
//! ## Sign Convention
//! - Positive moment: sagging (tension at the keel)
//! - Positive shear: bow side up
//!
//! ## Example
//! ```rust
//! use hull_core::calculations::girder::{GirderLoad, HullGirder};
//!
//! // 18 ft hull, 245 lb shell, two 175 lb paddlers
//! let girder = HullGirder::new(18.0)
//!     .with_load(GirderLoad::uniform(245.0 / 18.0))
//!     .with_load(GirderLoad::point(175.0, 5.0))
//!     .with_load(GirderLoad::point(175.0, 13.0));
//!
//! let (m, x) = girder.max_moment();
//! assert!(m > 0.0);
//! assert!(x > 5.0 && x < 13.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    point_load_moment, point_load_reactions, point_load_shear, uniform_load_moment, uniform_load_reactions,
    uniform_load_shear,
};

/// A single load on the girder. Positions are measured from the bow (ft).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GirderLoad {
    /// Point load (lbs) at position (ft from bow)
    Point { magnitude_lbs: f64, position_ft: f64 },

    /// Uniform load (lb/ft) over the whole length
    Uniform { magnitude_plf: f64 },
}

impl GirderLoad {
    pub fn point(magnitude_lbs: f64, position_ft: f64) -> Self {
        GirderLoad::Point {
            magnitude_lbs,
            position_ft,
        }
    }

    pub fn uniform(magnitude_plf: f64) -> Self {
        GirderLoad::Uniform { magnitude_plf }
    }

    /// Bow reaction (lbs)
    pub fn reaction_bow(&self, span_ft: f64) -> f64 {
        match *self {
            GirderLoad::Point {
                magnitude_lbs,
                position_ft,
            } => point_load_reactions(magnitude_lbs, position_ft, span_ft).0,
            GirderLoad::Uniform { magnitude_plf } => uniform_load_reactions(magnitude_plf, span_ft).0,
        }
    }

    /// Stern reaction (lbs)
    pub fn reaction_stern(&self, span_ft: f64) -> f64 {
        match *self {
            GirderLoad::Point {
                magnitude_lbs,
                position_ft,
            } => point_load_reactions(magnitude_lbs, position_ft, span_ft).1,
            GirderLoad::Uniform { magnitude_plf } => uniform_load_reactions(magnitude_plf, span_ft).1,
        }
    }

    pub fn shear_at(&self, x_ft: f64, span_ft: f64) -> f64 {
        match *self {
            GirderLoad::Point {
                magnitude_lbs,
                position_ft,
            } => point_load_shear(magnitude_lbs, position_ft, span_ft, x_ft),
            GirderLoad::Uniform { magnitude_plf } => uniform_load_shear(magnitude_plf, span_ft, x_ft),
        }
    }

    /// Moment at x (ft-lb)
    pub fn moment_at(&self, x_ft: f64, span_ft: f64) -> f64 {
        match *self {
            GirderLoad::Point {
                magnitude_lbs,
                position_ft,
            } => point_load_moment(magnitude_lbs, position_ft, span_ft, x_ft),
            GirderLoad::Uniform { magnitude_plf } => uniform_load_moment(magnitude_plf, span_ft, x_ft),
        }
    }

    fn total_lbs(&self, span_ft: f64) -> f64 {
        match *self {
            GirderLoad::Point { magnitude_lbs, .. } => magnitude_lbs,
            GirderLoad::Uniform { magnitude_plf } => magnitude_plf * span_ft,
        }
    }
}

/// Simply-supported hull girder with superposed loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullGirder {
    pub span_ft: f64,
    pub loads: Vec<GirderLoad>,
}

impl HullGirder {
    pub fn new(span_ft: f64) -> Self {
        HullGirder {
            span_ft,
            loads: Vec::new(),
        }
    }

    pub fn add_load(&mut self, load: GirderLoad) {
        self.loads.push(load);
    }

    pub fn with_load(mut self, load: GirderLoad) -> Self {
        self.add_load(load);
        self
    }

    pub fn total_load_lbs(&self) -> f64 {
        self.loads.iter().map(|l| l.total_lbs(self.span_ft)).sum()
    }

    pub fn reaction_bow(&self) -> f64 {
        self.loads.iter().map(|l| l.reaction_bow(self.span_ft)).sum()
    }

    pub fn reaction_stern(&self) -> f64 {
        self.loads.iter().map(|l| l.reaction_stern(self.span_ft)).sum()
    }

    pub fn shear_at(&self, x_ft: f64) -> f64 {
        self.loads.iter().map(|l| l.shear_at(x_ft, self.span_ft)).sum()
    }

    pub fn moment_at(&self, x_ft: f64) -> f64 {
        self.loads.iter().map(|l| l.moment_at(x_ft, self.span_ft)).sum()
    }

    fn uniform_plf(&self) -> f64 {
        self.loads
            .iter()
            .map(|l| match *l {
                GirderLoad::Uniform { magnitude_plf } => magnitude_plf,
                GirderLoad::Point { .. } => 0.0,
            })
            .sum()
    }

    /// Positions where the maximum moment can occur: supports, point
    /// loads, and zero-shear points inside each unloaded segment.
    fn critical_positions(&self) -> Vec<f64> {
        let mut points: Vec<(f64, f64)> = self
            .loads
            .iter()
            .filter_map(|l| match *l {
                GirderLoad::Point {
                    magnitude_lbs,
                    position_ft,
                } if (0.0..=self.span_ft).contains(&position_ft) => Some((position_ft, magnitude_lbs)),
                _ => None,
            })
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut positions = vec![0.0, self.span_ft];
        positions.extend(points.iter().map(|(x, _)| *x));

        let w = self.uniform_plf();
        if w > 0.0 {
            // Between consecutive point loads V(x) = R1 - ΣP_left - w·x
            let mut shear_base = self.reaction_bow();
            let mut start = 0.0;
            for (x, p) in points.iter().copied().chain(std::iter::once((self.span_ft, 0.0))) {
                let zero_shear = shear_base / w;
                if zero_shear > start && zero_shear < x {
                    positions.push(zero_shear);
                }
                shear_base -= p;
                start = x;
            }
        }
        positions
    }

    /// Peak sagging moment (ft-lb) and its position from the bow (ft).
    ///
    /// A span with no length or no loads returns `(0.0, 0.0)`.
    pub fn max_moment(&self) -> (f64, f64) {
        if self.span_ft <= 0.0 {
            return (0.0, 0.0);
        }
        self.critical_positions()
            .into_iter()
            .map(|x| (self.moment_at(x), x))
            .fold((0.0, 0.0), |best, cand| if cand.0 > best.0 { cand } else { best })
    }

    /// Moment diagram as `(x_ft, moment_ft_lb)` pairs at `points` evenly
    /// spaced stations (minimum 2) from bow to stern.
    pub fn moment_diagram(&self, points: usize) -> Vec<(f64, f64)> {
        let n = points.max(2);
        (0..n)
            .map(|i| {
                let x = self.span_ft * i as f64 / (n - 1) as f64;
                (x, self.moment_at(x))
            })
            .collect()
    }
}
