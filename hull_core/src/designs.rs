//! # Reference Designs
//!
//! The three competition hull candidates, kept as a read-only catalog for
//! side-by-side comparison and regression checks. All share the same mix
//! (60 pcf, 1500 psi modulus of rupture) and a four-paddler crew.
//!
//! ```rust
//! use hull_core::designs::find_design;
//!
//! let c = find_design("c").unwrap();
//! assert_eq!(c.geometry.length_in(), 216.0);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::calculations::analysis::AnalysisInput;
use crate::geometry::HullGeometry;
use crate::loads::LoadCase;
use crate::materials::MaterialSpec;

/// A named hull candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceDesign {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub geometry: HullGeometry,
    pub material: MaterialSpec,
    pub load_case: LoadCase,
}

impl ReferenceDesign {
    /// Default-settings analysis request for this design.
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput::new(self.name, self.geometry, self.material, self.load_case.clone())
    }
}

static DESIGNS: Lazy<Vec<ReferenceDesign>> = Lazy::new(|| {
    let material = MaterialSpec::new(60.0, 1500.0);
    [
        ("A", "Design A", "Optimal: lightest hull meeting every requirement", 192.0, 32.0, 17.0),
        ("B", "Design B", "Conservative: extra margin on every requirement", 196.0, 34.0, 18.0),
        ("C", "Design C", "Traditional: standard proportions, easier to build", 216.0, 36.0, 18.0),
    ]
    .into_iter()
    .filter_map(|(id, name, description, length, beam, depth)| {
        HullGeometry::new(length, beam, depth, 0.5)
            .ok()
            .map(|geometry| ReferenceDesign {
                id,
                name,
                description,
                geometry,
                material,
                load_case: LoadCase::paddlers(4),
            })
    })
    .collect()
});

/// All reference designs, in id order.
pub fn reference_designs() -> &'static [ReferenceDesign] {
    &DESIGNS
}

/// Look up a design by id (case-insensitive).
pub fn find_design(id: &str) -> Option<&'static ReferenceDesign> {
    DESIGNS.iter().find(|d| d.id.eq_ignore_ascii_case(id))
}
