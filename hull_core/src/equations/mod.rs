//! # Hull Mechanics Equations
//!
//! Every closed-form relation the engine uses lives here, once. The
//! calculation modules compose these; nothing else re-derives them.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported span formulas (reactions, shear, moment)
//! - [`section`] - Rectangular and composite section properties
//! - [`naval`] - Displacement, waterplane, metacentric relations
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive sagging (tension at the keel)
//! - **Heights**: Positive upward from the keel

pub mod beam;
pub mod naval;
pub mod section;

pub use beam::{
    midspan_point_load_max_moment, point_load_moment, point_load_reactions, point_load_shear,
    uniform_load_max_moment, uniform_load_moment, uniform_load_reactions, uniform_load_shear,
};
pub use naval::{
    center_of_buoyancy, deck_edge_immersion_angle, displacement_volume, mean_draft, metacentric_height,
    metacentric_radius, wall_sided_righting_arm, waterplane_area, waterplane_inertia,
    weighted_center_of_gravity,
};
pub use section::{
    composite_section, rectangular_area, rectangular_moment_of_inertia, rectangular_section_modulus,
    thin_shell_components, thin_shell_section, RectComponent, SectionProperties,
};
