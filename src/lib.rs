//! Frame Solver - linear static analysis of 3D frames and trusses
//!
//! A direct stiffness solver for structures made of prismatic bars:
//! - Euler-Bernoulli frame elements with axial, torsional and biaxial bending stiffness
//! - End releases (hinges) by static condensation
//! - Rigid and elastic supports
//! - Nodal, concentrated and linearly distributed bar loads, in local or global axes
//! - Load cases and factored load combinations
//! - Shear, moment, axial and torsion diagrams from point loads
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! let steel = model.add_material("Steel", Material::new(200e9, 77e9, 0.3, 7850.0)).unwrap();
//! let section = model.add_section("W12x26", Section::new(7.65e-3, 0.3e-6, 17.3e-6, 204e-6)).unwrap();
//!
//! let n1 = model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
//! let n2 = model.add_node("N2", Node::new(10.0, 0.0, 0.0)).unwrap();
//! let beam = model.add_bar("M1", Bar::new(n1, n2, section, steel)).unwrap();
//!
//! model.add_support(n1, Support::fixed()).unwrap();
//! model
//!     .add_load_case(LoadCase::new("Dead").with_node_load(n2, NodeLoad::force("P", 0.0, -10000.0, 0.0)))
//!     .unwrap();
//!
//! model.analyze().unwrap();
//!
//! let tip = model.node_displacement(n2, "Dead").unwrap();
//! assert!(tip.dy < 0.0);
//! let root_moment = model.moment_z(beam, 0.0, "Dead").unwrap();
//! assert!(root_moment.right < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod fixed_end;
pub mod internal_forces;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{AnalysisOptions, SupportMethod};
    pub use crate::elements::{
        Bar, BarId, BarReleases, Dof, Material, MaterialId, Node, NodeId, Restraint, Section,
        SectionId, Support,
    };
    pub use crate::error::{ErrorCategory, FrameError, FrameResult};
    pub use crate::internal_forces::{BarDiagram, LocalPointLoad, Quantity, SideValues};
    pub use crate::loads::{
        BarDistributedLoad, BarPointLoad, CoordinateSystem, LoadCase, LoadCombination,
        LoadComponent, NodeLoad,
    };
    pub use crate::model::FrameModel;
    pub use crate::results::{BarForces, NodeDisplacement, Reactions};
}
