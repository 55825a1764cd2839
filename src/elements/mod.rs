//! Structural elements module

mod bar;
mod material;
mod node;
mod section;
mod support;

pub use bar::{Bar, BarReleases, LOCAL_DOF_LABELS};
pub use material::Material;
pub use node::Node;
pub use section::Section;
pub use support::{Dof, Restraint, Support};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the record in its arena
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

arena_id!(
    /// Index of a node, assigned in insertion order
    NodeId,
    "node"
);
arena_id!(
    /// Index of a bar, assigned in insertion order
    BarId,
    "bar"
);
arena_id!(
    /// Index of a section
    SectionId,
    "section"
);
arena_id!(
    /// Index of a material
    MaterialId,
    "material"
);
