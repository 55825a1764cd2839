//! Bar element - 3D frame member (beam, column or brace)

use serde::{Deserialize, Serialize};

use super::{MaterialId, NodeId, SectionId};

/// Local DOF labels in the order used by releases and end force vectors
pub const LOCAL_DOF_LABELS: [&str; 12] = [
    "Dxi", "Dyi", "Dzi", "Rxi", "Ryi", "Rzi", "Dxj", "Dyj", "Dzj", "Rxj", "Ryj", "Rzj",
];

/// End releases for a bar (hinges on individual local DOFs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarReleases {
    /// Start node releases [DX, DY, DZ, RX, RY, RZ]
    pub start: [bool; 6],
    /// End node releases [DX, DY, DZ, RX, RY, RZ]
    pub end: [bool; 6],
}

impl BarReleases {
    /// Create releases with no end releases
    pub fn none() -> Self {
        Self::default()
    }

    /// Bending hinge at the start node
    pub fn pin_start() -> Self {
        Self {
            start: [false, false, false, false, true, true],
            end: [false; 6],
        }
    }

    /// Bending hinge at the end node
    pub fn pin_end() -> Self {
        Self {
            start: [false; 6],
            end: [false, false, false, false, true, true],
        }
    }

    /// Bending hinges at both ends; torsion stays connected so the bar keeps its twist stiffness
    pub fn pin_both() -> Self {
        Self {
            start: [false, false, false, false, true, true],
            end: [false, false, false, false, true, true],
        }
    }

    /// Build releases from the 12 local DOF flags
    pub fn from_array(flags: [bool; 12]) -> Self {
        let mut releases = Self::none();
        releases.start.copy_from_slice(&flags[0..6]);
        releases.end.copy_from_slice(&flags[6..12]);
        releases
    }

    /// Get combined releases as 12-element array
    pub fn as_array(&self) -> [bool; 12] {
        let mut arr = [false; 12];
        arr[0..6].copy_from_slice(&self.start);
        arr[6..12].copy_from_slice(&self.end);
        arr
    }

    /// Released local DOF indices in elimination order
    pub fn released_dofs(&self) -> impl Iterator<Item = usize> {
        self.as_array()
            .into_iter()
            .enumerate()
            .filter_map(|(i, released)| released.then_some(i))
    }

    /// True when at least one DOF is released
    pub fn any(&self) -> bool {
        self.start.iter().chain(self.end.iter()).any(|&r| r)
    }
}

/// A 3D frame bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Start node
    pub start: NodeId,
    /// End node
    pub end: NodeId,
    /// Cross-section
    pub section: SectionId,
    /// Material
    pub material: MaterialId,
    /// Roll of the local axes about the bar axis (radians)
    pub rotation: f64,
    /// End releases
    pub releases: BarReleases,
}

impl Bar {
    /// Create a new bar with no roll and no releases
    pub fn new(start: NodeId, end: NodeId, section: SectionId, material: MaterialId) -> Self {
        Self {
            start,
            end,
            section,
            material,
            rotation: 0.0,
            releases: BarReleases::none(),
        }
    }

    /// Set the roll about the longitudinal axis
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the end releases
    pub fn with_releases(mut self, releases: BarReleases) -> Self {
        self.releases = releases;
        self
    }
}
