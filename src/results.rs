//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::internal_forces::LocalPointLoad;
use crate::math::{DVec, Vec12};

/// Displacement results at a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Displacement in Z direction
    pub dz: f64,
    /// Rotation about X axis
    pub rx: f64,
    /// Rotation about Y axis
    pub ry: f64,
    /// Rotation about Z axis
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from array [DX, DY, DZ, RX, RY, RZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            dz: arr[2],
            rx: arr[3],
            ry: arr[4],
            rz: arr[5],
        }
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz]
    }

    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2) + self.dz.powi(2)).sqrt()
    }

    /// Get rotation magnitude
    pub fn rotation_magnitude(&self) -> f64 {
        (self.rx.powi(2) + self.ry.powi(2) + self.rz.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node, zero on unsupported DOFs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction force in Z direction
    pub fz: f64,
    /// Reaction moment about X axis
    pub mx: f64,
    /// Reaction moment about Y axis
    pub my: f64,
    /// Reaction moment about Z axis
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, FZ, MX, MY, MZ]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            fz: arr[2],
            mx: arr[3],
            my: arr[4],
            mz: arr[5],
        }
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2) + self.fz.powi(2)).sqrt()
    }

    /// Get total moment magnitude
    pub fn moment_magnitude(&self) -> f64 {
        (self.mx.powi(2) + self.my.powi(2) + self.mz.powi(2)).sqrt()
    }
}

/// Internal forces at one end of a bar, in diagram sign (tension and sagging positive)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BarForces {
    /// Axial force (positive = tension)
    pub axial: f64,
    /// Shear force in local y direction
    pub shear_y: f64,
    /// Shear force in local z direction
    pub shear_z: f64,
    /// Torsion
    pub torsion: f64,
    /// Bending moment about local y axis
    pub moment_y: f64,
    /// Bending moment about local z axis
    pub moment_z: f64,
}

impl BarForces {
    /// Section forces just inside the start node
    pub fn from_start(forces: &Vec12) -> Self {
        Self {
            axial: -forces[0],
            shear_y: forces[1],
            shear_z: forces[2],
            torsion: -forces[3],
            moment_y: forces[4],
            moment_z: -forces[5],
        }
    }

    /// Section forces just inside the end node
    pub fn from_end(forces: &Vec12) -> Self {
        Self {
            axial: forces[6],
            shear_y: -forces[7],
            shear_z: -forces[8],
            torsion: forces[9],
            moment_y: -forces[10],
            moment_z: forces[11],
        }
    }
}

/// Everything solved for one load case or combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseResults {
    /// Load case or combination name
    pub name: String,
    /// Global displacements, 6 per node
    pub displacements: DVec,
    /// Global reactions, 6 per node
    pub reactions: DVec,
    /// Local end forces per bar
    pub end_forces: Vec<Vec12>,
    /// Local point loads per bar, for the diagrams
    pub point_loads: Vec<Vec<LocalPointLoad>>,
    /// Bars carrying distributed loads
    pub distributed: Vec<bool>,
}

impl CaseResults {
    /// Zeroed results for `nodes` nodes and `bars` bars
    pub fn empty(name: &str, nodes: usize, bars: usize) -> Self {
        Self {
            name: name.to_string(),
            displacements: DVec::zeros(6 * nodes),
            reactions: DVec::zeros(6 * nodes),
            end_forces: vec![Vec12::zeros(); bars],
            point_loads: vec![Vec::new(); bars],
            distributed: vec![false; bars],
        }
    }

    /// Add `factor` times another result set
    pub fn add_scaled(&mut self, other: &CaseResults, factor: f64) {
        self.displacements.axpy(factor, &other.displacements, 1.0);
        self.reactions.axpy(factor, &other.reactions, 1.0);
        for (mine, theirs) in self.end_forces.iter_mut().zip(&other.end_forces) {
            *mine += theirs * factor;
        }
        for (mine, theirs) in self.point_loads.iter_mut().zip(&other.point_loads) {
            mine.extend(theirs.iter().map(|load| load.scaled(factor)));
        }
        for (mine, theirs) in self.distributed.iter_mut().zip(&other.distributed) {
            *mine |= *theirs;
        }
    }

    /// The 6 displacement components of a node
    pub fn node_displacement(&self, node: usize) -> NodeDisplacement {
        NodeDisplacement::from_array(six(&self.displacements, node))
    }

    /// The 6 reaction components of a node
    pub fn node_reactions(&self, node: usize) -> Reactions {
        Reactions::from_array(six(&self.reactions, node))
    }
}

fn six(v: &DVec, node: usize) -> [f64; 6] {
    let mut out = [0.0; 6];
    for (i, value) in out.iter_mut().enumerate() {
        *value = v[6 * node + i];
    }
    out
}

/// Results of one analysis run, cases first and then combinations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub cases: Vec<CaseResults>,
}

impl AnalysisResults {
    pub fn get(&self, name: &str) -> Option<&CaseResults> {
        self.cases.iter().find(|case| case.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|case| case.name.as_str())
    }
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Maximum displacement
    pub max_displacement: f64,
    /// Node with maximum displacement
    pub max_disp_node: String,
    /// Maximum reaction force
    pub max_reaction: f64,
    /// Node with maximum reaction
    pub max_reaction_node: String,
    /// Maximum bar axial force
    pub max_axial: f64,
    /// Bar with maximum axial
    pub max_axial_bar: String,
    /// Maximum bar end moment
    pub max_moment: f64,
    /// Bar with maximum end moment
    pub max_moment_bar: String,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of bars
    pub num_bars: usize,
    /// Total DOFs
    pub total_dofs: usize,
    /// DOFs not rigidly fixed
    pub free_dofs: usize,
}
