//! Node loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A load applied directly to a node, in global axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Label of the load within its case
    pub name: String,
    /// Force in X direction (N)
    pub fx: f64,
    /// Force in Y direction (N)
    pub fy: f64,
    /// Force in Z direction (N)
    pub fz: f64,
    /// Moment about X axis (N·m)
    pub mx: f64,
    /// Moment about Y axis (N·m)
    pub my: f64,
    /// Moment about Z axis (N·m)
    pub mz: f64,
}

impl NodeLoad {
    /// Create a new node load with all components
    pub fn new(name: &str, fx: f64, fy: f64, fz: f64, mx: f64, my: f64, mz: f64) -> Self {
        Self {
            name: name.to_string(),
            fx,
            fy,
            fz,
            mx,
            my,
            mz,
        }
    }

    /// Create from an array [FX, FY, FZ, MX, MY, MZ]
    pub fn from_array(name: &str, actions: [f64; 6]) -> Self {
        let [fx, fy, fz, mx, my, mz] = actions;
        Self::new(name, fx, fy, fz, mx, my, mz)
    }

    /// Create a force-only node load
    pub fn force(name: &str, fx: f64, fy: f64, fz: f64) -> Self {
        Self::new(name, fx, fy, fz, 0.0, 0.0, 0.0)
    }

    /// Create a moment-only node load
    pub fn moment(name: &str, mx: f64, my: f64, mz: f64) -> Self {
        Self::new(name, 0.0, 0.0, 0.0, mx, my, mz)
    }

    /// Get the load as an array [FX, FY, FZ, MX, MY, MZ]
    pub fn as_array(&self) -> [f64; 6] {
        [self.fx, self.fy, self.fz, self.mx, self.my, self.mz]
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_array(&self.name, self.as_array().map(|v| v * factor))
    }
}
