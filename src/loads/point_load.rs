//! Point loads on bars

use serde::{Deserialize, Serialize};

/// One force or moment component, used both for local bar axes and global axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LoadComponent {
    /// Force along x (axial when local)
    Fx,
    /// Force along y
    Fy,
    /// Force along z
    Fz,
    /// Moment about x (torsion when local)
    Mx,
    /// Moment about y
    My,
    /// Moment about z
    Mz,
}

impl LoadComponent {
    pub const ALL: [LoadComponent; 6] = [
        LoadComponent::Fx,
        LoadComponent::Fy,
        LoadComponent::Fz,
        LoadComponent::Mx,
        LoadComponent::My,
        LoadComponent::Mz,
    ];

    /// Offset within a 6-component action [FX, FY, FZ, MX, MY, MZ]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axis 0, 1 or 2 the component acts along or about
    pub fn axis(self) -> usize {
        self.index() % 3
    }

    pub fn is_force(self) -> bool {
        self.index() < 3
    }

    /// Component of the same kind (force or moment) along another axis
    pub(crate) fn with_axis(self, axis: usize) -> LoadComponent {
        let base = if self.is_force() { 0 } else { 3 };
        LoadComponent::ALL[base + axis]
    }
}

/// Axes a bar load is expressed in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Bar local axes (x along the bar)
    #[default]
    Local,
    /// Global structure axes
    Global,
}

/// A concentrated force/moment on a bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPointLoad {
    /// Label of the load within its case
    pub name: String,
    /// Distance from the start node
    pub position: f64,
    /// Axes of the components below
    pub system: CoordinateSystem,
    /// Components [FX, FY, FZ, MX, MY, MZ]
    pub actions: [f64; 6],
}

impl BarPointLoad {
    /// Create a new point load in local axes
    pub fn new(name: &str, position: f64, actions: [f64; 6]) -> Self {
        Self {
            name: name.to_string(),
            position,
            system: CoordinateSystem::Local,
            actions,
        }
    }

    /// Single component point load in local axes
    pub fn component(name: &str, position: f64, component: LoadComponent, value: f64) -> Self {
        let mut actions = [0.0; 6];
        actions[component.index()] = value;
        Self::new(name, position, actions)
    }

    /// Express the components in global axes instead
    pub fn in_global(mut self) -> Self {
        self.system = CoordinateSystem::Global;
        self
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            actions: self.actions.map(|v| v * factor),
            ..self.clone()
        }
    }
}
