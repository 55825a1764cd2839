//! Load cases

use serde::{Deserialize, Serialize};

use super::{BarDistributedLoad, BarPointLoad, NodeLoad};
use crate::elements::{BarId, NodeId};

/// One load of a load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadRecord {
    Nodal { node: NodeId, load: NodeLoad },
    BarPoint { bar: BarId, load: BarPointLoad },
    BarDistributed { bar: BarId, load: BarDistributedLoad },
}

impl LoadRecord {
    /// Label of the load
    pub fn name(&self) -> &str {
        match self {
            LoadRecord::Nodal { load, .. } => &load.name,
            LoadRecord::BarPoint { load, .. } => &load.name,
            LoadRecord::BarDistributed { load, .. } => &load.name,
        }
    }

    /// Bar the load acts on, if it is a bar load
    pub fn bar(&self) -> Option<BarId> {
        match self {
            LoadRecord::Nodal { .. } => None,
            LoadRecord::BarPoint { bar, .. } | LoadRecord::BarDistributed { bar, .. } => Some(*bar),
        }
    }
}

/// A named, self-contained set of loads solved as one right-hand side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Name of the load case
    pub name: String,
    /// Description of the load case
    pub description: Option<String>,
    /// Loads in declaration order
    pub loads: Vec<LoadRecord>,
}

impl LoadCase {
    /// Create a new, empty load case
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            loads: Vec::new(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Add a nodal load
    pub fn with_node_load(mut self, node: NodeId, load: NodeLoad) -> Self {
        self.loads.push(LoadRecord::Nodal { node, load });
        self
    }

    /// Add a concentrated load on a bar
    pub fn with_point_load(mut self, bar: BarId, load: BarPointLoad) -> Self {
        self.loads.push(LoadRecord::BarPoint { bar, load });
        self
    }

    /// Add a distributed load on a bar
    pub fn with_distributed_load(mut self, bar: BarId, load: BarDistributedLoad) -> Self {
        self.loads.push(LoadRecord::BarDistributed { bar, load });
        self
    }

    /// Point loads acting on one bar
    pub fn point_loads_on(&self, bar: BarId) -> impl Iterator<Item = &BarPointLoad> {
        self.loads.iter().filter_map(move |record| match record {
            LoadRecord::BarPoint { bar: b, load } if *b == bar => Some(load),
            _ => None,
        })
    }

    /// True when any distributed load acts on the bar
    pub fn has_distributed_load_on(&self, bar: BarId) -> bool {
        self.loads
            .iter()
            .any(|record| matches!(record, LoadRecord::BarDistributed { bar: b, .. } if *b == bar))
    }

    /// Check if the case holds no loads at all
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
