//! Global DOF numbering

use std::ops::Range;

use crate::elements::{Bar, Dof, NodeId};
use crate::math::{DVec, Vec12};

pub const DOFS_PER_NODE: usize = 6;

/// Global indices of a node's 6 DOFs, in node insertion order
pub fn node_dofs(node: NodeId) -> Range<usize> {
    let first = node.index() * DOFS_PER_NODE;
    first..first + DOFS_PER_NODE
}

/// Global indices of a bar's 12 local DOFs: start node then end node
pub fn scatter_vector(bar: &Bar) -> [usize; 12] {
    let mut scatter = [0; 12];
    for (slot, dof) in scatter.iter_mut().zip(node_dofs(bar.start).chain(node_dofs(bar.end))) {
        *slot = dof;
    }
    scatter
}

/// Pick a bar's 12 entries out of a global vector
pub fn gather(global: &DVec, scatter: &[usize; 12]) -> Vec12 {
    Vec12::from_fn(|i, _| global[scatter[i]])
}

/// Node index and DOF of a global index
pub fn locate(global: usize) -> (usize, Dof) {
    let dof = Dof::from_index(global % DOFS_PER_NODE).unwrap_or(Dof::Dx);
    (global / DOFS_PER_NODE, dof)
}
