//! Global stiffness and load vector assembly

use std::collections::HashMap;

use log::debug;

use super::dof::{node_dofs, scatter_vector};
use super::StructureView;
use crate::elements::BarId;
use crate::error::{FrameError, FrameResult};
use crate::fixed_end::{distributed_load_reactions, local_actions, point_load_reactions};
use crate::internal_forces::LocalPointLoad;
use crate::loads::{LoadCase, LoadRecord};
use crate::math::{compute_element_matrices, DVec, ElementMatrices, Mat, Vec12};

#[derive(Debug, Clone)]
struct CachedElement {
    revision: u64,
    matrices: ElementMatrices,
}

/// Right-hand side of one load case plus what the bars need afterwards
#[derive(Debug, Clone)]
pub struct CaseLoads {
    /// Global load vector: nodal loads plus equivalent loads of bar loads
    pub vector: DVec,
    /// Condensed fixed-end reactions per bar, local axes
    pub fixed_end: Vec<Vec12>,
    /// Point loads per bar in local axes
    pub point_loads: Vec<Vec<LocalPointLoad>>,
    /// Bars carrying distributed loads
    pub distributed: Vec<bool>,
}

/// Builds global matrices, memoizing element matrices per bar revision
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    cache: HashMap<BarId, CachedElement>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the element cache up to date with the structure
    pub fn prepare(&mut self, view: &StructureView<'_>) -> FrameResult<()> {
        self.cache.retain(|id, _| id.index() < view.bars.len());
        for (i, bar) in view.bars.iter().enumerate() {
            let id = BarId(i);
            let revision = view.revisions[i];
            if self.cache.get(&id).is_some_and(|cached| cached.revision == revision) {
                continue;
            }

            debug!("element cache miss for bar '{}' (revision {revision})", view.bar_names[i]);
            let start = &view.nodes[bar.start.index()];
            let end = &view.nodes[bar.end.index()];
            let section = &view.sections[bar.section.index()];
            let material = &view.materials[bar.material.index()];
            let matrices = compute_element_matrices(start, end, section, material, bar)?;
            self.cache.insert(id, CachedElement { revision, matrices });
        }
        Ok(())
    }

    /// Matrices of one bar, once [`Assembler::prepare`] has run
    pub fn element(&self, bar: BarId) -> FrameResult<&ElementMatrices> {
        self.cache
            .get(&bar)
            .map(|cached| &cached.matrices)
            .ok_or_else(|| FrameError::BarNotFound(bar.to_string()))
    }

    /// Number of cached element matrices
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Sum of every bar's global stiffness, scattered by DOF
    pub fn global_stiffness(&self, view: &StructureView<'_>) -> FrameResult<Mat> {
        let n = view.dof_count();
        let mut k = Mat::zeros(n, n);
        for (i, bar) in view.bars.iter().enumerate() {
            let klg = &self.element(BarId(i))?.klg;
            let scatter = scatter_vector(bar);
            for (a, &row) in scatter.iter().enumerate() {
                for (b, &col) in scatter.iter().enumerate() {
                    k[(row, col)] += klg[(a, b)];
                }
            }
        }
        Ok(k)
    }

    /// Load vector and per-bar fixed-end reactions of one load case
    pub fn case_loads(&self, view: &StructureView<'_>, case: &LoadCase) -> FrameResult<CaseLoads> {
        let bars = view.bars.len();
        let mut vector = DVec::zeros(view.dof_count());
        let mut fixed_end = vec![Vec12::zeros(); bars];
        let mut point_loads = vec![Vec::new(); bars];
        let mut distributed = vec![false; bars];

        for record in &case.loads {
            match record {
                LoadRecord::Nodal { node, load } => {
                    for (dof, value) in node_dofs(*node).zip(load.as_array()) {
                        vector[dof] += value;
                    }
                }
                LoadRecord::BarPoint { bar, load } => {
                    let element = self.element(*bar)?;
                    let rotation = element.rotation_block();
                    fixed_end[bar.index()] += point_load_reactions(element.length, &rotation, load)?;
                    let actions = local_actions(&rotation, load.system, &load.actions);
                    point_loads[bar.index()].push(LocalPointLoad::new(load.position, actions));
                }
                LoadRecord::BarDistributed { bar, load } => {
                    let element = self.element(*bar)?;
                    let rotation = element.rotation_block();
                    fixed_end[bar.index()] += distributed_load_reactions(element.length, &rotation, load)?;
                    distributed[bar.index()] = true;
                }
            }
        }

        for (i, bar) in view.bars.iter().enumerate() {
            if fixed_end[i].iter().all(|v| *v == 0.0) {
                continue;
            }
            let element = self.element(BarId(i))?;
            fixed_end[i] = element.condense_actions(&fixed_end[i]);
            let equivalent = -(element.r.transpose() * fixed_end[i]);
            for (a, dof) in scatter_vector(bar).into_iter().enumerate() {
                vector[dof] += equivalent[a];
            }
        }

        Ok(CaseLoads {
            vector,
            fixed_end,
            point_loads,
            distributed,
        })
    }
}
