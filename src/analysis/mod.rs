//! Analysis options and the linear static solve

mod assembler;
mod dof;
mod solver;

pub use assembler::{Assembler, CaseLoads};
pub use dof::{gather, locate, node_dofs, scatter_vector, DOFS_PER_NODE};
pub use solver::{ConstrainedSystem, SingularDof};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::elements::{Bar, BarId, Material, Node, Restraint, Section, Support};
use crate::error::{FrameError, FrameResult};
use crate::loads::LoadCase;
use crate::results::CaseResults;

/// How rigid supports enter the constrained system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupportMethod {
    /// Add a very large stiffness on the diagonal of each fixed DOF
    #[default]
    Penalty,
    /// Remove fixed DOFs from the system before factorizing
    Elimination,
}

/// Options for structural analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Treatment of fixed DOFs
    pub support_method: SupportMethod,
    /// Diagonal stiffness added to fixed DOFs by the penalty method
    pub penalty: f64,
    /// Relative pivot size below which the structure is reported unstable
    pub pivot_tolerance: f64,
    /// Check for model stability
    pub check_stability: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            support_method: SupportMethod::Penalty,
            penalty: Self::DEFAULT_PENALTY,
            pivot_tolerance: 1e-10,
            check_stability: true,
        }
    }
}

impl AnalysisOptions {
    /// Penalty stiffness for fixed DOFs. Large enough that support displacements
    /// vanish to working precision for any realistic member stiffness.
    pub const DEFAULT_PENALTY: f64 = 1e25;

    /// Create options for the default penalty treatment
    pub fn linear() -> Self {
        Self::default()
    }

    /// Eliminate fixed DOFs exactly
    pub fn with_elimination(mut self) -> Self {
        self.support_method = SupportMethod::Elimination;
        self
    }

    /// Set the penalty stiffness
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the relative pivot tolerance
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    /// Skip the pivot check; exactly singular systems are still reported
    pub fn without_stability_check(mut self) -> Self {
        self.check_stability = false;
        self
    }

    pub(crate) fn validate(&self) -> FrameResult<()> {
        if !(self.penalty.is_finite() && self.penalty > 0.0) {
            return Err(FrameError::InvalidInput(format!(
                "penalty must be positive and finite, got {}",
                self.penalty
            )));
        }
        if !(self.pivot_tolerance.is_finite() && self.pivot_tolerance >= 0.0) {
            return Err(FrameError::InvalidInput(format!(
                "pivot tolerance must be non-negative, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

/// Borrowed structure data the assembler and solver work on
///
/// Every slice is indexed by the matching arena id. `supports` and `node_names`
/// run parallel to `nodes`; `revisions` and `bar_names` run parallel to `bars`.
#[derive(Debug, Clone, Copy)]
pub struct StructureView<'a> {
    pub node_names: &'a [String],
    pub bar_names: &'a [String],
    pub nodes: &'a [Node],
    pub bars: &'a [Bar],
    pub revisions: &'a [u64],
    pub sections: &'a [Section],
    pub materials: &'a [Material],
    pub supports: &'a [Option<Support>],
}

impl StructureView<'_> {
    pub fn dof_count(&self) -> usize {
        self.nodes.len() * DOFS_PER_NODE
    }

    /// One restraint per global DOF
    pub fn restraints(&self) -> Vec<Restraint> {
        self.supports
            .iter()
            .flat_map(|support| support.unwrap_or_default().restraints)
            .collect()
    }

    fn unstable(&self, case: &str, SingularDof(dof): SingularDof) -> FrameError {
        let (node, dof) = locate(dof);
        FrameError::Unstable {
            case: case.to_string(),
            node: self.node_names.get(node).cloned().unwrap_or_default(),
            dof: dof.to_string(),
        }
    }
}

/// Solve every load case against one factorization of the constrained stiffness
///
/// Returns one [`CaseResults`] per case, in the order given.
pub fn solve_cases(
    view: &StructureView<'_>,
    assembler: &mut Assembler,
    cases: &[LoadCase],
    options: &AnalysisOptions,
) -> FrameResult<Vec<CaseResults>> {
    options.validate()?;
    if view.nodes.is_empty() {
        return Err(FrameError::InvalidInput("model has no nodes".to_string()));
    }

    let restraints = view.restraints();
    info!(
        "analyzing {} nodes, {} bars, {} DOFs ({} fixed), {} load cases",
        view.nodes.len(),
        view.bars.len(),
        view.dof_count(),
        restraints.iter().filter(|r| r.is_fixed()).count(),
        cases.len()
    );

    assembler.prepare(view)?;
    let k = assembler.global_stiffness(view)?;

    let Some(first) = cases.first() else {
        return Ok(Vec::new());
    };
    let system = ConstrainedSystem::factorize(&k, &restraints, options)
        .map_err(|singular| view.unstable(&first.name, singular))?;

    let mut results = Vec::with_capacity(cases.len());
    for case in cases {
        debug!("solving load case '{}' ({} loads)", case.name, case.loads.len());
        let loads = assembler.case_loads(view, case)?;
        let displacements = system
            .solve(&loads.vector)
            .map_err(|singular| view.unstable(&case.name, singular))?;

        let mut reactions = &k * &displacements - &loads.vector;
        for (value, restraint) in reactions.iter_mut().zip(&restraints) {
            if restraint.is_free() {
                *value = 0.0;
            }
        }

        let mut end_forces = Vec::with_capacity(view.bars.len());
        for (i, bar) in view.bars.iter().enumerate() {
            let element = assembler.element(BarId(i))?;
            let d_bar = gather(&displacements, &scatter_vector(bar));
            end_forces.push(element.end_forces(&d_bar, &loads.fixed_end[i]));
        }

        results.push(CaseResults {
            name: case.name.clone(),
            displacements,
            reactions,
            end_forces,
            point_loads: loads.point_loads,
            distributed: loads.distributed,
        });
    }
    Ok(results)
}
