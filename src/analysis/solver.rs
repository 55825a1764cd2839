//! Boundary conditions and the factorized system

use log::debug;
use nalgebra::{Dyn, LU};

use super::{AnalysisOptions, SupportMethod};
use crate::elements::Restraint;
use crate::math::{DVec, Mat};

/// Global DOF with no usable stiffness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularDof(pub usize);

/// The constrained stiffness matrix, factorized once and reused by every load case
pub struct ConstrainedSystem {
    size: usize,
    /// Global index of each unknown when fixed DOFs were eliminated
    unknowns: Option<Vec<usize>>,
    lu: Option<LU<f64, Dyn, Dyn>>,
}

impl ConstrainedSystem {
    /// Apply supports to a copy of `k` and factorize it
    ///
    /// `restraints` holds one entry per global DOF. Springs add their stiffness to
    /// the diagonal under every method.
    pub fn factorize(
        k: &Mat,
        restraints: &[Restraint],
        options: &AnalysisOptions,
    ) -> Result<Self, SingularDof> {
        let size = k.nrows();
        let mut constrained = k.clone();
        for (i, restraint) in restraints.iter().enumerate() {
            match restraint {
                Restraint::Spring(stiffness) => constrained[(i, i)] += stiffness,
                Restraint::Fixed if options.support_method == SupportMethod::Penalty => {
                    constrained[(i, i)] += options.penalty
                }
                _ => {}
            }
        }

        let unknowns = match options.support_method {
            SupportMethod::Penalty => None,
            SupportMethod::Elimination => {
                let free: Vec<usize> = (0..size).filter(|&i| !restraints[i].is_fixed()).collect();
                constrained = constrained.select_rows(&free).select_columns(&free);
                Some(free)
            }
        };
        debug!(
            "factorizing {}x{} system ({:?})",
            constrained.nrows(),
            constrained.ncols(),
            options.support_method
        );

        let global = |j: usize| unknowns.as_ref().map_or(j, |free| free[j]);
        let lu = if constrained.nrows() == 0 {
            None
        } else {
            let lu = constrained.lu();
            if options.check_stability {
                let scale = (0..size).map(|i| k[(i, i)].abs()).fold(0.0, f64::max);
                let threshold = options.pivot_tolerance * scale;
                let u = lu.u();
                if let Some(j) = (0..u.nrows()).find(|&j| u[(j, j)].abs() <= threshold) {
                    return Err(SingularDof(global(j)));
                }
            }
            Some(lu)
        };

        Ok(Self { size, unknowns, lu })
    }

    /// Displacements for one load vector
    pub fn solve(&self, loads: &DVec) -> Result<DVec, SingularDof> {
        let Some(lu) = &self.lu else {
            return Ok(DVec::zeros(self.size));
        };

        let rhs = match &self.unknowns {
            Some(free) => loads.select_rows(free),
            None => loads.clone(),
        };
        let solved = lu.solve(&rhs).ok_or_else(|| SingularDof(self.first_singular(lu)))?;
        if let Some(j) = solved.iter().position(|v| !v.is_finite()) {
            return Err(SingularDof(self.global(j)));
        }

        Ok(match &self.unknowns {
            Some(free) => {
                let mut full = DVec::zeros(self.size);
                for (j, &i) in free.iter().enumerate() {
                    full[i] = solved[j];
                }
                full
            }
            None => solved,
        })
    }

    fn global(&self, j: usize) -> usize {
        self.unknowns.as_ref().map_or(j, |free| free[j])
    }

    fn first_singular(&self, lu: &LU<f64, Dyn, Dyn>) -> usize {
        let u = lu.u();
        let j = (0..u.nrows()).find(|&j| u[(j, j)] == 0.0).unwrap_or(0);
        self.global(j)
    }
}
