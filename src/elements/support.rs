//! Support conditions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FrameError, FrameResult};

/// Global nodal degree of freedom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dof {
    Dx,
    Dy,
    Dz,
    Rx,
    Ry,
    Rz,
}

impl Dof {
    /// All six DOFs in nodal order
    pub const ALL: [Dof; 6] = [Dof::Dx, Dof::Dy, Dof::Dz, Dof::Rx, Dof::Ry, Dof::Rz];

    /// Offset of this DOF within a node's block of six
    pub fn index(self) -> usize {
        self as usize
    }

    /// DOF at the given offset (0-5)
    pub fn from_index(index: usize) -> Option<Dof> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Dof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dof::Dx => "DX",
            Dof::Dy => "DY",
            Dof::Dz => "DZ",
            Dof::Rx => "RX",
            Dof::Ry => "RY",
            Dof::Rz => "RZ",
        };
        f.write_str(label)
    }
}

/// Constraint on a single DOF
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Restraint {
    #[default]
    Free,
    Fixed,
    /// Elastic support with the given stiffness (force/length or moment/radian)
    Spring(f64),
}

impl Restraint {
    /// Elastic restraint; the stiffness must be positive and finite
    pub fn spring(stiffness: f64) -> FrameResult<Self> {
        if stiffness.is_finite() && stiffness > 0.0 {
            Ok(Restraint::Spring(stiffness))
        } else {
            Err(FrameError::InvalidSpring {
                dof: "spring".to_string(),
                stiffness,
            })
        }
    }

    /// Stiffness added to the diagonal, if any
    pub fn spring_stiffness(&self) -> Option<f64> {
        match self {
            Restraint::Spring(k) => Some(*k),
            _ => None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Restraint::Fixed)
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Restraint::Free)
    }

    fn check(&self, dof: Dof) -> FrameResult<()> {
        match self {
            Restraint::Spring(k) if !(k.is_finite() && *k > 0.0) => Err(FrameError::InvalidSpring {
                dof: dof.to_string(),
                stiffness: *k,
            }),
            _ => Ok(()),
        }
    }
}

impl From<bool> for Restraint {
    fn from(fixed: bool) -> Self {
        if fixed {
            Restraint::Fixed
        } else {
            Restraint::Free
        }
    }
}

/// Support conditions at a node, one restraint per DOF [DX, DY, DZ, RX, RY, RZ]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Support {
    pub restraints: [Restraint; 6],
}

impl Support {
    /// Create a new support with no restraints
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fully fixed support (all DOFs restrained)
    pub fn fixed() -> Self {
        Self {
            restraints: [Restraint::Fixed; 6],
        }
    }

    /// Create a pinned support (translations restrained, rotations free)
    pub fn pinned() -> Self {
        Self::with_restraints(true, true, true, false, false, false)
    }

    /// Create a support with specific rigid restraints
    pub fn with_restraints(dx: bool, dy: bool, dz: bool, rx: bool, ry: bool, rz: bool) -> Self {
        Self {
            restraints: [dx, dy, dz, rx, ry, rz].map(Restraint::from),
        }
    }

    /// Replace the restraint on one DOF
    pub fn with(mut self, dof: Dof, restraint: Restraint) -> Self {
        self.restraints[dof.index()] = restraint;
        self
    }

    /// Elastic support on one DOF, validated eagerly
    pub fn with_spring(self, dof: Dof, stiffness: f64) -> FrameResult<Self> {
        let restraint = Restraint::Spring(stiffness);
        restraint.check(dof)?;
        Ok(self.with(dof, restraint))
    }

    /// Restraint on one DOF
    pub fn restraint(&self, dof: Dof) -> Restraint {
        self.restraints[dof.index()]
    }

    /// Get list of rigidly restrained DOF offsets (0-5)
    pub fn fixed_dofs(&self) -> Vec<usize> {
        (0..6).filter(|&i| self.restraints[i].is_fixed()).collect()
    }

    /// Check every spring, reporting the first invalid one
    pub(crate) fn validate(&self) -> FrameResult<()> {
        for dof in Dof::ALL {
            self.restraint(dof).check(dof)?;
        }
        Ok(())
    }
}
