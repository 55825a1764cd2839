//! Material properties

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, FrameResult};

/// Linear elastic material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Shear modulus in Pa
    pub g: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(e: f64, g: f64, nu: f64, rho: f64) -> Self {
        Self { e, g, nu, rho }
    }

    /// Create a new isotropic material from E and nu
    /// G is calculated as E / (2 * (1 + nu))
    pub fn isotropic(e: f64, nu: f64, rho: f64) -> Self {
        let g = e / (2.0 * (1.0 + nu));
        Self::new(e, g, nu, rho)
    }

    /// Structural steel
    pub fn steel() -> Self {
        Self::new(200e9, 76.92e9, 0.3, 7850.0)
    }

    /// Aluminium alloy
    pub fn aluminum() -> Self {
        Self::isotropic(69e9, 0.33, 2700.0)
    }

    pub(crate) fn validate(&self, name: &str) -> FrameResult<()> {
        for (property, value) in [("e", self.e), ("g", self.g)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FrameError::InvalidProperty {
                    owner: name.to_string(),
                    property,
                    value,
                });
            }
        }
        if !(self.rho.is_finite() && self.rho >= 0.0) {
            return Err(FrameError::InvalidProperty {
                owner: name.to_string(),
                property: "rho",
                value: self.rho,
            });
        }
        Ok(())
    }
}
