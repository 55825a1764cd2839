//! Section properties for frame elements

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{FrameError, FrameResult};

/// Cross-section properties for frame elements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area in m²
    pub area: f64,
    /// Torsional constant in m⁴
    pub ix: f64,
    /// Moment of inertia about local y-axis in m⁴
    pub iy: f64,
    /// Moment of inertia about local z-axis in m⁴
    pub iz: f64,
}

impl Section {
    /// Create a new section with basic properties
    pub fn new(area: f64, ix: f64, iy: f64, iz: f64) -> Self {
        Self { area, ix, iy, iz }
    }

    /// Create a rectangular section with `depth` along local y and `width` along local z
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let area = width * depth;
        let iz = width * depth.powi(3) / 12.0;
        let iy = depth * width.powi(3) / 12.0;

        // Torsional constant for rectangle (approximate)
        let (long, short) = if width > depth { (width, depth) } else { (depth, width) };
        let ix = long * short.powi(3) / 3.0 * (1.0 - 0.63 * short / long);

        Self::new(area, ix, iy, iz)
    }

    /// Create a solid circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        let i = PI * r.powi(4) / 4.0;
        Self::new(PI * r * r, 2.0 * i, i, i)
    }

    /// Create a circular hollow section (pipe)
    pub fn pipe(outer_diameter: f64, thickness: f64) -> Self {
        let ro = outer_diameter / 2.0;
        let ri = ro - thickness;
        let i = PI * (ro.powi(4) - ri.powi(4)) / 4.0;
        Self::new(PI * (ro * ro - ri * ri), 2.0 * i, i, i)
    }

    /// Reject sections that would produce a meaningless stiffness matrix
    pub(crate) fn validate(&self, name: &str) -> FrameResult<()> {
        for (property, value) in [
            ("area", self.area),
            ("ix", self.ix),
            ("iy", self.iy),
            ("iz", self.iz),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FrameError::InvalidProperty {
                    owner: name.to_string(),
                    property,
                    value,
                });
            }
        }
        Ok(())
    }
}
