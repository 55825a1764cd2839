//! Fixed-end reactions of loads applied along a bar
//!
//! Every function here returns the support reactions of the bar clamped at both
//! ends, as a local 12-vector in DOF order [FXi FYi FZi MXi MYi MZi FXj ... MZj].
//! The assembler negates and rotates them into equivalent nodal loads, and adds
//! them back onto the stiffness end forces after the solve.

mod full_span;
mod partial_span;
mod point;

pub use full_span::{rectangular, trapezoidal, triangular};
pub use partial_span::{partial, relocate};
pub use point::{point, point_actions};

use crate::error::{FrameError, FrameResult};
use crate::loads::{BarDistributedLoad, BarPointLoad, CoordinateSystem};
use crate::math::frame::MIN_LENGTH;
use crate::math::{Mat3, Vec12, Vec3};

/// Projected components below this are dropped
const PROJECTION_TOLERANCE: f64 = 1e-14;

/// Direction of a triangular load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slope {
    /// Zero at the start, peak at the end
    Ascending,
    /// Peak at the start, zero at the end
    Descending,
}

pub(crate) fn check_length(length: f64) -> FrameResult<()> {
    if length.is_finite() && length > MIN_LENGTH {
        Ok(())
    } else {
        Err(FrameError::InvalidInput(format!("bar length must be positive, got {length}")))
    }
}

pub(crate) fn check_finite(name: &str, value: f64) -> FrameResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FrameError::InvalidInput(format!("{name} must be finite, got {value}")))
    }
}

/// `0 <= x <= length`, exactly
pub(crate) fn check_position(length: f64, x: f64) -> FrameResult<()> {
    if x.is_finite() && (0.0..=length).contains(&x) {
        Ok(())
    } else {
        Err(FrameError::InvalidInput(format!(
            "position {x} lies outside the bar (length {length})"
        )))
    }
}

/// `0 <= x1 < x2 <= length`
pub(crate) fn check_span(length: f64, x1: f64, x2: f64) -> FrameResult<()> {
    check_position(length, x1)?;
    check_position(length, x2)?;
    if x1 < x2 {
        Ok(())
    } else {
        Err(FrameError::InvalidInput(format!(
            "loaded span [{x1}, {x2}] must start before it ends"
        )))
    }
}

/// Express a 6-component action [FX, FY, FZ, MX, MY, MZ] in bar local axes
///
/// `rotation` holds the local axes as rows, so local = rotation · global.
pub fn local_actions(rotation: &Mat3, system: CoordinateSystem, actions: &[f64; 6]) -> [f64; 6] {
    match system {
        CoordinateSystem::Local => *actions,
        CoordinateSystem::Global => {
            let force = rotation * Vec3::new(actions[0], actions[1], actions[2]);
            let moment = rotation * Vec3::new(actions[3], actions[4], actions[5]);
            [force.x, force.y, force.z, moment.x, moment.y, moment.z]
        }
    }
}

/// Fixed-end reactions of a point load, in local axes
pub fn point_load_reactions(length: f64, rotation: &Mat3, load: &BarPointLoad) -> FrameResult<Vec12> {
    let actions = local_actions(rotation, load.system, &load.actions);
    point_actions(length, load.position, &actions)
}

/// Fixed-end reactions of a distributed load, in local axes
///
/// A global load is projected onto the local axes and each non-zero projection
/// is solved as its own local load. Intensities are per unit bar length.
pub fn distributed_load_reactions(
    length: f64,
    rotation: &Mat3,
    load: &BarDistributedLoad,
) -> FrameResult<Vec12> {
    let (x1, x2) = load.span(length);
    match load.system {
        CoordinateSystem::Local => partial(load.component, length, x1, x2, load.p1, load.p2),
        CoordinateSystem::Global => {
            let mut direction = Vec3::zeros();
            direction[load.component.axis()] = 1.0;
            let projected = rotation * direction;

            let mut fer = Vec12::zeros();
            for (axis, c) in projected.iter().enumerate() {
                if c.abs() < PROJECTION_TOLERANCE {
                    continue;
                }
                fer += partial(
                    load.component.with_axis(axis),
                    length,
                    x1,
                    x2,
                    c * load.p1,
                    c * load.p2,
                )?;
            }
            Ok(fer)
        }
    }
}

/// Gauss integration of point reactions over linearly loaded pieces `(x1, x2, q1, q2)`
#[cfg(test)]
pub(crate) fn gauss_integrated(
    component: crate::loads::LoadComponent,
    length: f64,
    pieces: &[(f64, f64, f64, f64)],
) -> Vec12 {
    let mut fer = Vec12::zeros();
    for &(x1, x2, q1, q2) in pieces {
        let half = (x2 - x1) / 2.0;
        let mid = x1 + half;
        let offset = (3.0f64 / 5.0).sqrt() * half;
        for (x, weight) in [(mid - offset, 5.0 / 9.0), (mid, 8.0 / 9.0), (mid + offset, 5.0 / 9.0)] {
            let q = q1 + (q2 - q1) * (x - x1) / (x2 - x1);
            fer += point(component, length, x, q).unwrap() * (weight * half);
        }
    }
    fer
}
