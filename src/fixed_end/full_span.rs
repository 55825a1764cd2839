//! Fixed-end reactions of line loads spanning the whole bar

use super::{check_finite, check_length, partial, Slope};
use crate::error::FrameResult;
use crate::loads::LoadComponent;
use crate::math::Vec12;

/// Uniform load of intensity `p` over the full length
pub fn rectangular(component: LoadComponent, length: f64, p: f64) -> FrameResult<Vec12> {
    check_length(length)?;
    check_finite("line load", p)?;

    let l = length;
    let l2 = l * l;
    let mut fer = Vec12::zeros();
    match component {
        LoadComponent::Fx => {
            fer[0] = -p * l / 2.0;
            fer[6] = -p * l / 2.0;
        }
        LoadComponent::Mx => {
            fer[3] = -p * l / 2.0;
            fer[9] = -p * l / 2.0;
        }
        LoadComponent::Fy => {
            fer[1] = -p * l / 2.0;
            fer[5] = -p * l2 / 12.0;
            fer[7] = -p * l / 2.0;
            fer[11] = p * l2 / 12.0;
        }
        LoadComponent::Fz => {
            fer[2] = -p * l / 2.0;
            fer[4] = p * l2 / 12.0;
            fer[8] = -p * l / 2.0;
            fer[10] = -p * l2 / 12.0;
        }
        LoadComponent::My => {
            fer[2] = -p;
            fer[8] = p;
        }
        LoadComponent::Mz => {
            fer[1] = p;
            fer[7] = -p;
        }
    }
    Ok(fer)
}

/// Triangular load reaching intensity `p` at one end and zero at the other
pub fn triangular(component: LoadComponent, length: f64, p: f64, slope: Slope) -> FrameResult<Vec12> {
    match slope {
        Slope::Ascending => ascending(component, length, p),
        // A descending triangle is the rectangle minus the ascending one
        Slope::Descending => Ok(rectangular(component, length, p)? - ascending(component, length, p)?),
    }
}

/// Zero at the start, `p` at the end
fn ascending(component: LoadComponent, length: f64, p: f64) -> FrameResult<Vec12> {
    check_length(length)?;
    check_finite("line load", p)?;

    let l = length;
    let l2 = l * l;
    let mut fer = Vec12::zeros();
    match component {
        LoadComponent::Fx => {
            fer[0] = -p * l / 6.0;
            fer[6] = -p * l / 3.0;
        }
        LoadComponent::Mx => {
            fer[3] = -p * l / 6.0;
            fer[9] = -p * l / 3.0;
        }
        LoadComponent::Fy => {
            fer[1] = -3.0 * p * l / 20.0;
            fer[5] = -p * l2 / 30.0;
            fer[7] = -7.0 * p * l / 20.0;
            fer[11] = p * l2 / 20.0;
        }
        LoadComponent::Fz => {
            fer[2] = -3.0 * p * l / 20.0;
            fer[4] = p * l2 / 30.0;
            fer[8] = -7.0 * p * l / 20.0;
            fer[10] = -p * l2 / 20.0;
        }
        LoadComponent::My => {
            fer[2] = -p / 2.0;
            fer[4] = p * l / 12.0;
            fer[8] = p / 2.0;
            fer[10] = -p * l / 12.0;
        }
        LoadComponent::Mz => {
            fer[1] = p / 2.0;
            fer[5] = p * l / 12.0;
            fer[7] = -p / 2.0;
            fer[11] = -p * l / 12.0;
        }
    }
    Ok(fer)
}

/// Linearly varying load from `p1` at the start to `p2` at the end
///
/// Same-sign intensities split into a rectangle at the smaller magnitude plus a
/// triangle of the difference. Opposite signs are split at the zero crossing into
/// two triangles, each solved on its own sub-span.
pub fn trapezoidal(component: LoadComponent, length: f64, p1: f64, p2: f64) -> FrameResult<Vec12> {
    check_length(length)?;
    check_finite("line load", p1)?;
    check_finite("line load", p2)?;

    if p1 == p2 {
        return rectangular(component, length, p1);
    }

    if p1 * p2 >= 0.0 {
        let (base, peak, slope) = if p1.abs() < p2.abs() {
            (p1, p2 - p1, Slope::Ascending)
        } else {
            (p2, p1 - p2, Slope::Descending)
        };
        let mut fer = triangular(component, length, peak, slope)?;
        if base != 0.0 {
            fer += rectangular(component, length, base)?;
        }
        return Ok(fer);
    }

    let root = length * p1 / (p1 - p2);
    Ok(partial(component, length, 0.0, root, p1, 0.0)? + partial(component, length, root, length, 0.0, p2)?)
}
