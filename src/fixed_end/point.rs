//! Fixed-end reactions of concentrated loads

use super::{check_finite, check_length, check_position};
use crate::error::FrameResult;
use crate::loads::LoadComponent;
use crate::math::Vec12;

/// Fixed-end reactions of a single concentrated component at distance `x` from the start
///
/// With `a = x` and `b = length - x`:
/// - `Fx` / `Mx`: end actions `-P·b/L` and `-P·a/L`
/// - `Fy`: forces `-P·b²(3a+b)/L³`, `-P·a²(a+3b)/L³`; moments `-P·a·b²/L²`, `P·a²·b/L²`
/// - `Fz`: as `Fy` with the moment signs mirrored
/// - `My` / `Mz`: moments `M·b(2a-b)/L²`, `M·a(2b-a)/L²` plus the couple `6M·a·b/L³`
pub fn point(component: LoadComponent, length: f64, x: f64, value: f64) -> FrameResult<Vec12> {
    check_length(length)?;
    check_position(length, x)?;
    check_finite("point load", value)?;

    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;
    let a = x;
    let b = l - a;
    let p = value;

    let mut fer = Vec12::zeros();
    match component {
        LoadComponent::Fx => {
            fer[0] = -p * b / l;
            fer[6] = -p * a / l;
        }
        LoadComponent::Mx => {
            fer[3] = -p * b / l;
            fer[9] = -p * a / l;
        }
        LoadComponent::Fy => {
            fer[1] = -p * b * b * (3.0 * a + b) / l3;
            fer[5] = -p * a * b * b / l2;
            fer[7] = -p * a * a * (a + 3.0 * b) / l3;
            fer[11] = p * a * a * b / l2;
        }
        LoadComponent::Fz => {
            fer[2] = -p * b * b * (3.0 * a + b) / l3;
            fer[4] = p * a * b * b / l2;
            fer[8] = -p * a * a * (a + 3.0 * b) / l3;
            fer[10] = -p * a * a * b / l2;
        }
        LoadComponent::My => {
            fer[2] = -6.0 * p * a * b / l3;
            fer[4] = p * b * (2.0 * a - b) / l2;
            fer[8] = 6.0 * p * a * b / l3;
            fer[10] = p * a * (2.0 * b - a) / l2;
        }
        LoadComponent::Mz => {
            fer[1] = 6.0 * p * a * b / l3;
            fer[5] = p * b * (2.0 * a - b) / l2;
            fer[7] = -6.0 * p * a * b / l3;
            fer[11] = p * a * (2.0 * b - a) / l2;
        }
    }
    Ok(fer)
}

/// Fixed-end reactions of a full 6-component action [FX, FY, FZ, MX, MY, MZ] at `x`
pub fn point_actions(length: f64, x: f64, actions: &[f64; 6]) -> FrameResult<Vec12> {
    check_position(length, x)?;
    let mut fer = Vec12::zeros();
    for component in LoadComponent::ALL {
        let value = actions[component.index()];
        if value != 0.0 {
            fer += point(component, length, x, value)?;
        }
    }
    Ok(fer)
}
