//! Fixed-end reactions of line loads covering part of a bar

use super::{check_finite, check_length, check_span, point_actions, trapezoidal};
use crate::error::FrameResult;
use crate::loads::LoadComponent;
use crate::math::frame::MIN_LENGTH;
use crate::math::Vec12;

/// Linearly varying load from `p1` at `x1` to `p2` at `x2`
///
/// The loaded piece is solved as a clamped bar of its own length, then its end
/// reactions are moved onto the full bar as concentrated actions.
pub fn partial(
    component: LoadComponent,
    length: f64,
    x1: f64,
    x2: f64,
    p1: f64,
    p2: f64,
) -> FrameResult<Vec12> {
    check_length(length)?;
    check_span(length, x1, x2)?;
    check_finite("line load", p1)?;
    check_finite("line load", p2)?;

    if x2 - x1 <= MIN_LENGTH {
        return Ok(Vec12::zeros());
    }
    if x1 == 0.0 && x2 == length {
        return trapezoidal(component, length, p1, p2);
    }

    let short = trapezoidal(component, x2 - x1, p1, p2)?;
    relocate(length, x1, x2, &short)
}

/// Transfer the clamped reactions of a sub-span `[x1, x2]` onto the full bar
///
/// The sub-span pushes back on the rest of the bar with its reactions negated.
pub fn relocate(length: f64, x1: f64, x2: f64, short: &Vec12) -> FrameResult<Vec12> {
    let mut near = [0.0; 6];
    let mut far = [0.0; 6];
    for i in 0..6 {
        near[i] = -short[i];
        far[i] = -short[i + 6];
    }
    Ok(point_actions(length, x1, &near)? + point_actions(length, x2, &far)?)
}
