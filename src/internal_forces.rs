//! Shear, moment, axial and torsion diagrams along a bar
//!
//! A diagram is rebuilt from the bar's end forces (local axes, forces acting on
//! the bar) and the point loads applied along it. Each query returns the value
//! just left and just right of the section so that jumps under concentrated
//! loads are exposed exactly.
//!
//! Sign convention with `f` the end force vector:
//!
//! | quantity   | value                              | left limit at `L` |
//! |------------|------------------------------------|-------------------|
//! | `shear_y`  | `f[1] + ΣFy`                       | `-f[7]`           |
//! | `shear_z`  | `f[2] + ΣFz`                       | `-f[8]`           |
//! | `moment_z` | `-f[5] + ∫shear_y - ΣMz`           | `f[11]`           |
//! | `moment_y` | `f[4] + ∫shear_z + ΣMy`            | `-f[10]`          |
//! | `axial`    | `-(f[0] + ΣFx)`, tension positive  | `f[6]`            |
//! | `torsion`  | `-(f[3] + ΣMx)`                    | `f[9]`            |
//!
//! Distributed loads are not part of the diagrams.

use serde::{Deserialize, Serialize};

use crate::error::FrameResult;
use crate::fixed_end::{check_finite, check_length, check_position};
use crate::math::Vec12;

/// A concentrated action on a bar, in local axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPointLoad {
    /// Distance from the start node
    pub position: f64,
    /// [FX, FY, FZ, MX, MY, MZ]
    pub actions: [f64; 6],
}

impl LocalPointLoad {
    pub fn new(position: f64, actions: [f64; 6]) -> Self {
        Self { position, actions }
    }

    /// A single transverse force along local y
    pub fn fy(position: f64, value: f64) -> Self {
        Self::new(position, [0.0, value, 0.0, 0.0, 0.0, 0.0])
    }

    /// A single moment about local z
    pub fn mz(position: f64, value: f64) -> Self {
        Self::new(position, [0.0, 0.0, 0.0, 0.0, 0.0, value])
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.position, self.actions.map(|a| a * factor))
    }
}

/// Values immediately left and right of a section
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SideValues {
    pub left: f64,
    pub right: f64,
}

impl SideValues {
    /// Jump across the section (right minus left)
    pub fn jump(&self) -> f64 {
        self.right - self.left
    }

    /// The larger magnitude of the two sides
    pub fn max_abs(&self) -> f64 {
        self.left.abs().max(self.right.abs())
    }
}

/// Which diagram to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    Axial,
    ShearY,
    ShearZ,
    Torsion,
    MomentY,
    MomentZ,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Axial,
        Quantity::ShearY,
        Quantity::ShearZ,
        Quantity::Torsion,
        Quantity::MomentY,
        Quantity::MomentZ,
    ];
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Does a load at `position` sit on the already-passed side of `x`
    fn includes(self, position: f64, x: f64) -> bool {
        match self {
            Side::Left => position < x,
            Side::Right => position <= x,
        }
    }
}

fn check_section(length: f64, x: f64, loads: &[LocalPointLoad]) -> FrameResult<()> {
    check_length(length)?;
    check_position(length, x)?;
    check_loads(loads, length)
}

/// End sections take the end values directly; the side outside the bar is zero
fn at_section(length: f64, x: f64, start: f64, end: f64, value: impl Fn(Side) -> f64) -> SideValues {
    if x <= 0.0 {
        SideValues { left: 0.0, right: start }
    } else if x >= length {
        SideValues { left: end, right: 0.0 }
    } else {
        SideValues {
            left: value(Side::Left),
            right: value(Side::Right),
        }
    }
}

/// `base + Σ component` over the loads already passed
fn running(base: f64, loads: &[LocalPointLoad], component: usize, x: f64, side: Side) -> f64 {
    base + loads
        .iter()
        .filter(|load| side.includes(load.position, x))
        .map(|load| load.actions[component])
        .sum::<f64>()
}

/// Integral of a running shear from 0 to `x`, piecewise between load positions
fn integrated_shear(base: f64, loads: &[LocalPointLoad], component: usize, x: f64) -> f64 {
    let mut stops: Vec<f64> = loads
        .iter()
        .map(|load| load.position)
        .filter(|&p| p > 0.0 && p < x)
        .collect();
    stops.sort_by(f64::total_cmp);
    stops.dedup();
    stops.push(x);

    let mut area = 0.0;
    let mut from = 0.0;
    for to in stops {
        area += running(base, loads, component, from, Side::Right) * (to - from);
        from = to;
    }
    area
}

fn check_loads(loads: &[LocalPointLoad], length: f64) -> FrameResult<()> {
    for load in loads {
        check_position(length, load.position)?;
        for value in load.actions {
            check_finite("point load", value)?;
        }
    }
    Ok(())
}

/// Shear along local y at `x`
pub fn shear_y(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    Ok(at_section(length, x, f[1], -f[7], |side| running(f[1], loads, 1, x, side)))
}

/// Shear along local z at `x`
pub fn shear_z(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    Ok(at_section(length, x, f[2], -f[8], |side| running(f[2], loads, 2, x, side)))
}

/// Bending moment about local z at `x`, sagging positive under loads along -y
pub fn moment_z(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    let spanned = -f[5] + integrated_shear(f[1], loads, 1, x);
    Ok(at_section(length, x, -f[5], f[11], |side| spanned - running(0.0, loads, 5, x, side)))
}

/// Bending moment about local y at `x`
pub fn moment_y(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    let spanned = f[4] + integrated_shear(f[2], loads, 2, x);
    Ok(at_section(length, x, f[4], -f[10], |side| spanned + running(0.0, loads, 4, x, side)))
}

/// Axial force at `x`, tension positive
pub fn axial(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    Ok(at_section(length, x, -f[0], f[6], |side| -running(f[0], loads, 0, x, side)))
}

/// Twisting moment at `x`
pub fn torsion(length: f64, end_forces: &Vec12, loads: &[LocalPointLoad], x: f64) -> FrameResult<SideValues> {
    check_section(length, x, loads)?;
    let f = end_forces;
    Ok(at_section(length, x, -f[3], f[9], |side| -running(f[3], loads, 3, x, side)))
}

/// End forces and point loads of one bar in one load case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDiagram {
    pub length: f64,
    pub end_forces: Vec12,
    pub loads: Vec<LocalPointLoad>,
}

impl BarDiagram {
    pub fn new(length: f64, end_forces: Vec12, loads: Vec<LocalPointLoad>) -> Self {
        Self {
            length,
            end_forces,
            loads,
        }
    }

    /// Evaluate one diagram at `x`
    pub fn evaluate(&self, quantity: Quantity, x: f64) -> FrameResult<SideValues> {
        let (length, f, loads) = (self.length, &self.end_forces, self.loads.as_slice());
        match quantity {
            Quantity::Axial => axial(length, f, loads, x),
            Quantity::ShearY => shear_y(length, f, loads, x),
            Quantity::ShearZ => shear_z(length, f, loads, x),
            Quantity::Torsion => torsion(length, f, loads, x),
            Quantity::MomentY => moment_y(length, f, loads, x),
            Quantity::MomentZ => moment_z(length, f, loads, x),
        }
    }

    /// Evaluate at `points` evenly spaced sections, ends included
    pub fn sample(&self, quantity: Quantity, points: usize) -> FrameResult<Vec<(f64, SideValues)>> {
        let steps = points.max(2) - 1;
        (0..=steps)
            .map(|i| {
                let x = if i == steps {
                    self.length
                } else {
                    self.length * i as f64 / steps as f64
                };
                self.evaluate(quantity, x).map(|v| (x, v))
            })
            .collect()
    }

    /// Largest magnitude over the sampled sections and every load position
    pub fn max_abs(&self, quantity: Quantity, points: usize) -> FrameResult<f64> {
        let mut worst = 0.0_f64;
        for (_, values) in self.sample(quantity, points)? {
            worst = worst.max(values.max_abs());
        }
        for load in &self.loads {
            worst = worst.max(self.evaluate(quantity, load.position)?.max_abs());
        }
        Ok(worst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Fixed-fixed beam with three transverse forces and a couple pair
    fn reference_beam() -> (f64, Vec12, Vec<LocalPointLoad>) {
        let mut f = Vec12::zeros();
        f[1] = -164.8;
        f[5] = -194.5;
        f[7] = -435.2;
        f[11] = 320.5;
        let loads = vec![
            LocalPointLoad::fy(1.0, 100.0),
            LocalPointLoad::mz(2.0, 100.0),
            LocalPointLoad::fy(3.0, 200.0),
            LocalPointLoad::mz(3.5, -100.0),
            LocalPointLoad::fy(4.5, 300.0),
        ];
        (5.0, f, loads)
    }

    #[test]
    fn test_moment_walks_through_every_load() {
        let (l, f, loads) = reference_beam();
        let m = |x| moment_z(l, &f, &loads, x).unwrap();

        assert_relative_eq!(m(1.0).left, 29.7, epsilon = 1e-9);
        assert_relative_eq!(m(1.0).right, 29.7, epsilon = 1e-9);
        assert_relative_eq!(m(2.0).left, -35.1, epsilon = 1e-9);
        assert_relative_eq!(m(2.0).right, -135.1, epsilon = 1e-9);
        assert_relative_eq!(m(3.0).left, -199.9, epsilon = 1e-9);
        assert_relative_eq!(m(3.5).left, -132.3, epsilon = 1e-9);
        assert_relative_eq!(m(3.5).right, -32.3, epsilon = 1e-9);
        assert_relative_eq!(m(4.5).right, 102.9, epsilon = 1e-9);
        assert_relative_eq!(m(5.0).left, 320.5, epsilon = 1e-9);
        assert_eq!(m(5.0).right, 0.0);
    }

    #[test]
    fn test_shear_jumps_under_loads() {
        let (l, f, loads) = reference_beam();
        let v = shear_y(l, &f, &loads, 3.0).unwrap();
        assert_relative_eq!(v.left, -64.8, epsilon = 1e-9);
        assert_relative_eq!(v.right, 135.2, epsilon = 1e-9);
        assert_relative_eq!(v.jump(), 200.0, epsilon = 1e-9);

        let start = shear_y(l, &f, &loads, 0.0).unwrap();
        assert_eq!(start.left, 0.0);
        assert_relative_eq!(start.right, f[1]);

        let end = shear_y(l, &f, &loads, l).unwrap();
        assert_relative_eq!(end.left, -f[7], epsilon = 1e-9);
        assert_eq!(end.right, 0.0);
    }

    #[test]
    fn test_ends_report_end_forces_when_loads_are_off_the_diagram() {
        // Fixed-fixed beam under a -1000 line load: end forces carry the load
        // the point-load walk cannot see
        let l = 6.0;
        let mut f = Vec12::zeros();
        f[1] = 3000.0;
        f[5] = 3000.0;
        f[7] = 3000.0;
        f[11] = -3000.0;

        let start = moment_z(l, &f, &[], 0.0).unwrap();
        assert_eq!(start.left, 0.0);
        assert_eq!(start.right, -f[5]);
        let end = moment_z(l, &f, &[], l).unwrap();
        assert_eq!(end.left, f[11]);
        assert_eq!(end.right, 0.0);

        assert_eq!(shear_y(l, &f, &[], l).unwrap().left, -f[7]);
        assert_eq!(shear_y(l, &f, &[], 0.0).unwrap().right, f[1]);
    }

    #[test]
    fn test_loads_at_the_ends_are_held_by_the_end_forces() {
        let l = 4.0;
        let mut f = Vec12::zeros();
        f[2] = -2.0;
        f[8] = -3.0;
        f[4] = 1.5;
        f[10] = -0.5;
        let loads = [
            LocalPointLoad::new(0.0, [0.0, 0.0, 2.0, 0.0, 0.0, 0.0]),
            LocalPointLoad::new(l, [0.0, 0.0, 3.0, 0.0, 0.0, 0.0]),
        ];
        assert_eq!(shear_z(l, &f, &loads, 0.0).unwrap().right, f[2]);
        assert_eq!(shear_z(l, &f, &loads, l).unwrap().left, -f[8]);
        assert_eq!(moment_y(l, &f, &loads, 0.0).unwrap().right, f[4]);
        assert_eq!(moment_y(l, &f, &loads, l).unwrap().left, -f[10]);
    }

    #[test]
    fn test_simply_supported_midspan_moment() {
        // Load -P at midspan, supports push up P/2 at each end
        let (p, l) = (12.0, 6.0);
        let mut f = Vec12::zeros();
        f[1] = p / 2.0;
        f[7] = p / 2.0;
        let loads = [LocalPointLoad::fy(l / 2.0, -p)];
        let m = moment_z(l, &f, &loads, l / 2.0).unwrap();
        assert_relative_eq!(m.left, p * l / 4.0);
        assert_relative_eq!(m.right, p * l / 4.0);
        assert_abs_diff_eq!(moment_z(l, &f, &loads, l).unwrap().left, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_y_closes_at_far_end() {
        // Cantilever in the x-z plane, fixed at the start, tip force +Fz
        let (p, l) = (5.0, 2.0);
        let mut f = Vec12::zeros();
        f[2] = -p;
        f[4] = p * l;
        let loads = [LocalPointLoad::new(l, [0.0, 0.0, p, 0.0, 0.0, 0.0])];
        let root = moment_y(l, &f, &loads, 0.0).unwrap();
        assert_relative_eq!(root.right, p * l);
        let tip = moment_y(l, &f, &loads, l).unwrap();
        assert_abs_diff_eq!(tip.left, 0.0, epsilon = 1e-12);
        let mid = moment_y(l, &f, &loads, 1.0).unwrap();
        assert_relative_eq!(mid.left, p * l / 2.0);
    }

    #[test]
    fn test_axial_and_torsion_signs() {
        let l = 4.0;
        let mut f = Vec12::zeros();
        // Bar in tension 10 with a twist of 3 transferred end to end
        f[0] = -10.0;
        f[6] = 10.0;
        f[3] = -3.0;
        f[9] = 3.0;
        let n = axial(l, &f, &[], 2.0).unwrap();
        assert_relative_eq!(n.left, 10.0);
        assert_relative_eq!(axial(l, &f, &[], l).unwrap().left, f[6]);
        let t = torsion(l, &f, &[], 1.0).unwrap();
        assert_relative_eq!(t.right, 3.0);
        assert_relative_eq!(torsion(l, &f, &[], l).unwrap().left, f[9]);
    }

    #[test]
    fn test_diagrams_superpose() {
        let (l, f, loads) = reference_beam();
        let (first, second) = loads.split_at(2);
        let mut f1 = f;
        f1.scale_mut(0.25);
        let f2 = f - f1;
        for x in [0.5, 2.0, 3.0, 4.9] {
            let both = moment_z(l, &f, &loads, x).unwrap();
            let a = moment_z(l, &f1, first, x).unwrap();
            let b = moment_z(l, &f2, second, x).unwrap();
            assert_relative_eq!(both.left, a.left + b.left, epsilon = 1e-9);
            assert_relative_eq!(both.right, a.right + b.right, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bar_diagram_sampling() {
        let (l, f, loads) = reference_beam();
        let diagram = BarDiagram::new(l, f, loads);
        let samples = diagram.sample(Quantity::MomentZ, 11).unwrap();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0].0, 0.0);
        assert_relative_eq!(samples[10].0, l);
        let peak = diagram.max_abs(Quantity::MomentZ, 11).unwrap();
        assert_relative_eq!(peak, 320.5, epsilon = 1e-9);
        for quantity in Quantity::ALL {
            assert!(diagram.evaluate(quantity, 2.5).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_section_rejected() {
        let (l, f, loads) = reference_beam();
        assert!(moment_z(l, &f, &loads, -0.5).is_err());
        assert!(shear_y(l, &f, &loads, 5.5).is_err());
        assert!(axial(l, &f, &[LocalPointLoad::fy(7.0, 1.0)], 1.0).is_err());
    }
}
