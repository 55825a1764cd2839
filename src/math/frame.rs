//! Element stiffness builder for 3D frame bars
//!
//! Everything here is a pure function of the bar definition. The assembler
//! memoizes [`ElementMatrices`] per bar so they are built once per analysis
//! and reused by every load case.

use log::warn;

use super::{rotate_about_axis, Mat12, Mat3, Vec12, Vec3};
use crate::elements::{Bar, BarReleases, Material, Node, Section, LOCAL_DOF_LABELS};
use crate::error::{FrameError, FrameResult};

/// Bars shorter than this are treated as zero-length
pub const MIN_LENGTH: f64 = 1e-10;

/// Direction cosines below this are treated as zero when testing for a vertical bar
const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Relative size below which a release pivot counts as already eliminated
const CONDENSATION_TOLERANCE: f64 = 1e-12;

/// Matrices derived from a bar's geometry, section, material, roll and releases
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMatrices {
    /// Bar length
    pub length: f64,
    /// Local stiffness after release condensation
    pub kl: Mat12,
    /// Global-to-local rotation (block diagonal)
    pub r: Mat12,
    /// Global stiffness `rᵗ·kl·r`
    pub klg: Mat12,
    kl_full: Mat12,
    releases: BarReleases,
}

impl ElementMatrices {
    /// The 3x3 direction cosine block (rows are the local axes in global coordinates)
    pub fn rotation_block(&self) -> Mat3 {
        self.r.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Condense a local fixed-end action vector with this bar's releases
    pub fn condense_actions(&self, actions: &Vec12) -> Vec12 {
        if self.releases.any() {
            condense_releases(&self.kl_full, actions, &self.releases).1
        } else {
            *actions
        }
    }

    /// Local end forces from global end displacements and local fixed-end actions
    pub fn end_forces(&self, d_global: &Vec12, fixed_end: &Vec12) -> Vec12 {
        self.kl * (self.r * d_global) + fixed_end
    }
}

/// Build the local stiffness, rotation and global stiffness of a bar
pub fn compute_element_matrices(
    start: &Node,
    end: &Node,
    section: &Section,
    material: &Material,
    bar: &Bar,
) -> FrameResult<ElementMatrices> {
    let length = start.distance_to(end);
    let r = rotation_matrix(&start.position(), &end.position(), bar.rotation)?;
    let kl_full = local_stiffness(
        material.e,
        material.g,
        section.area,
        section.ix,
        section.iy,
        section.iz,
        length,
    );
    let kl = if bar.releases.any() {
        condense_releases(&kl_full, &Vec12::zeros(), &bar.releases).0
    } else {
        kl_full
    };
    let klg = r.transpose() * kl * r;

    Ok(ElementMatrices {
        length,
        kl,
        r,
        klg,
        kl_full,
        releases: bar.releases,
    })
}

/// Compute the local stiffness matrix for a 3D Euler-Bernoulli frame element
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `g` - Shear modulus
/// * `area` - Cross-sectional area
/// * `ix` - Torsional constant
/// * `iy` - Moment of inertia about local y-axis
/// * `iz` - Moment of inertia about local z-axis
/// * `length` - Bar length
pub fn local_stiffness(
    e: f64,
    g: f64,
    area: f64,
    ix: f64,
    iy: f64,
    iz: f64,
    length: f64,
) -> Mat12 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ea_l = e * area / l;
    let gj_l = g * ix / l;

    let mut k = Mat12::zeros();

    // Axial
    k[(0, 0)] = ea_l;
    k[(0, 6)] = -ea_l;
    k[(6, 6)] = ea_l;

    // Bending in the local x-y plane (about z)
    k[(1, 1)] = 12.0 * e * iz / l3;
    k[(1, 5)] = 6.0 * e * iz / l2;
    k[(1, 7)] = -12.0 * e * iz / l3;
    k[(1, 11)] = 6.0 * e * iz / l2;
    k[(5, 5)] = 4.0 * e * iz / l;
    k[(5, 7)] = -6.0 * e * iz / l2;
    k[(5, 11)] = 2.0 * e * iz / l;
    k[(7, 7)] = 12.0 * e * iz / l3;
    k[(7, 11)] = -6.0 * e * iz / l2;
    k[(11, 11)] = 4.0 * e * iz / l;

    // Bending in the local x-z plane (about y)
    k[(2, 2)] = 12.0 * e * iy / l3;
    k[(2, 4)] = -6.0 * e * iy / l2;
    k[(2, 8)] = -12.0 * e * iy / l3;
    k[(2, 10)] = -6.0 * e * iy / l2;
    k[(4, 4)] = 4.0 * e * iy / l;
    k[(4, 8)] = 6.0 * e * iy / l2;
    k[(4, 10)] = 2.0 * e * iy / l;
    k[(8, 8)] = 12.0 * e * iy / l3;
    k[(8, 10)] = 6.0 * e * iy / l2;
    k[(10, 10)] = 4.0 * e * iy / l;

    // Torsion
    k[(3, 3)] = gj_l;
    k[(3, 9)] = -gj_l;
    k[(9, 9)] = gj_l;

    k.fill_lower_triangle_with_upper_triangle();
    k
}

/// Direction cosine matrix of a bar; rows are the local x, y and z axes
///
/// The local y-axis comes from an auxiliary offset (global +Y, or global +X
/// for bars parallel to Y) rolled about the bar axis by `rotation`.
pub fn direction_cosines(start: &Vec3, end: &Vec3, rotation: f64) -> FrameResult<Mat3> {
    let axis = end - start;
    let length = axis.norm();
    if !(length > MIN_LENGTH) {
        return Err(FrameError::InvalidGeometry(format!(
            "bar from {:?} to {:?} has zero length",
            start.as_slice(),
            end.as_slice()
        )));
    }
    let x = axis / length;

    let offset = if x.x.abs() < PARALLEL_TOLERANCE && x.z.abs() < PARALLEL_TOLERANCE {
        Vec3::x()
    } else {
        Vec3::y()
    };
    let aux = rotate_about_axis(&offset, &x, rotation);

    let z = x.cross(&aux).normalize();
    let y = z.cross(&x);

    Ok(Mat3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]))
}

/// Compute the 12x12 global-to-local rotation matrix of a bar
pub fn rotation_matrix(start: &Vec3, end: &Vec3, rotation: f64) -> FrameResult<Mat12> {
    Ok(block_diagonal(&direction_cosines(start, end, rotation)?))
}

/// Replicate a 3x3 block into the four diagonal blocks of a 12x12 matrix
pub fn block_diagonal(block: &Mat3) -> Mat12 {
    let mut t = Mat12::zeros();
    for i in 0..4 {
        t.fixed_view_mut::<3, 3>(3 * i, 3 * i).copy_from(block);
    }
    t
}

/// Condense released DOFs out of a local stiffness matrix and fixed-end action vector
///
/// Releases are eliminated one at a time in DOF order. For a released DOF `l`
/// every active pair is updated as `K[j,k] -= K[j,l]·K[k,l]/K[l,l]` and the
/// actions as `a[j] -= K[j,l]/K[l,l]·a[l]`; row and column `l` are then zeroed
/// and skipped by later passes.
pub fn condense_releases(k: &Mat12, actions: &Vec12, releases: &BarReleases) -> (Mat12, Vec12) {
    let mut k = *k;
    let mut a = *actions;
    let mut eliminated = [false; 12];

    for l in releases.released_dofs() {
        let scale = (0..12)
            .filter(|&i| !eliminated[i])
            .map(|i| k[(i, i)].abs())
            .fold(0.0, f64::max);
        let pivot = k[(l, l)];

        if pivot.abs() > CONDENSATION_TOLERANCE * scale {
            for j in (0..12).filter(|&j| j != l && !eliminated[j]) {
                let factor = k[(j, l)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for m in (0..12).filter(|&m| m != l && !eliminated[m]) {
                    k[(j, m)] -= factor * k[(m, l)];
                }
                a[j] -= factor * a[l];
            }
        } else {
            warn!(
                "Released DOF {} has no remaining stiffness; the bar forms a mechanism there",
                LOCAL_DOF_LABELS[l]
            );
        }

        for m in 0..12 {
            k[(l, m)] = 0.0;
            k[(m, l)] = 0.0;
        }
        a[l] = 0.0;
        eliminated[l] = true;
    }

    (k, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn sample_stiffness() -> Mat12 {
        local_stiffness(2e11, 7.692e10, 1.66e-3, 1.97e-8, 6.35e-6, 8.20e-7, 5.0)
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let k = sample_stiffness();
        for i in 0..12 {
            for j in 0..12 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_local_stiffness_terms() {
        let (e, iz, l) = (2e11, 8.20e-7, 5.0);
        let k = sample_stiffness();
        assert_relative_eq!(k[(0, 0)], e * 1.66e-3 / l);
        assert_relative_eq!(k[(3, 9)], -7.692e10 * 1.97e-8 / l);
        assert_relative_eq!(k[(11, 1)], 6.0 * e * iz / (l * l));
        assert_relative_eq!(k[(10, 2)], -6.0 * e * 6.35e-6 / (l * l));
        assert_relative_eq!(k[(11, 5)], 2.0 * e * iz / l);
    }

    #[test]
    fn test_rigid_body_modes_produce_no_force() {
        let k = sample_stiffness();
        let l = 5.0;
        let theta = 1e-3;

        let translation = Vec12::from_row_slice(&[
            1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0,
        ]);
        // Rigid rotations about local x, y and z through the start node
        let twist = Vec12::from_row_slice(&[
            0.0, 0.0, 0.0, theta, 0.0, 0.0, 0.0, 0.0, 0.0, theta, 0.0, 0.0,
        ]);
        let about_y = Vec12::from_row_slice(&[
            0.0, 0.0, 0.0, 0.0, theta, 0.0, 0.0, 0.0, -theta * l, 0.0, theta, 0.0,
        ]);
        let about_z = Vec12::from_row_slice(&[
            0.0, 0.0, 0.0, 0.0, 0.0, theta, 0.0, theta * l, 0.0, 0.0, 0.0, theta,
        ]);

        for mode in [translation, twist, about_y, about_z] {
            let f = k * mode;
            assert_abs_diff_eq!(f.norm(), 0.0, epsilon = 1e-3);
        }

        // Force rows of the two ends cancel
        for col in 0..12 {
            for dof in 0..3 {
                assert_abs_diff_eq!(k[(dof, col)] + k[(dof + 6, col)], 0.0, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_direction_cosines_horizontal() {
        let r = direction_cosines(&Vec3::zeros(), &Vec3::new(10.0, 0.0, 0.0), 0.0).unwrap();
        assert_relative_eq!(r, Mat3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_direction_cosines_vertical() {
        let r = direction_cosines(&Vec3::zeros(), &Vec3::new(0.0, 4.0, 0.0), 0.0).unwrap();
        // local x = global Y, auxiliary offset along global X
        assert_relative_eq!(r.row(0).transpose(), Vec3::y(), epsilon = 1e-12);
        assert_relative_eq!(r.row(1).transpose(), Vec3::x(), epsilon = 1e-12);
        assert_relative_eq!(r.row(2).transpose(), -Vec3::z(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_orthogonality() {
        let ends = [
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, -3.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 1.0, -0.5),
        ];
        for end in ends {
            for roll in [0.0, 0.3, PI / 2.0, 2.5, -1.0] {
                let r = direction_cosines(&Vec3::new(0.5, 0.5, 0.5), &(end + Vec3::new(0.5, 0.5, 0.5)), roll)
                    .unwrap();
                assert_relative_eq!(r * r.transpose(), Mat3::identity(), epsilon = 1e-12);
                assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_roll_rotates_local_axes() {
        let r = direction_cosines(&Vec3::zeros(), &Vec3::new(3.0, 0.0, 0.0), PI / 2.0).unwrap();
        assert_relative_eq!(r.row(1).transpose(), Vec3::z(), epsilon = 1e-12);
        assert_relative_eq!(r.row(2).transpose(), -Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_rejected() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert!(matches!(
            rotation_matrix(&p, &p, 0.0),
            Err(FrameError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_block_diagonal() {
        let r = direction_cosines(&Vec3::zeros(), &Vec3::new(1.0, 2.0, 2.0), 0.7).unwrap();
        let t = block_diagonal(&r);
        assert_relative_eq!(t * t.transpose(), Mat12::identity(), epsilon = 1e-12);
        assert_eq!(t[(0, 3)], 0.0);
        assert_eq!(t[(9, 9)], r[(0, 0)]);
    }

    #[test]
    fn test_condensation_end_moment_release() {
        let (e, iz, l): (f64, f64, f64) = (2e11, 8.20e-7, 5.0);
        let k = sample_stiffness();
        let mut releases = BarReleases::none();
        releases.end[5] = true;

        let (kc, _) = condense_releases(&k, &Vec12::zeros(), &releases);

        // Propped cantilever stiffness: 3EI/L³ and 3EI/L
        assert_relative_eq!(kc[(1, 1)], 3.0 * e * iz / l.powi(3), max_relative = 1e-12);
        assert_relative_eq!(kc[(5, 5)], 3.0 * e * iz / l, max_relative = 1e-12);
        assert_relative_eq!(kc[(1, 5)], 3.0 * e * iz / (l * l), max_relative = 1e-12);
        for m in 0..12 {
            assert_eq!(kc[(11, m)], 0.0);
            assert_eq!(kc[(m, 11)], 0.0);
        }
        // Axial and the other bending plane are untouched
        assert_eq!(kc[(0, 0)], k[(0, 0)]);
        assert_eq!(kc[(4, 4)], k[(4, 4)]);
    }

    #[test]
    fn test_condensation_of_fixed_end_actions() {
        let (p, l) = (-10.0e3, 5.0);
        let k = sample_stiffness();
        // Uniform load in local y on a fully fixed span
        let mut fer = Vec12::zeros();
        fer[1] = -p * l / 2.0;
        fer[5] = -p * l * l / 12.0;
        fer[7] = -p * l / 2.0;
        fer[11] = p * l * l / 12.0;

        let (_, condensed) = condense_releases(&k, &fer, &BarReleases::pin_end());

        assert_relative_eq!(condensed[1], -5.0 * p * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(condensed[5], -p * l * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(condensed[7], -3.0 * p * l / 8.0, max_relative = 1e-12);
        assert_eq!(condensed[11], 0.0);
    }

    #[test]
    fn test_double_torsion_release_does_not_divide_by_zero() {
        let k = sample_stiffness();
        let mut releases = BarReleases::none();
        releases.start[3] = true;
        releases.end[3] = true;
        let (kc, _) = condense_releases(&k, &Vec12::zeros(), &releases);
        assert!(kc.iter().all(|v| v.is_finite()));
        assert_eq!(kc[(3, 3)], 0.0);
        assert_eq!(kc[(9, 9)], 0.0);
    }

    #[test]
    fn test_element_matrices_global_symmetry() {
        let bar = Bar::new(
            crate::elements::NodeId(0),
            crate::elements::NodeId(1),
            crate::elements::SectionId(0),
            crate::elements::MaterialId(0),
        )
        .with_rotation(0.4)
        .with_releases(BarReleases::pin_start());
        let m = compute_element_matrices(
            &Node::new(0.0, 0.0, 0.0),
            &Node::new(3.0, 4.0, 1.0),
            &Section::new(1.66e-3, 1.97e-8, 6.35e-6, 8.20e-7),
            &Material::new(2e11, 7.692e10, 0.3, 7850.0),
            &bar,
        )
        .unwrap();
        assert_relative_eq!(m.length, 26.0_f64.sqrt());
        assert_relative_eq!(m.klg, m.klg.transpose(), epsilon = 1e-3);
        // Global stiffness still has no resistance to rigid translation
        let shift = Vec12::from_row_slice(&[
            1.0, -2.0, 0.5, 0.0, 0.0, 0.0, 1.0, -2.0, 0.5, 0.0, 0.0, 0.0,
        ]);
        assert_abs_diff_eq!((m.klg * shift).norm(), 0.0, epsilon = 1e-3);
    }
}
