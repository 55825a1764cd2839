//! Mathematical utilities for frame analysis

pub mod frame;

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector, Vector3};

pub type Mat = DMatrix<f64>;
pub type DVec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

/// 12x12 matrix for bar stiffness and rotation
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for bar end forces/displacements
pub type Vec12 = SVector<f64, 12>;

pub use frame::{
    block_diagonal, compute_element_matrices, condense_releases, direction_cosines,
    local_stiffness, rotation_matrix, ElementMatrices,
};

/// Rotate a vector about a unit axis through the origin (Rodrigues' formula)
pub fn rotate_about_axis(v: &Vec3, axis: &Vec3, angle: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    v * cos + axis.cross(v) * sin + axis * (axis.dot(v) * (1.0 - cos))
}

/// Largest absolute asymmetry |A[i,j] - A[j,i]| of a square matrix
pub fn max_asymmetry(m: &Mat) -> f64 {
    let mut worst = 0.0_f64;
    for i in 0..m.nrows() {
        for j in (i + 1)..m.ncols() {
            worst = worst.max((m[(i, j)] - m[(j, i)]).abs());
        }
    }
    worst
}
