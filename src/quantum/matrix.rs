// src/quantum/matrix.rs
//! Complex matrix utilities shared by the quantum and testing modules.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Compute the Kronecker (tensor) product of two complex matrices.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let n1 = a.shape()[0];
    let m1 = a.shape()[1];
    let n2 = b.shape()[0];
    let m2 = b.shape()[1];

    let mut result = Array2::zeros((n1 * n2, m1 * m2));

    for i in 0..n1 {
        for j in 0..m1 {
            for k in 0..n2 {
                for l in 0..m2 {
                    result[[i * n2 + k, j * m2 + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }

    result
}

/// The identity matrix of the given dimension.
pub fn identity(dim: usize) -> Array2<Complex64> {
    Array2::from_diag(&Array1::from_elem(dim, Complex64::new(1.0, 0.0)))
}

/// Compare two matrices elementwise with an absolute tolerance.
///
/// Matrices of different shapes are never equal.
pub fn approx_eq(a: &Array2<Complex64>, b: &Array2<Complex64>, atol: f64) -> bool {
    if a.shape() != b.shape() {
        return false;
    }

    for i in 0..a.shape()[0] {
        for j in 0..a.shape()[1] {
            if (a[[i, j]] - b[[i, j]]).norm() > atol {
                return false;
            }
        }
    }

    true
}

/// Largest elementwise absolute difference between two same-shaped matrices.
pub fn max_abs_diff(a: &Array2<Complex64>, b: &Array2<Complex64>) -> f64 {
    let mut max = 0.0_f64;

    for i in 0..a.shape()[0] {
        for j in 0..a.shape()[1] {
            let d = (a[[i, j]] - b[[i, j]]).norm();
            if d > max {
                max = d;
            }
        }
    }

    max
}
