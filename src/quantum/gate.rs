// src/quantum/gate.rs
//! Quantum gates with optional capability accessors
//!
//! A gate always knows its qubit count and name. Whether it can produce a
//! unitary matrix or a Pauli expansion is up to the implementation: both
//! accessors default to `None`, and absence of either is a valid state, not
//! an error. The consistency checker in the testing module only has work to
//! do when a gate declares both.

use std::fmt::Debug;

use ndarray::{array, Array2};
use num_complex::Complex64;

use super::matrix::identity;
use super::pauli::{identity_expansion, PauliExpansion};

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// Trait for quantum gates
pub trait QuantumGate: Debug {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    /// Returns the unitary matrix of this gate, if it declares one
    fn unitary(&self) -> Option<Array2<Complex64>> {
        None
    }

    /// Returns the Pauli-basis expansion of this gate, if it declares one
    fn pauli_expansion(&self) -> Option<PauliExpansion> {
        None
    }
}

/// Standard quantum gates (identity, Pauli, Hadamard)
///
/// Each declares both a unitary and a matching Pauli expansion, except the
/// zero-qubit identity, which has no basis labels and declares no expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandardGate {
    /// Identity gate
    I(usize), // number of qubits

    /// Pauli-X gate (NOT gate)
    X,

    /// Pauli-Y gate
    Y,

    /// Pauli-Z gate
    Z,

    /// Hadamard gate
    H,
}

impl QuantumGate for StandardGate {
    fn qubit_count(&self) -> usize {
        match self {
            StandardGate::I(n) => *n,
            StandardGate::X | StandardGate::Y | StandardGate::Z | StandardGate::H => 1,
        }
    }

    fn name(&self) -> String {
        match self {
            StandardGate::I(n) => format!("I({})", n),
            StandardGate::X => "X".to_string(),
            StandardGate::Y => "Y".to_string(),
            StandardGate::Z => "Z".to_string(),
            StandardGate::H => "H".to_string(),
        }
    }

    fn unitary(&self) -> Option<Array2<Complex64>> {
        use constants::*;
        let matrix = match self {
            StandardGate::I(n) => identity(1 << n),
            StandardGate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
            StandardGate::Y => {
                array![
                    [Complex64::new(0.0, 0.0), -I],
                    [I, Complex64::new(0.0, 0.0)]
                ]
            }
            StandardGate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            }
            StandardGate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![
                    [factor, factor],
                    [factor, -factor]
                ]
            }
        };
        Some(matrix)
    }

    fn pauli_expansion(&self) -> Option<PauliExpansion> {
        use constants::FRAC_1_SQRT_2;
        let one = Complex64::new(1.0, 0.0);
        let expansion = match self {
            // No length-0 basis labels exist, so I(0) has no expansion
            StandardGate::I(0) => return None,
            StandardGate::I(n) => identity_expansion(*n),
            StandardGate::X => single_term("X", one),
            StandardGate::Y => single_term("Y", one),
            StandardGate::Z => single_term("Z", one),
            // H = (X + Z) / sqrt(2)
            StandardGate::H => {
                let w = Complex64::new(FRAC_1_SQRT_2, 0.0);
                let mut expansion = single_term("X", w);
                expansion
                    .insert("Z", w)
                    .expect("fixed single-qubit labels are valid");
                expansion
            }
        };
        Some(expansion)
    }
}

fn single_term(label: &str, coefficient: Complex64) -> PauliExpansion {
    let mut expansion = PauliExpansion::new();
    expansion
        .insert(label, coefficient)
        .expect("fixed single-qubit labels are valid");
    expansion
}

/// A generic gate defined by its matrix
///
/// Declares only a unitary; `pauli_expansion` stays `None`.
#[derive(Debug, Clone)]
pub struct CustomMatrixGate {
    pub matrix: Array2<Complex64>,
    pub name: String,
    pub qubits: usize,
}

impl QuantumGate for CustomMatrixGate {
    fn qubit_count(&self) -> usize {
        self.qubits
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn unitary(&self) -> Option<Array2<Complex64>> {
        Some(self.matrix.clone())
    }
}
