// src/testing/consistency.rs
//! Pauli-expansion consistency checking
//!
//! A gate may declare a unitary matrix, a Pauli expansion, both, or neither.
//! When both are declared they must describe the same operator: summing
//! coefficient · basis matrix over the expansion's terms has to reproduce
//! the unitary elementwise within [`PAULI_EXPANSION_ATOL`]. When either is
//! missing there is nothing to compare and the check passes.

use ndarray::Array2;
use num_complex::Complex64;
use thiserror::Error;

use crate::quantum::gate::QuantumGate;
use crate::quantum::matrix::{approx_eq, max_abs_diff};
use crate::quantum::pauli::PauliError;

/// Absolute elementwise tolerance for comparing a reconstructed matrix
/// against a declared unitary.
///
/// Expansions are typically written with literal square roots; 1e-6 absorbs
/// their round-off while still catching any wrong coefficient.
pub const PAULI_EXPANSION_ATOL: f64 = 1e-6;

/// Failure of a consistency check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyError {
    #[error(
        "Pauli expansion is inconsistent with the unitary: \
         max elementwise deviation {max_deviation:e} exceeds {atol:e}\n\
         declared unitary:\n{expected}\nreconstructed from expansion:\n{reconstructed}"
    )]
    Inconsistent {
        expected: Array2<Complex64>,
        reconstructed: Array2<Complex64>,
        max_deviation: f64,
        atol: f64,
    },

    #[error(transparent)]
    BadExpansion(#[from] PauliError),
}

/// Check that a gate's declared Pauli expansion reconstructs its declared
/// unitary.
///
/// Passes vacuously when the gate declares no unitary, no expansion, or
/// neither. When both are present, the expansion is reconstructed at the
/// gate's qubit count and compared elementwise against the unitary with
/// [`PAULI_EXPANSION_ATOL`]. On mismatch the error carries both matrices
/// and the largest deviation.
pub fn check_pauli_expansion(gate: &dyn QuantumGate) -> Result<(), ConsistencyError> {
    let unitary = match gate.unitary() {
        Some(u) => u,
        None => return Ok(()),
    };
    let expansion = match gate.pauli_expansion() {
        Some(e) => e,
        None => return Ok(()),
    };

    let reconstructed = expansion.reconstruct(gate.qubit_count())?;

    if approx_eq(&unitary, &reconstructed, PAULI_EXPANSION_ATOL) {
        return Ok(());
    }

    let max_deviation = if unitary.shape() == reconstructed.shape() {
        max_abs_diff(&unitary, &reconstructed)
    } else {
        f64::INFINITY
    };

    Err(ConsistencyError::Inconsistent {
        expected: unitary,
        reconstructed,
        max_deviation,
        atol: PAULI_EXPANSION_ATOL,
    })
}

/// Assertion form of [`check_pauli_expansion`] for use inside test suites.
///
/// # Panics
///
/// Panics with the full diagnostic when the gate's expansion does not
/// reconstruct its unitary.
pub fn assert_pauli_expansion_is_consistent_with_unitary(gate: &dyn QuantumGate) {
    if let Err(err) = check_pauli_expansion(gate) {
        panic!(
            "Pauli expansion consistency check failed for gate {}: {}",
            gate.name(),
            err
        );
    }
}
