// src/quantum/mod.rs
//! Quantum operator vocabulary
//!
//! This module defines the Pauli basis, sparse Pauli expansions, gates with
//! optional capability accessors, and the matrix utilities they share.

pub mod gate;
pub mod matrix;
pub mod pauli;

pub use gate::{CustomMatrixGate, QuantumGate, StandardGate};
pub use pauli::{basis_matrix, Pauli, PauliError, PauliExpansion};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{CustomMatrixGate, QuantumGate, StandardGate};
    pub use super::{Pauli, PauliError, PauliExpansion};
    pub use super::matrix::{approx_eq, kron};
}
