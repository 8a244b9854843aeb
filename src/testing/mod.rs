// src/testing/mod.rs
//! Consistency checks for gate implementations
//!
//! Utilities meant to be called from a gate library's own test suite to
//! verify that a gate's declared representations agree with each other.

pub mod consistency;

pub use consistency::{
    assert_pauli_expansion_is_consistent_with_unitary, check_pauli_expansion, ConsistencyError,
    PAULI_EXPANSION_ATOL,
};
