//! Consistency-Checking Utilities for Quantum Gates
//!
//! This crate provides test-support utilities for quantum computing code.
//! Gates may optionally declare a unitary matrix and a Pauli-basis expansion;
//! the checker in [`testing`] verifies that when both are declared, the
//! expansion reconstructs the unitary. The [`quantum`] module carries the
//! supporting vocabulary: the Pauli operators, multi-qubit basis labels,
//! sparse expansions, and tolerance-based matrix comparison.

pub mod quantum;
pub mod testing;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::quantum::prelude::*;
    pub use crate::testing::{
        assert_pauli_expansion_is_consistent_with_unitary, check_pauli_expansion,
    };
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
