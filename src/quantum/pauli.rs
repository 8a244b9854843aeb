// src/quantum/pauli.rs
//! The Pauli operator basis and sparse Pauli expansions
//!
//! Single-qubit operators are spanned by {I, X, Y, Z}; n-qubit operators by
//! the n-fold tensor products of those, indexed by length-n labels over the
//! alphabet IXYZ. A [`PauliExpansion`] stores the coefficients of such a
//! decomposition sparsely: labels that are absent carry a zero coefficient.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::{array, Array2};
use num_complex::Complex64;
use thiserror::Error;

use super::matrix::kron;

/// Errors arising from malformed Pauli basis labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PauliError {
    #[error("invalid character '{ch}' in Pauli label \"{label}\" (expected one of I, X, Y, Z)")]
    InvalidLabelChar { label: String, ch: char },

    #[error("Pauli label must not be empty")]
    EmptyLabel,

    #[error("Pauli label \"{label}\" has length {found}, expected {expected}")]
    LabelLengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
}

/// A single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    /// Identity
    I,

    /// Pauli-X
    X,

    /// Pauli-Y
    Y,

    /// Pauli-Z
    Z,
}

impl Pauli {
    /// Parse a single label character.
    pub fn from_char(ch: char) -> Option<Pauli> {
        match ch {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Returns the 2x2 matrix representation of this operator.
    pub fn matrix(&self) -> Array2<Complex64> {
        match self {
            Pauli::I => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
                ]
            }
            Pauli::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
            Pauli::Y => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
                    [Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)]
                ]
            }
            Pauli::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            }
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pauli::I => write!(f, "I"),
            Pauli::X => write!(f, "X"),
            Pauli::Y => write!(f, "Y"),
            Pauli::Z => write!(f, "Z"),
        }
    }
}

/// Parse a basis label into its per-qubit operators.
fn parse_label(label: &str) -> Result<Vec<Pauli>, PauliError> {
    if label.is_empty() {
        return Err(PauliError::EmptyLabel);
    }

    label
        .chars()
        .map(|ch| {
            Pauli::from_char(ch).ok_or_else(|| PauliError::InvalidLabelChar {
                label: label.to_string(),
                ch,
            })
        })
        .collect()
}

/// Build the basis matrix for a multi-qubit label.
///
/// The label's characters index single-qubit Pauli matrices; the result is
/// their Kronecker product in label order, a 2^n x 2^n matrix for a length-n
/// label. Single-character labels fall out of the same loop.
pub fn basis_matrix(label: &str) -> Result<Array2<Complex64>, PauliError> {
    let paulis = parse_label(label)?;

    let mut result = paulis[0].matrix();
    for p in &paulis[1..] {
        result = kron(&result, &p.matrix());
    }

    Ok(result)
}

/// A sparse Pauli-basis expansion: a mapping from basis labels to complex
/// coefficients, representing the operator Σ coefficient · basis_matrix(label).
///
/// All labels in one expansion must have the same length (the qubit count).
/// Labels not stored are treated as having a zero coefficient.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PauliExpansion {
    terms: BTreeMap<String, Complex64>,
}

impl PauliExpansion {
    /// Create an empty expansion.
    pub fn new() -> Self {
        PauliExpansion {
            terms: BTreeMap::new(),
        }
    }

    /// Create an expansion from label/coefficient pairs.
    pub fn from_pairs(pairs: &[(&str, Complex64)]) -> Result<Self, PauliError> {
        let mut expansion = PauliExpansion::new();
        for (label, coefficient) in pairs {
            expansion.insert(label, *coefficient)?;
        }
        Ok(expansion)
    }

    /// Insert a term, validating the label.
    ///
    /// Inserting an already-present label replaces its coefficient.
    pub fn insert(&mut self, label: &str, coefficient: Complex64) -> Result<(), PauliError> {
        parse_label(label)?;

        if let Some(expected) = self.num_qubits() {
            if label.len() != expected {
                return Err(PauliError::LabelLengthMismatch {
                    label: label.to_string(),
                    expected,
                    found: label.len(),
                });
            }
        }

        self.terms.insert(label.to_string(), coefficient);
        Ok(())
    }

    /// The coefficient of a label, zero if the label is not stored.
    pub fn coefficient(&self, label: &str) -> Complex64 {
        self.terms
            .get(label)
            .copied()
            .unwrap_or_else(|| Complex64::new(0.0, 0.0))
    }

    /// The qubit count implied by the stored labels, `None` when empty.
    pub fn num_qubits(&self) -> Option<usize> {
        self.terms.keys().next().map(|label| label.len())
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the stored (label, coefficient) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Complex64)> {
        self.terms.iter().map(|(label, c)| (label.as_str(), c))
    }

    /// Scale every coefficient by a real factor.
    ///
    /// Reconstruction is linear, so the reconstruction of the scaled
    /// expansion is the scaled reconstruction.
    pub fn scaled(&self, factor: f64) -> PauliExpansion {
        PauliExpansion {
            terms: self
                .terms
                .iter()
                .map(|(label, c)| (label.clone(), c * factor))
                .collect(),
        }
    }

    /// Reconstruct the matrix this expansion represents.
    ///
    /// Sums coefficient · basis_matrix(label) over every stored term into a
    /// 2^n x 2^n matrix for the given qubit count. An empty expansion
    /// reconstructs the zero matrix. A stored label whose length differs
    /// from `qubit_count` is an error.
    pub fn reconstruct(&self, qubit_count: usize) -> Result<Array2<Complex64>, PauliError> {
        let dim = 1 << qubit_count;
        let mut result = Array2::zeros((dim, dim));

        for (label, coefficient) in &self.terms {
            if label.len() != qubit_count {
                return Err(PauliError::LabelLengthMismatch {
                    label: label.clone(),
                    expected: qubit_count,
                    found: label.len(),
                });
            }

            result = result + basis_matrix(label)? * *coefficient;
        }

        Ok(result)
    }
}

impl fmt::Display for PauliExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (label, coefficient)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({})·{}", coefficient, label)?;
        }

        Ok(())
    }
}

/// The identity expansion for a qubit count: the all-I label with unit weight.
///
/// Returns the empty expansion for a zero-qubit count.
pub fn identity_expansion(qubit_count: usize) -> PauliExpansion {
    let label: String = std::iter::repeat('I').take(qubit_count).collect();
    let mut expansion = PauliExpansion::new();
    if !label.is_empty() {
        expansion.terms.insert(label, Complex64::new(1.0, 0.0));
    }
    expansion
}
