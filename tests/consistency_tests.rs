use ndarray::Array2;
use num_complex::Complex64;
use qverify::quantum::matrix::{approx_eq, identity};
use qverify::quantum::{CustomMatrixGate, Pauli, PauliExpansion, QuantumGate, StandardGate};
use qverify::testing::{
    assert_pauli_expansion_is_consistent_with_unitary, check_pauli_expansion, ConsistencyError,
    PAULI_EXPANSION_ATOL,
};

/// The reference operator from the fixture set:
/// sqrt(1/2)·X + sqrt(1/3)·Y + sqrt(1/6)·Z
fn reference_unitary() -> Array2<Complex64> {
    let x = Pauli::X.matrix();
    let y = Pauli::Y.matrix();
    let z = Pauli::Z.matrix();
    x * Complex64::new((1.0_f64 / 2.0).sqrt(), 0.0)
        + y * Complex64::new((1.0_f64 / 3.0).sqrt(), 0.0)
        + z * Complex64::new((1.0_f64 / 6.0).sqrt(), 0.0)
}

/// Declares both a unitary and a matching expansion.
#[derive(Debug)]
struct GateWithExplicitExpansion;

impl QuantumGate for GateWithExplicitExpansion {
    fn qubit_count(&self) -> usize {
        1
    }

    fn name(&self) -> String {
        "GateWithExplicitExpansion".to_string()
    }

    fn unitary(&self) -> Option<Array2<Complex64>> {
        Some(reference_unitary())
    }

    fn pauli_expansion(&self) -> Option<PauliExpansion> {
        Some(
            PauliExpansion::from_pairs(&[
                ("X", Complex64::new((1.0_f64 / 2.0).sqrt(), 0.0)),
                ("Y", Complex64::new((1.0_f64 / 3.0).sqrt(), 0.0)),
                ("Z", Complex64::new((1.0_f64 / 6.0).sqrt(), 0.0)),
            ])
            .unwrap(),
        )
    }
}

/// Declares an expansion but no unitary.
#[derive(Debug)]
struct GateWithoutUnitary;

impl QuantumGate for GateWithoutUnitary {
    fn qubit_count(&self) -> usize {
        1
    }

    fn name(&self) -> String {
        "GateWithoutUnitary".to_string()
    }

    fn pauli_expansion(&self) -> Option<PauliExpansion> {
        Some(
            PauliExpansion::from_pairs(&[
                ("X", Complex64::new((1.0_f64 / 2.0).sqrt(), 0.0)),
                ("Y", Complex64::new((1.0_f64 / 2.0).sqrt(), 0.0)),
            ])
            .unwrap(),
        )
    }
}

/// Declares neither capability.
#[derive(Debug)]
struct GateWithoutEither;

impl QuantumGate for GateWithoutEither {
    fn qubit_count(&self) -> usize {
        1
    }

    fn name(&self) -> String {
        "GateWithoutEither".to_string()
    }
}

/// Same unitary as [`GateWithExplicitExpansion`] but with the X and Z
/// coefficients swapped.
#[derive(Debug)]
struct GateWithPermutedCoefficients;

impl QuantumGate for GateWithPermutedCoefficients {
    fn qubit_count(&self) -> usize {
        1
    }

    fn name(&self) -> String {
        "GateWithPermutedCoefficients".to_string()
    }

    fn unitary(&self) -> Option<Array2<Complex64>> {
        Some(reference_unitary())
    }

    fn pauli_expansion(&self) -> Option<PauliExpansion> {
        Some(
            PauliExpansion::from_pairs(&[
                ("X", Complex64::new((1.0_f64 / 6.0).sqrt(), 0.0)),
                ("Y", Complex64::new((1.0_f64 / 3.0).sqrt(), 0.0)),
                ("Z", Complex64::new((1.0_f64 / 2.0).sqrt(), 0.0)),
            ])
            .unwrap(),
        )
    }
}

#[cfg(test)]
mod consistency_checker_tests {
    use super::*;

    #[test]
    fn test_matching_expansion_passes() {
        assert_pauli_expansion_is_consistent_with_unitary(&GateWithExplicitExpansion);
    }

    #[test]
    fn test_unitary_only_gate_passes() {
        // A gate that declares a unitary but no expansion has nothing to check
        let gate = CustomMatrixGate {
            matrix: identity(2),
            name: "eye".to_string(),
            qubits: 1,
        };
        assert!(check_pauli_expansion(&gate).is_ok());
    }

    #[test]
    fn test_expansion_only_gate_passes() {
        assert!(check_pauli_expansion(&GateWithoutUnitary).is_ok());
    }

    #[test]
    fn test_gate_with_neither_capability_passes() {
        assert!(check_pauli_expansion(&GateWithoutEither).is_ok());
    }

    #[test]
    fn test_four_qubit_identity_without_expansion_passes() {
        let gate = CustomMatrixGate {
            matrix: identity(16),
            name: "eye(16)".to_string(),
            qubits: 4,
        };
        assert!(check_pauli_expansion(&gate).is_ok());
    }

    #[test]
    fn test_permuted_coefficients_fail() {
        let err = check_pauli_expansion(&GateWithPermutedCoefficients)
            .expect_err("permuted coefficients must be detected");

        match err {
            ConsistencyError::Inconsistent {
                expected,
                reconstructed,
                max_deviation,
                atol,
            } => {
                // The error carries both matrices for diagnosis
                assert_eq!(expected.shape(), &[2, 2]);
                assert_eq!(reconstructed.shape(), &[2, 2]);
                assert!(
                    max_deviation > atol,
                    "deviation {} should exceed tolerance {}",
                    max_deviation,
                    atol
                );
                assert!(approx_eq(&expected, &reference_unitary(), 1e-12));
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "Pauli expansion consistency check failed")]
    fn test_assert_form_panics_on_mismatch() {
        assert_pauli_expansion_is_consistent_with_unitary(&GateWithPermutedCoefficients);
    }

    #[test]
    fn test_standard_gates_are_self_consistent() {
        let gates: Vec<StandardGate> = vec![
            StandardGate::I(1),
            StandardGate::I(2),
            StandardGate::I(4),
            StandardGate::X,
            StandardGate::Y,
            StandardGate::Z,
            StandardGate::H,
        ];

        for gate in &gates {
            assert!(
                check_pauli_expansion(gate).is_ok(),
                "standard gate {} failed its own consistency check",
                gate.name()
            );
        }
    }

    #[test]
    fn test_zero_qubit_identity_gate_passes() {
        // I(0) declares a 1x1 unitary but no expansion, so the check is vacuous
        let gate = StandardGate::I(0);
        assert!(gate.pauli_expansion().is_none());
        assert!(gate.unitary().is_some());
        assert!(check_pauli_expansion(&gate).is_ok());
    }

    #[test]
    fn test_tolerance_accepts_small_perturbation() {
        // A coefficient off by far less than the tolerance still passes
        #[derive(Debug)]
        struct NearlyExact;

        impl QuantumGate for NearlyExact {
            fn qubit_count(&self) -> usize {
                1
            }

            fn name(&self) -> String {
                "NearlyExact".to_string()
            }

            fn unitary(&self) -> Option<Array2<Complex64>> {
                Some(Pauli::X.matrix())
            }

            fn pauli_expansion(&self) -> Option<PauliExpansion> {
                Some(
                    PauliExpansion::from_pairs(&[(
                        "X",
                        Complex64::new(1.0 + 0.1 * PAULI_EXPANSION_ATOL, 0.0),
                    )])
                    .unwrap(),
                )
            }
        }

        assert!(check_pauli_expansion(&NearlyExact).is_ok());
    }
}

#[cfg(test)]
mod linearity_tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_scaling_expansion_scales_reconstruction() {
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let mut expansion = PauliExpansion::new();
            for label in ["II", "XZ", "YY", "ZI"] {
                let coefficient =
                    Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
                expansion.insert(label, coefficient).unwrap();
            }
            let k: f64 = rng.gen_range(-2.0..2.0);

            let scaled = expansion.scaled(k).reconstruct(2).unwrap();
            let reference = expansion.reconstruct(2).unwrap() * Complex64::new(k, 0.0);

            assert!(
                approx_eq(&scaled, &reference, 1e-10),
                "linearity violated for scale factor {}",
                k
            );
        }
    }
}
