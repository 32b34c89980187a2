//! Property-based tests for circuit synthesis.
//!
//! Checks measurement coverage, determinism and gate placement across the
//! full request range of qubit counts and every style preset.

use proptest::prelude::*;
use qrelay_circuit::{CircuitStyle, MAX_QUBITS, MIN_QUBITS, synthesize};

fn arb_style_name() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("superposition")),
        Just(Some("entangled")),
        Just(Some("interference")),
        Just(Some("unknown")),
    ]
}

fn count_lines(qasm: &str, prefix: &str) -> usize {
    qasm.lines().filter(|l| l.starts_with(prefix)).count()
}

proptest! {
    #[test]
    fn one_measurement_per_qubit(n in MIN_QUBITS..=MAX_QUBITS, name in arb_style_name()) {
        let qasm = synthesize(n, CircuitStyle::from_name(name));
        prop_assert_eq!(count_lines(&qasm, "measure "), n as usize);
        for i in 0..n {
            let expected = format!("measure q[{i}] -> c[{i}];");
            prop_assert!(qasm.contains(&expected));
        }
    }

    #[test]
    fn synthesis_is_deterministic(n in MIN_QUBITS..=MAX_QUBITS, name in arb_style_name()) {
        let style = CircuitStyle::from_name(name);
        prop_assert_eq!(synthesize(n, style), synthesize(n, style));
    }

    #[test]
    fn measurements_come_last(n in MIN_QUBITS..=MAX_QUBITS, name in arb_style_name()) {
        let qasm = synthesize(n, CircuitStyle::from_name(name));
        let lines: Vec<&str> = qasm.lines().collect();
        let tail = &lines[lines.len() - n as usize..];
        prop_assert!(tail.iter().all(|l| l.starts_with("measure ")));
    }

    #[test]
    fn entangled_pair_count(n in MIN_QUBITS..=MAX_QUBITS) {
        let qasm = synthesize(n, CircuitStyle::Entangled);
        prop_assert_eq!(count_lines(&qasm, "cx "), (n / 2) as usize);
        prop_assert_eq!(count_lines(&qasm, "h "), (n / 2) as usize);
    }

    #[test]
    fn interference_chain_length(n in MIN_QUBITS..=MAX_QUBITS) {
        let qasm = synthesize(n, CircuitStyle::Interference);
        prop_assert_eq!(count_lines(&qasm, "cx "), (n - 1) as usize);
        prop_assert_eq!(count_lines(&qasm, "rz("), n as usize);
        prop_assert_eq!(count_lines(&qasm, "h "), n as usize);
    }
}

#[test]
fn entangled_four_qubits_has_two_pairs() {
    let qasm = synthesize(4, CircuitStyle::Entangled);
    assert_eq!(count_lines(&qasm, "cx "), 2);
    assert!(qasm.contains("cx q[0],q[1];"));
    assert!(qasm.contains("cx q[2],q[3];"));
}

#[test]
fn entangled_five_qubits_leaves_last_qubit_bare() {
    let qasm = synthesize(5, CircuitStyle::Entangled);
    assert_eq!(count_lines(&qasm, "cx "), 2);

    let gate_lines: Vec<&str> = qasm
        .lines()
        .skip(4)
        .filter(|l| !l.starts_with("measure "))
        .collect();
    assert!(gate_lines.iter().all(|l| !l.contains("q[4]")));
}

#[test]
fn unknown_style_matches_superposition() {
    assert_eq!(
        synthesize(6, CircuitStyle::from_name(Some("teleport"))),
        synthesize(6, CircuitStyle::Superposition)
    );
}
