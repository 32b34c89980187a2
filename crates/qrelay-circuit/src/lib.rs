//! qrelay circuit synthesis
//!
//! Turns a qubit count and a high-level circuit style into an OpenQASM 2.0
//! program ready for submission to a remote sampler.
//!
//! # Styles
//!
//! - [`CircuitStyle::Superposition`]: a Hadamard on every qubit.
//! - [`CircuitStyle::Entangled`]: Bell pairs on `(0,1)`, `(2,3)`, …
//! - [`CircuitStyle::Interference`]: Hadamard plus an index-scaled `rz` on
//!   every qubit, followed by a linear `cx` chain.
//!
//! Every program ends with one measurement per qubit into the classical bit
//! of the same index.
//!
//! # Example
//!
//! ```rust
//! use qrelay_circuit::{CircuitStyle, synthesize};
//!
//! let qasm = synthesize(2, CircuitStyle::Entangled);
//! assert!(qasm.contains("cx q[0],q[1];"));
//! assert_eq!(qasm.matches("measure").count(), 2);
//! ```
//!
//! [`synthesize`] performs no bounds checking. Request boundaries should go
//! through [`CircuitSpec::new`], which enforces [`MIN_QUBITS`]..=[`MAX_QUBITS`].

pub mod emitter;
pub mod error;
pub mod program;
pub mod spec;

pub use emitter::emit_qasm2;
pub use error::{CircuitError, CircuitResult};
pub use program::{CircuitProgram, Instruction};
pub use spec::{CircuitSpec, CircuitStyle, MAX_QUBITS, MIN_QUBITS};

/// Synthesize the OpenQASM 2.0 program for `num_qubits` qubits in `style`.
pub fn synthesize(num_qubits: u32, style: CircuitStyle) -> String {
    emit_qasm2(&CircuitProgram::build(num_qubits, style))
}
