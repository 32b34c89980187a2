//! Ordered gate programs built from a style preset.

use crate::spec::CircuitStyle;

/// Phase step applied per qubit index by the interference preset.
pub const INTERFERENCE_PHASE_STEP: f64 = 0.5;

/// A single program instruction. Qubit and classical bit indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Hadamard.
    H(u32),
    /// Controlled-X (control, target).
    Cx(u32, u32),
    /// Z rotation by the given angle in radians.
    Rz(f64, u32),
    /// Measure a qubit into a classical bit.
    Measure(u32, u32),
}

impl Instruction {
    /// Qubits this instruction acts on.
    pub fn qubits(&self) -> Vec<u32> {
        match *self {
            Instruction::H(q) | Instruction::Rz(_, q) | Instruction::Measure(q, _) => vec![q],
            Instruction::Cx(c, t) => vec![c, t],
        }
    }

    /// Whether this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Instruction::Measure(..))
    }
}

/// A circuit as an ordered instruction list over `num_qubits` qubits and
/// `num_qubits` classical bits.
///
/// Instruction order is execution order on the remote device.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitProgram {
    num_qubits: u32,
    instructions: Vec<Instruction>,
}

impl CircuitProgram {
    /// Build the program for a style preset, terminated by a full-width
    /// measurement block.
    pub fn build(num_qubits: u32, style: CircuitStyle) -> Self {
        let mut instructions = Vec::new();

        match style {
            CircuitStyle::Superposition => {
                instructions.extend((0..num_qubits).map(Instruction::H));
            }
            CircuitStyle::Entangled => {
                // An odd trailing qubit is left untouched.
                for q in (0..num_qubits.saturating_sub(1)).step_by(2) {
                    instructions.push(Instruction::H(q));
                    instructions.push(Instruction::Cx(q, q + 1));
                }
            }
            CircuitStyle::Interference => {
                for q in 0..num_qubits {
                    instructions.push(Instruction::H(q));
                    instructions.push(Instruction::Rz(
                        f64::from(q) * INTERFERENCE_PHASE_STEP,
                        q,
                    ));
                }
                for q in 0..num_qubits.saturating_sub(1) {
                    instructions.push(Instruction::Cx(q, q + 1));
                }
            }
        }

        instructions.extend((0..num_qubits).map(|q| Instruction::Measure(q, q)));

        Self {
            num_qubits,
            instructions,
        }
    }

    /// Number of qubits (equal to the number of classical bits).
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Instructions in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of gate instructions, excluding measurements.
    pub fn num_gates(&self) -> usize {
        self.instructions
            .iter()
            .filter(|inst| !inst.is_measurement())
            .count()
    }
}
