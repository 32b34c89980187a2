//! OpenQASM 2.0 emitter.

use crate::program::{CircuitProgram, Instruction};

/// Emit a program as OpenQASM 2.0 source.
///
/// Output uses the `qelib1.inc` gate set, QASM2 register declarations
/// (`qreg q[n];` / `creg c[n];`) and `measure q[i] -> c[i];` measurements.
/// Every line, including the last, ends with `\n`.
pub fn emit_qasm2(program: &CircuitProgram) -> String {
    let mut emitter = Qasm2Emitter::new();
    emitter.emit_program(program);
    emitter.output
}

struct Qasm2Emitter {
    output: String,
}

impl Qasm2Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_program(&mut self, program: &CircuitProgram) {
        let n = program.num_qubits();

        self.writeln("OPENQASM 2.0;");
        self.writeln("include \"qelib1.inc\";");
        self.writeln(&format!("qreg q[{n}];"));
        self.writeln(&format!("creg c[{n}];"));

        for instruction in program.instructions() {
            self.emit_instruction(instruction);
        }
    }

    fn emit_instruction(&mut self, instruction: &Instruction) {
        let line = match *instruction {
            Instruction::H(q) => format!("h q[{q}];"),
            Instruction::Cx(c, t) => format!("cx q[{c}],q[{t}];"),
            Instruction::Rz(angle, q) => format!("rz({}) q[{q}];", format_angle(angle)),
            Instruction::Measure(q, c) => format!("measure q[{q}] -> c[{c}];"),
        };
        self.writeln(&line);
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

/// Shortest decimal form of an angle: `0`, `0.5`, `1`, `1.5`, …
fn format_angle(angle: f64) -> String {
    if angle == 0.0 {
        // Avoid emitting "-0".
        return "0".to_string();
    }
    format!("{angle}")
}
