//! Circuit request types: style presets and bounded qubit counts.

use std::fmt;

use crate::error::{CircuitError, CircuitResult};

/// Smallest qubit count accepted at the request boundary.
pub const MIN_QUBITS: u32 = 2;

/// Largest qubit count accepted at the request boundary (Eagle-class devices).
pub const MAX_QUBITS: u32 = 127;

/// High-level circuit preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CircuitStyle {
    /// Hadamard on every qubit.
    #[default]
    Superposition,
    /// Bell pairs over adjacent qubit pairs.
    Entangled,
    /// Hadamard + phase ramp followed by a linear CX chain.
    Interference,
}

impl CircuitStyle {
    /// All presets, in declaration order.
    pub const ALL: [CircuitStyle; 3] = [
        CircuitStyle::Superposition,
        CircuitStyle::Entangled,
        CircuitStyle::Interference,
    ];

    /// Resolve a style name. Absent, empty or unknown names fall back to
    /// [`CircuitStyle::Superposition`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("entangled") => CircuitStyle::Entangled,
            Some("interference") => CircuitStyle::Interference,
            _ => CircuitStyle::Superposition,
        }
    }

    /// Wire name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CircuitStyle::Superposition => "superposition",
            CircuitStyle::Entangled => "entangled",
            CircuitStyle::Interference => "interference",
        }
    }
}

impl fmt::Display for CircuitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated circuit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitSpec {
    num_qubits: u32,
    style: CircuitStyle,
}

impl CircuitSpec {
    /// Build a circuit request, rejecting qubit counts outside `MIN_QUBITS..=MAX_QUBITS`.
    pub fn new(num_qubits: i64, style: CircuitStyle) -> CircuitResult<Self> {
        match u32::try_from(num_qubits) {
            Ok(n) if (MIN_QUBITS..=MAX_QUBITS).contains(&n) => Ok(Self {
                num_qubits: n,
                style,
            }),
            _ => Err(CircuitError::QubitsOutOfRange {
                got: num_qubits,
                min: MIN_QUBITS,
                max: MAX_QUBITS,
            }),
        }
    }

    /// Number of qubits (and classical bits).
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Circuit preset.
    pub fn style(&self) -> CircuitStyle {
        self.style
    }

    /// Emit the OpenQASM 2.0 program for this circuit.
    pub fn synthesize(&self) -> String {
        crate::synthesize(self.num_qubits, self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_name() {
        assert_eq!(
            CircuitStyle::from_name(Some("entangled")),
            CircuitStyle::Entangled
        );
        assert_eq!(
            CircuitStyle::from_name(Some("interference")),
            CircuitStyle::Interference
        );
        assert_eq!(
            CircuitStyle::from_name(Some("superposition")),
            CircuitStyle::Superposition
        );
    }

    #[test]
    fn test_style_defaults_to_superposition() {
        assert_eq!(CircuitStyle::from_name(None), CircuitStyle::Superposition);
        assert_eq!(CircuitStyle::from_name(Some("")), CircuitStyle::Superposition);
        assert_eq!(
            CircuitStyle::from_name(Some("Entangled")),
            CircuitStyle::Superposition
        );
        assert_eq!(
            CircuitStyle::from_name(Some("ghz")),
            CircuitStyle::Superposition
        );
    }

    #[test]
    fn test_style_name_roundtrip() {
        for style in CircuitStyle::ALL {
            assert_eq!(CircuitStyle::from_name(Some(style.as_str())), style);
        }
    }

    #[test]
    fn test_spec_bounds() {
        assert!(CircuitSpec::new(2, CircuitStyle::default()).is_ok());
        assert!(CircuitSpec::new(127, CircuitStyle::default()).is_ok());

        for bad in [-1, 0, 1, 128, i64::from(u32::MAX) + 1] {
            let err = CircuitSpec::new(bad, CircuitStyle::default()).unwrap_err();
            assert_eq!(
                err,
                CircuitError::QubitsOutOfRange {
                    got: bad,
                    min: MIN_QUBITS,
                    max: MAX_QUBITS,
                }
            );
        }
    }

    #[test]
    fn test_spec_synthesize_matches_free_function() {
        let spec = CircuitSpec::new(3, CircuitStyle::Interference).unwrap();
        assert_eq!(spec.num_qubits(), 3);
        assert_eq!(spec.style(), CircuitStyle::Interference);
        assert_eq!(
            spec.synthesize(),
            crate::synthesize(3, CircuitStyle::Interference)
        );
    }
}
