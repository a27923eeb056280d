use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Signal;

/// Largest input arity among all gate types.
pub const MAX_ARITY: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateType {
    Not,
    And,
    Or,
    Nand,
}

impl GateType {
    pub const ALL: [GateType; 4] = [GateType::Not, GateType::And, GateType::Or, GateType::Nand];

    pub const fn arity(self) -> usize {
        match self {
            GateType::Not => 1,
            GateType::And | GateType::Or | GateType::Nand => 2,
        }
    }

    /// Boolean function of the gate over fully defined inputs.
    pub fn f(self) -> fn(&[bool]) -> bool {
        match self {
            GateType::Not => |x: &[bool]| !x[0],
            GateType::And => |x: &[bool]| x[0] && x[1],
            GateType::Or => |x: &[bool]| x[0] || x[1],
            GateType::Nand => |x: &[bool]| !(x[0] && x[1]),
        }
    }

    /// Applies the gate to tri-state inputs.
    ///
    /// Any `Unknown` input makes the output `Unknown`, whatever the other inputs are.
    /// This is deliberately stricter than Kleene logic: `And(False, Unknown)` is
    /// `Unknown`, not `False`.
    pub fn apply(self, inputs: &[Signal]) -> Signal {
        debug_assert_eq!(inputs.len(), self.arity());

        let mut bits = [false; MAX_ARITY];
        for (bit, signal) in bits.iter_mut().zip(inputs) {
            match signal.as_bool() {
                Some(value) => *bit = value,
                None => return Signal::Unknown,
            }
        }

        Signal::from(self.f()(&bits[..inputs.len()]))
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::Not => "NOT",
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Nand => "NAND",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCount {
    pub not: usize,
    pub and: usize,
    pub or: usize,
    pub nand: usize,
}

impl GateCount {
    pub fn handle(&mut self, gate_type: GateType) {
        match gate_type {
            GateType::Not => self.not += 1,
            GateType::And => self.and += 1,
            GateType::Or => self.or += 1,
            GateType::Nand => self.nand += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.not + self.and + self.or + self.nand
    }
}

impl FromIterator<GateType> for GateCount {
    fn from_iter<I: IntoIterator<Item = GateType>>(iter: I) -> Self {
        let mut count = GateCount::default();
        iter.into_iter().for_each(|gate_type| count.handle(gate_type));
        count
    }
}
