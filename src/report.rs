use std::{
    collections::BTreeMap,
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    CircuitError, RunConfig, Signal,
    gadgets::half_adder::{self, CARRY, INPUT_A, INPUT_B, SUM},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Circuit(#[from] CircuitError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
pub type ReportError = Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfAdderRecord {
    pub a: bool,
    pub b: bool,
    pub sum: Signal,
    pub carry: Signal,
    pub expected_sum: bool,
    pub expected_carry: bool,
    pub ok: bool,
}

impl HalfAdderRecord {
    /// `"00"`, `"01"`, `"10"` or `"11"`.
    pub fn key(&self) -> String {
        format!("{}{}", u8::from(self.a), u8::from(self.b))
    }
}

/// Half-adder results keyed by input combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HalfAdderReport(BTreeMap<String, HalfAdderRecord>);

impl HalfAdderReport {
    pub fn get(&self, key: &str) -> Option<&HalfAdderRecord> {
        self.0.get(key)
    }

    pub fn records(&self) -> impl Iterator<Item = &HalfAdderRecord> {
        self.0.values()
    }

    pub fn all_ok(&self) -> bool {
        self.records().all(|record| record.ok)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        info!("half-adder results written to {}", path.display());
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("Half-adder truth table (sum = XOR(a,b), carry = AND(a,b))\n");
        out.push_str(" a | b | sum | carry | expected | ok\n");
        out.push_str("---+---+-----+-------+----------+----\n");
        for r in self.records() {
            let _ = writeln!(
                out,
                " {} | {} |  {}  |   {}   |   {},{}    | {}",
                u8::from(r.a),
                u8::from(r.b),
                r.sum,
                r.carry,
                u8::from(r.expected_sum),
                u8::from(r.expected_carry),
                r.ok
            );
        }
        out
    }
}

/// Runs the half adder over every input combination.
pub fn run_half_adder_table(config: &RunConfig) -> Result<HalfAdderReport, ReportError> {
    let mut circuit = half_adder::build_half_adder()?;
    let mut records = BTreeMap::new();

    for ((a, b), (expected_sum, expected_carry)) in half_adder::TRUTH_TABLE {
        circuit.set_inputs([(INPUT_A, a), (INPUT_B, b)]);
        let snapshot = circuit.run(config)?;

        let sum = snapshot.get(SUM).unwrap_or_default();
        let carry = snapshot.get(CARRY).unwrap_or_default();
        let record = HalfAdderRecord {
            a,
            b,
            sum,
            carry,
            expected_sum,
            expected_carry,
            ok: sum == Signal::from(expected_sum) && carry == Signal::from(expected_carry),
        };
        records.insert(record.key(), record);
    }

    Ok(HalfAdderReport(records))
}
