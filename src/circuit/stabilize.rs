use itertools::Itertools;
use log::{Level, debug, log, warn};
use serde::{Deserialize, Serialize};

use super::Circuit;
use crate::{CircuitError, RunConfig, Snapshot};

/// Outcome of a run, with the pass count and whether a fixpoint was reached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub snapshot: Snapshot,
    pub passes: usize,
    pub converged: bool,
}

impl Circuit {
    /// Evaluates the circuit until no wire changes, returning every wire's value.
    ///
    /// Fails with [`CircuitError::Cycle`] before touching any wire when the gates
    /// cannot be ordered. Running out of passes is not an error, see [`RunReport`].
    pub fn run(&mut self, config: &RunConfig) -> Result<Snapshot, CircuitError> {
        self.run_with_report(config).map(|report| report.snapshot)
    }

    pub fn run_with_report(&mut self, config: &RunConfig) -> Result<RunReport, CircuitError> {
        let level = if config.trace {
            Level::Info
        } else {
            Level::Trace
        };

        let order = self.schedule()?;
        log!(
            level,
            "topological order: [{}]",
            order.iter().map(|&index| self.gates[index].id()).join(", ")
        );

        let mut passes = 0;
        let mut converged = false;

        while passes < config.max_iterations {
            passes += 1;
            log!(level, "pass {passes}");

            let before = self.wires.values();
            for &index in &order {
                let gate = &self.gates[index];
                if gate.evaluate(&mut self.wires) {
                    log!(
                        level,
                        " {} -> {} = {}",
                        gate.id(),
                        gate.gate.output,
                        self.wires.value(gate.output)
                    );
                }
            }

            if before == self.wires.values() {
                converged = true;
                log!(level, "converged after {passes} pass(es)");
                break;
            }
        }

        if !converged {
            warn!(
                "no fixpoint after {} pass(es), returning last values",
                config.max_iterations
            );
        }
        debug!(
            "run finished: {} gates, {} wires, {passes} pass(es)",
            self.gates.len(),
            self.wires.len()
        );

        Ok(RunReport {
            snapshot: self.wires.snapshot(),
            passes,
            converged,
        })
    }
}
