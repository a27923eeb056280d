use std::collections::VecDeque;

use log::{debug, trace};

use crate::{CircuitError, core::gate::WiredGate};

/// Producer → consumer edges between gates, indexed by attachment position.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Consumers of each gate's output, in attachment order, without duplicates.
    pub dependents: Vec<Vec<usize>>,
    pub in_degree: Vec<usize>,
}

impl DependencyGraph {
    /// Builds the graph from the wire each gate drives.
    ///
    /// Every wire has at most one producer (enforced on attachment), so no
    /// edge is lost. A gate reading its own output adds no edge.
    pub fn build(gates: &[WiredGate], wire_count: usize) -> Self {
        let mut producers = vec![None; wire_count];
        for (index, gate) in gates.iter().enumerate() {
            producers[*gate.output] = Some(index);
        }

        let mut dependents = vec![Vec::new(); gates.len()];
        let mut in_degree = vec![0; gates.len()];

        for (consumer, gate) in gates.iter().enumerate() {
            for wire_id in &gate.inputs {
                let Some(producer) = producers[**wire_id] else {
                    continue;
                };
                let consumers: &mut Vec<usize> = &mut dependents[producer];
                // consumers are visited in ascending order, so a repeat edge is always the last one
                if producer == consumer || consumers.last() == Some(&consumer) {
                    continue;
                }
                trace!("edge {} -> {}", gates[producer].id(), gate.id());
                consumers.push(consumer);
                in_degree[consumer] += 1;
            }
        }

        Self {
            dependents,
            in_degree,
        }
    }

    /// Kahn's algorithm. Ties are broken by attachment order, so the result is
    /// fully determined by the construction sequence.
    pub fn topological_order(&self, gates: &[WiredGate]) -> Result<Vec<usize>, CircuitError> {
        let mut in_degree = self.in_degree.clone();
        let mut queue: VecDeque<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(index, _)| index)
            .collect();

        let mut order = Vec::with_capacity(gates.len());
        while let Some(index) = queue.pop_front() {
            order.push(index);
            for &dependent in &self.dependents[index] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    queue.push_back(dependent);
                }
            }
        }

        if order.len() < gates.len() {
            let stuck: Vec<String> = in_degree
                .iter()
                .enumerate()
                .filter(|(_, degree)| **degree > 0)
                .map(|(index, _)| gates[index].id().to_owned())
                .collect();
            debug!(
                "scheduled {} of {} gates, cycle through {stuck:?}",
                order.len(),
                gates.len()
            );
            return Err(CircuitError::Cycle { gates: stuck });
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gate, Wires};

    fn wire_all(gates: Vec<Gate>) -> (Vec<WiredGate>, usize) {
        let mut wires = Wires::new();
        let wired = gates
            .into_iter()
            .map(|gate| WiredGate {
                inputs: gate
                    .inputs
                    .iter()
                    .map(|name| wires.get_or_declare(name))
                    .collect(),
                output: wires.get_or_declare(&gate.output),
                gate,
            })
            .collect();
        (wired, wires.len())
    }

    #[test]
    fn duplicate_inputs_add_one_edge() {
        let (gates, wire_count) = wire_all(vec![
            Gate::not("n", "a", "x"),
            Gate::and("sq", "x", "x", "y"),
        ]);
        let graph = DependencyGraph::build(&gates, wire_count);

        assert_eq!(graph.dependents, vec![vec![1], vec![]]);
        assert_eq!(graph.in_degree, vec![0, 1]);
    }

    #[test]
    fn self_loop_adds_no_edge() {
        let (gates, wire_count) = wire_all(vec![Gate::not("osc", "x", "x")]);
        let graph = DependencyGraph::build(&gates, wire_count);

        assert_eq!(graph.in_degree, vec![0]);
        assert_eq!(graph.topological_order(&gates), Ok(vec![0]));
    }

    #[test]
    fn reverse_attachment_is_reordered() {
        let (gates, wire_count) = wire_all(vec![
            Gate::not("last", "y", "z"),
            Gate::not("middle", "x", "y"),
            Gate::not("first", "a", "x"),
        ]);
        let graph = DependencyGraph::build(&gates, wire_count);

        assert_eq!(graph.topological_order(&gates), Ok(vec![2, 1, 0]));
    }

    #[test]
    fn ties_follow_attachment_order() {
        let (gates, wire_count) = wire_all(vec![
            Gate::and("join", "p", "q", "r"),
            Gate::not("q_gate", "a", "q"),
            Gate::not("p_gate", "a", "p"),
            Gate::not("free", "a", "s"),
        ]);
        let graph = DependencyGraph::build(&gates, wire_count);

        assert_eq!(graph.topological_order(&gates), Ok(vec![1, 2, 3, 0]));
    }

    #[test]
    fn cycle_names_unscheduled_gates() {
        let (gates, wire_count) = wire_all(vec![
            Gate::not("head", "a", "b"),
            Gate::and("left", "b", "d", "c"),
            Gate::not("right", "c", "d"),
        ]);
        let graph = DependencyGraph::build(&gates, wire_count);

        assert_eq!(
            graph.topological_order(&gates),
            Err(CircuitError::Cycle {
                gates: vec!["left".to_owned(), "right".to_owned()]
            })
        );
    }
}
