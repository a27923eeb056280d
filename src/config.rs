use serde::{Deserialize, Serialize};

/// Passes allowed by default before [`crate::Circuit::run`] gives up on reaching a fixpoint.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Knobs for a single [`crate::Circuit::run`] call.
///
/// An acyclic circuit settles in one pass and confirms the fixpoint on the
/// second, whatever its depth, so `max_iterations >= 2` is always enough for
/// it. Extra passes only matter for gates that read their own output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub max_iterations: usize,
    /// Log the schedule and every wire change at `info` instead of `trace`.
    pub trace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            trace: false,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
