use std::{collections::HashMap, fmt, ops::Deref};

use crate::{Signal, Snapshot};

/// Errors that can occur during wire operations
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// No wire is registered under the given name
    #[error("Wire `{0}` not found")]
    NotFound(String),
    /// Id was not issued by this registry
    #[error("Invalid wire index: {0}")]
    InvalidWireIndex(WireId),
}
pub type WireError = Error;

/// Position of a wire inside its circuit's arena. Stable for the lifetime of the circuit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for WireId {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wire {
    pub name: String,
    pub value: Signal,
}

impl Wire {
    pub(crate) fn new(name: impl Into<String>, value: Signal) -> Self {
        Wire {
            name: name.into(),
            value,
        }
    }
}

/// Append-only wire arena with a name index.
///
/// Wires are never removed, so every [`WireId`] handed out stays valid and
/// gates can hold ids instead of names.
#[derive(Clone, Debug, Default)]
pub struct Wires {
    wires: Vec<Wire>,
    index: HashMap<String, WireId>,
}

impl Wires {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<WireId> {
        self.index.get(name).copied()
    }

    pub fn lookup(&self, name: &str) -> Result<WireId, WireError> {
        self.id(name)
            .ok_or_else(|| WireError::NotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, wire_id: WireId) -> Result<&Wire, WireError> {
        self.wires
            .get(*wire_id)
            .ok_or(WireError::InvalidWireIndex(wire_id))
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Wire, WireError> {
        self.get(self.lookup(name)?)
    }

    /// Registers `name` with `value`, or overwrites the value if it already exists.
    pub fn declare(&mut self, name: &str, value: Signal) -> WireId {
        match self.id(name) {
            Some(wire_id) => {
                self.wires[*wire_id].value = value;
                wire_id
            }
            None => self.push(Wire::new(name, value)),
        }
    }

    /// Returns the id for `name`, creating it as `Unknown` if absent. Never touches an existing value.
    pub fn get_or_declare(&mut self, name: &str) -> WireId {
        match self.id(name) {
            Some(wire_id) => wire_id,
            None => self.push(Wire::new(name, Signal::Unknown)),
        }
    }

    fn push(&mut self, wire: Wire) -> WireId {
        let wire_id = WireId(self.wires.len());
        self.index.insert(wire.name.clone(), wire_id);
        self.wires.push(wire);
        wire_id
    }

    /// Reads a wire issued by this arena.
    pub(crate) fn value(&self, wire_id: WireId) -> Signal {
        self.wires[*wire_id].value
    }

    /// Writes a wire issued by this arena, returning whether the value changed.
    pub(crate) fn set(&mut self, wire_id: WireId, value: Signal) -> bool {
        let wire = &mut self.wires[*wire_id];
        let changed = wire.value != value;
        wire.value = value;
        changed
    }

    /// Current value of every wire, in arena order.
    pub(crate) fn values(&self) -> Vec<Signal> {
        self.wires.iter().map(|wire| wire.value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WireId, &Wire)> {
        self.wires
            .iter()
            .enumerate()
            .map(|(index, wire)| (WireId(index), wire))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.wires
            .iter()
            .map(|wire| (wire.name.clone(), wire.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_overwrites_existing_value() {
        let mut wires = Wires::new();
        let a = wires.declare("a", Signal::True);
        let again = wires.declare("a", Signal::False);

        assert_eq!(a, again);
        assert_eq!(wires.len(), 1);
        assert_eq!(wires.value(a), Signal::False);
    }

    #[test]
    fn get_or_declare_keeps_existing_value() {
        let mut wires = Wires::new();
        let a = wires.declare("a", Signal::True);

        assert_eq!(wires.get_or_declare("a"), a);
        assert_eq!(wires.value(a), Signal::True);

        let b = wires.get_or_declare("b");
        assert_eq!(b, WireId(1));
        assert_eq!(wires.value(b), Signal::Unknown);
    }

    #[test]
    fn lookup_reports_missing_name() {
        let wires = Wires::new();
        assert_eq!(
            wires.lookup("ghost"),
            Err(WireError::NotFound("ghost".to_owned()))
        );
        assert_eq!(
            wires.get(WireId(3)),
            Err(WireError::InvalidWireIndex(WireId(3)))
        );
    }

    #[test]
    fn set_reports_change() {
        let mut wires = Wires::new();
        let a = wires.declare("a", Signal::Unknown);

        assert!(wires.set(a, Signal::True));
        assert!(!wires.set(a, Signal::True));
    }

    #[test]
    fn snapshot_is_detached_from_live_wires() {
        let mut wires = Wires::new();
        let a = wires.declare("a", Signal::True);
        let snapshot = wires.snapshot();

        wires.set(a, Signal::False);
        assert_eq!(snapshot.get("a"), Some(Signal::True));
    }
}
