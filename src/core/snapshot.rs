use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::Signal;

/// Owned copy of every wire value at the end of a run, ordered by wire name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(BTreeMap<String, Signal>);

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<Signal> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Signal)> {
        self.0.iter().map(|(name, signal)| (name.as_str(), *signal))
    }

    pub fn into_inner(self) -> BTreeMap<String, Signal> {
        self.0
    }
}

impl FromIterator<(String, Signal)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Signal)>>(iter: I) -> Self {
        Snapshot(iter.into_iter().collect())
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, Signal);
    type IntoIter = btree_map::IntoIter<String, Signal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
