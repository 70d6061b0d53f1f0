//! Mapping from label name to label record.

use std::collections::{btree_map, BTreeMap};

use github_client::Label;
use tracing::warn;

#[cfg(test)]
#[path = "label_set_tests.rs"]
mod tests;

/// A set of labels keyed by name.
///
/// Used for both the desired state (from the label file) and the remote state
/// (from the repository). Names are unique; when a source lists the same name
/// twice the later record replaces the earlier one. Iteration is in ascending
/// name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: BTreeMap<String, Label>,
}

impl LabelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from records in source order.
    ///
    /// Duplicate names keep the last record and log a warning.
    pub fn from_labels(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut set = Self::new();
        for label in labels {
            if let Some(previous) = set.insert(label) {
                warn!(
                    label = previous.name,
                    discarded_color = previous.color,
                    "Duplicate label name, keeping the last definition"
                );
            }
        }
        set
    }

    /// Inserts a label, returning the record it replaced.
    pub fn insert(&mut self, label: Label) -> Option<Label> {
        self.labels.insert(label.name.clone(), label)
    }

    /// Removes the label with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Label> {
        self.labels.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the labels in name order.
    pub fn iter(&self) -> btree_map::Values<'_, String, Label> {
        self.labels.values()
    }

    /// The label names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Self::from_labels(iter)
    }
}

impl IntoIterator for LabelSet {
    type Item = Label;
    type IntoIter = btree_map::IntoValues<String, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_values()
    }
}

impl<'a> IntoIterator for &'a LabelSet {
    type Item = &'a Label;
    type IntoIter = btree_map::Values<'a, String, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.values()
    }
}
