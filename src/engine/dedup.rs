//! Ordered, duplicate-free tag accumulation.
//!
//! Tags are collected table by table in a fixed order. The same label may be
//! produced by several rules in several tables; only its first occurrence
//! counts, so the final order is the first-occurrence order across the whole
//! evaluation sequence.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub(crate) struct TagSet {
    labels: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Append `label` unless already present. Returns whether it was added.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.seen.contains(label) {
            return false;
        }
        self.seen.insert(label.to_string());
        self.labels.push(label.to_string());
        true
    }

    pub fn extend<'a>(&mut self, labels: impl IntoIterator<Item = &'a str>) {
        for label in labels {
            self.insert(label);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.labels
    }
}
