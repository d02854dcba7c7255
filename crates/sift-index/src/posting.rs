//! Per-term posting records.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// Per-term record of which documents contain the term and how often.
///
/// Membership and counts live in one map: the key set is exactly the set of
/// documents containing the term, so the two views can never disagree.
#[derive(Debug, Clone, Default)]
pub struct Posting {
    /// Occurrence count per document path. Counts are always positive.
    tf: HashMap<Arc<str>, u32>,
}

impl Posting {
    /// Records one occurrence of the term in `path`.
    pub(crate) fn record(&mut self, path: &Arc<str>) {
        *self.tf.entry(Arc::clone(path)).or_insert(0) += 1;
    }

    /// Number of documents containing the term (the document frequency).
    pub fn len(&self) -> usize {
        self.tf.len()
    }

    /// True when no document contains the term.
    pub fn is_empty(&self) -> bool {
        self.tf.is_empty()
    }

    /// True when the document at `path` contains the term.
    pub fn contains(&self, path: &str) -> bool {
        self.tf.contains_key(path)
    }

    /// Occurrence count of the term in `path`, or `None` when the document
    /// does not contain it.
    pub fn frequency(&self, path: &str) -> Option<u32> {
        self.tf.get(path).copied()
    }

    /// Iterates over the documents containing the term, in no particular
    /// order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.tf.keys().map(AsRef::as_ref)
    }

    /// Fresh copy of the path set; the paths themselves stay shared with
    /// the index's storage.
    pub(crate) fn path_set(&self) -> HashSet<Arc<str>> {
        self.tf.keys().cloned().collect()
    }
}
