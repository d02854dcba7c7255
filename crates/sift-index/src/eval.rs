//! Set-algebra evaluation of query trees.

use std::{collections::HashSet, sync::Arc};

use sift_query::QueryNode;

use crate::{index::Index, posting::Posting};

/// Evaluates `node` against `index`, producing the set of matching paths.
///
/// Post-order walk: word leaves copy the posting's path set (unknown terms
/// yield the empty set, never an error), `Or` takes the union, `And` the
/// intersection, and `AndNot` the difference of their subtree results.
/// Postings are never mutated; every intermediate set is freshly built and
/// consumed by its parent node.
pub(crate) fn evaluate(index: &Index, node: &QueryNode) -> HashSet<Arc<str>> {
    match node {
        QueryNode::Word(term) => index
            .posting(term)
            .map(Posting::path_set)
            .unwrap_or_default(),
        QueryNode::Or(left, right) => {
            let mut paths = evaluate(index, left);
            paths.extend(evaluate(index, right));
            paths
        }
        QueryNode::And(left, right) => {
            let mut paths = evaluate(index, left);
            let right = evaluate(index, right);
            paths.retain(|path| right.contains(path));
            paths
        }
        QueryNode::AndNot(left, right) => {
            let mut paths = evaluate(index, left);
            let right = evaluate(index, right);
            paths.retain(|path| !right.contains(path));
            paths
        }
    }
}
