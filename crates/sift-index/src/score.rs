//! TF-IDF scoring and result ordering.

use std::{cmp::Ordering, collections::HashSet, sync::Arc};

use crate::{index::Index, result::QueryResult};

/// Scores one `(document, term)` pair.
///
/// The formula is `ln(tf) · ln(document_count / document_frequency)`. The
/// `ln(tf)` factor (rather than the conventional bare `tf`) is the engine's
/// historical shape, kept for behavioral fidelity; two consequences are
/// worth knowing:
///
/// - a term occurring exactly once in a document contributes 0 (`ln 1 = 0`),
/// - a term occurring in every indexed document contributes 0 everywhere.
///
/// Unknown terms and documents not containing the term score 0.
pub(crate) fn term_score(index: &Index, path: &str, term: &str) -> f64 {
    let Some(posting) = index.posting(term) else {
        return 0.0;
    };
    let Some(tf) = posting.frequency(path) else {
        return 0.0;
    };

    let idf = index.document_count() as f64 / posting.len() as f64;
    f64::from(tf).ln() * idf.ln()
}

/// Scores every matched document against the raw query lexeme sequence and
/// returns the results sorted by descending score.
///
/// The sum runs over the lexemes exactly as the caller gave them, operator
/// and parenthesis lexemes included; those are never dictionary terms, so
/// they contribute 0. Equal scores tie-break by path ascending, keeping the
/// ordering deterministic (the contract only promises descending score).
pub(crate) fn rank(
    index: &Index,
    lexemes: &[impl AsRef<str>],
    matched: HashSet<Arc<str>>,
) -> Vec<QueryResult> {
    let mut results: Vec<QueryResult> = matched
        .into_iter()
        .map(|path| {
            let score = lexemes
                .iter()
                .map(|lexeme| term_score(index, &path, lexeme.as_ref()))
                .sum();
            QueryResult {
                path: path.to_string(),
                score,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.path.cmp(&b.path))
    });

    results
}
