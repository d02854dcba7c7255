//! Query result types.

use serde::Serialize;

/// One matched document with its relevance score.
///
/// Scores are non-negative. An exact 0 can occur (for instance in a matched
/// document whose every query term appears just once) and still places the
/// document in the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// The document path, as given to `add_document`.
    pub path: String,
    /// TF-IDF relevance score.
    pub score: f64,
}
