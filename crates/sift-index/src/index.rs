//! The inverted index.

use std::{collections::HashMap, sync::Arc};

use sift_query::{ParseError, parse};

use crate::{QueryResult, eval::evaluate, posting::Posting, score::rank};

/// In-memory inverted index over a corpus of tokenized documents.
///
/// Build once with [`Index::add_document`], then query many times with
/// [`Index::query`]. Terms and paths are opaque strings compared bytewise;
/// no stemming, case folding, or other normalization is applied.
///
/// The index provides no internal locking. Shared references support
/// concurrent readers; the borrow checker already rules out a writer
/// running alongside them.
#[derive(Debug, Default)]
pub struct Index {
    /// Term dictionary: one posting per distinct term.
    terms: HashMap<String, Posting>,
    /// Every document path added, in insertion order. Duplicates are kept
    /// and count separately toward the scoring denominator.
    paths: Vec<Arc<str>>,
}

impl Index {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tokenized document to the index.
    ///
    /// `path` joins the corpus even when `tokens` is empty. Each token
    /// records one occurrence of that term in the document; token order is
    /// irrelevant to the resulting state, only multiplicity matters. The
    /// index takes ownership of the path and of every token; a token whose
    /// term is already in the dictionary is dropped after the count update.
    ///
    /// Two caveats carried over from the engine's contract:
    ///
    /// - Tokens spelled like query operators (`AND`, `OR`, `ANDNOT`,
    ///   parentheses) are indexed like any other term. The index is
    ///   grammar-agnostic, but such terms cannot be reached through the
    ///   query language.
    /// - Paths are not deduplicated. Adding the same path twice counts it
    ///   twice in the document-frequency denominator used for scoring.
    pub fn add_document(
        &mut self,
        path: impl Into<Arc<str>>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let path: Arc<str> = path.into();
        self.paths.push(Arc::clone(&path));

        for token in tokens {
            self.terms.entry(token.into()).or_default().record(&path);
        }
    }

    /// True when `term` occurs in at least one document.
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Returns the posting for `term`, or `None` for unknown terms.
    pub fn posting(&self, term: &str) -> Option<&Posting> {
        self.terms.get(term)
    }

    /// Number of documents added, duplicates included.
    pub fn document_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of distinct terms in the dictionary.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// True when no document has been added.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the dictionary terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Raw inverse document frequency of `term`:
    /// `document_count / |documents containing term|`.
    ///
    /// Returns `None` when the term is not in the dictionary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let posting = self.terms.get(term)?;
        Some(self.paths.len() as f64 / posting.len() as f64)
    }

    /// Runs a boolean query against the index.
    ///
    /// `lexemes` is the pre-split query (see [`sift_query::lex`] for the
    /// splitting contract). On success, returns the matching documents
    /// scored against the raw lexeme sequence and sorted by descending
    /// score. Parse failures report one of the stable [`ParseError`]
    /// diagnostics and leave the index untouched.
    ///
    /// ```
    /// use sift_index::Index;
    ///
    /// let mut index = Index::new();
    /// index.add_document("a", ["cat", "dog"]);
    /// index.add_document("b", ["cat"]);
    ///
    /// let results = index.query(&["cat", "ANDNOT", "dog"]).unwrap();
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].path, "b");
    /// ```
    pub fn query(&self, lexemes: &[impl AsRef<str>]) -> Result<Vec<QueryResult>, ParseError> {
        let node = parse(lexemes)?;
        let matched = evaluate(self, &node);
        Ok(rank(self, lexemes, matched))
    }
}
