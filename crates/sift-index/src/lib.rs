//! In-memory inverted-index search engine.
//!
//! This crate is the engine behind sift search. It owns the corpus, builds
//! per-term postings with per-document occurrence counts, and answers
//! boolean queries (`AND`, `OR`, `ANDNOT`, parentheses) ranked by a TF-IDF
//! score. The index is build-once/query-many: documents are added up front
//! and never removed.
//!
//! # Indexing
//!
//! Documents arrive already tokenized; the index treats terms and paths as
//! opaque byte strings:
//!
//! ```
//! use sift_index::Index;
//!
//! let mut index = Index::new();
//! index.add_document("notes/cats.md", ["cat", "cat", "dog"]);
//! index.add_document("notes/dogs.md", ["dog"]);
//! assert_eq!(index.document_count(), 2);
//! ```
//!
//! # Querying
//!
//! ```
//! # use sift_index::Index;
//! # let mut index = Index::new();
//! # index.add_document("notes/cats.md", ["cat", "cat", "dog"]);
//! # index.add_document("notes/dogs.md", ["dog"]);
//! use sift_index::lex;
//!
//! let results = index.query(&lex("cat ANDNOT dog")).unwrap();
//! assert!(results.is_empty());
//!
//! let results = index.query(&lex("cat OR dog")).unwrap();
//! assert_eq!(results.len(), 2);
//! ```

#![warn(missing_docs)]

mod eval;
mod index;
mod posting;
mod result;
mod score;

pub use index::Index;
pub use posting::Posting;
pub use result::QueryResult;
// Query-language surface, re-exported so dependents need one crate only.
pub use sift_query::{ParseError, QueryNode, lex, parse};
