//! Boolean query parsing and AST for sift search.
//!
//! The query language is a small infix boolean algebra over search terms:
//!
//! - **Words**: `cat` - documents containing the term
//! - **OR**: `cat OR dog` - union
//! - **AND**: `cat AND dog` - intersection
//! - **ANDNOT**: `cat ANDNOT dog` - difference
//! - **Grouping**: `( cat OR dog ) AND fish` - precedence control
//!
//! Operators are case-sensitive uppercase. `OR` binds tightest and
//! `ANDNOT` loosest, so `a OR b AND c` reads as `(a OR b) AND c`. All
//! operators are right-associative, which is only observable for `ANDNOT`:
//! `a ANDNOT b ANDNOT c` reads as `a ANDNOT (b ANDNOT c)`.
//!
//! The parser consumes pre-split lexemes ([`parse`]); [`lex`] implements
//! the splitting contract for callers starting from a raw string.
//!
//! # Example
//!
//! ```
//! use sift_query::{lex, parse};
//!
//! let node = parse(&lex("( cat OR dog ) ANDNOT fish")).unwrap();
//! assert_eq!(node.to_string(), "((cat OR dog) ANDNOT fish)");
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::QueryNode;
pub use error::ParseError;
pub use lexer::lex;
pub use parser::parse;
